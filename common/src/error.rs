//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 許可されていない形式のファイル（ファイル名を保持）
    #[error("Please upload a PDF or DOC file.")]
    UnsupportedFile(String),

    #[error("Confidence out of range: {0} (expected 0-100)")]
    ConfidenceOutOfRange(u32),

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unsupported_file() {
        let error = Error::UnsupportedFile("notes.txt".to_string());
        assert_eq!(format!("{}", error), "Please upload a PDF or DOC file.");
    }

    #[test]
    fn test_error_display_confidence() {
        let error = Error::ConfidenceOutOfRange(150);
        let display = format!("{}", error);
        assert!(display.contains("150"));
        assert!(display.contains("0-100"));
    }

    #[test]
    fn test_error_from_domain_operations() {
        let error = crate::types::Confidence::new(101).unwrap_err();
        assert!(matches!(error, Error::ConfidenceOutOfRange(101)));

        let error = "xero".parse::<crate::platform::Platform>().unwrap_err();
        assert!(matches!(error, Error::UnknownPlatform(ref id) if id == "xero"));
        assert_eq!(format!("{}", error), "Unknown platform: xero");
    }

    #[test]
    fn test_error_debug_keeps_file_name() {
        let error = Error::UnsupportedFile("photo.png".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnsupportedFile"));
        assert!(debug.contains("photo.png"));
    }
}
