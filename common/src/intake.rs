//! アップロードファイルの受付判定
//!
//! MIMEタイプまたは拡張子のどちらかが許可リストに含まれていればOK。
//! 複数ファイルが渡されても先頭の1件だけを扱う。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 許可するMIMEタイプ
pub const ALLOWED_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// 許可する拡張子
pub const ALLOWED_EXTENSIONS: [&str; 3] = [".pdf", ".doc", ".docx"];

/// ファイル選択ダイアログの accept 属性
pub const ACCEPT_ATTRIBUTE: &str = ".pdf,.doc,.docx";

/// ドロップ/選択されたファイルの情報
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFile {
    pub name: String,
    /// ブラウザが判定したMIMEタイプ（空文字の場合あり）
    pub mime_type: String,
    pub size_bytes: u64,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes: 0,
        }
    }

    pub fn with_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = size_bytes;
        self
    }

    pub fn is_supported(&self) -> bool {
        if ALLOWED_MIME_TYPES.contains(&self.mime_type.as_str()) {
            return true;
        }
        let lower = self.name.to_lowercase();
        ALLOWED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
    }
}

/// 受付対象のファイルを選ぶ
///
/// # Returns
/// * `Ok(None)` - ファイルなし（何もしない）
/// * `Ok(Some(file))` - 先頭ファイルが受付可能
/// * `Err(Error::UnsupportedFile)` - 先頭ファイルが対象外の形式
pub fn select_upload(files: &[UploadFile]) -> Result<Option<&UploadFile>> {
    let Some(first) = files.first() else {
        return Ok(None);
    };

    if files.len() > 1 {
        log::debug!("{}件中先頭のみ処理: {}", files.len(), first.name);
    }

    if first.is_supported() {
        Ok(Some(first))
    } else {
        Err(Error::UnsupportedFile(first.name.clone()))
    }
}

/// 拡張子からMIMEタイプを推定（CLI用）
pub fn guess_mime_type(file_name: &str) -> &'static str {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".docx") {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    } else if lower.ends_with(".doc") {
        "application/msword"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_by_mime_type() {
        let file = UploadFile::new("scan", "application/pdf");
        assert!(file.is_supported());
    }

    #[test]
    fn test_accepts_by_extension_case_insensitive() {
        assert!(UploadFile::new("Agreement.PDF", "").is_supported());
        assert!(UploadFile::new("amendment.Docx", "application/octet-stream").is_supported());
        assert!(UploadFile::new("old.doc", "").is_supported());
    }

    #[test]
    fn test_rejects_other_types() {
        assert!(!UploadFile::new("photo.png", "image/png").is_supported());
        assert!(!UploadFile::new("notes.txt", "text/plain").is_supported());
        assert!(!UploadFile::new("pdf", "").is_supported());
    }

    #[test]
    fn test_select_upload_empty_is_noop() {
        assert!(matches!(select_upload(&[]), Ok(None)));
    }

    #[test]
    fn test_select_upload_uses_first_file_only() {
        let files = vec![
            UploadFile::new("agreement.pdf", "application/pdf"),
            UploadFile::new("photo.png", "image/png"),
        ];
        let selected = select_upload(&files).unwrap().unwrap();
        assert_eq!(selected.name, "agreement.pdf");

        let files = vec![
            UploadFile::new("photo.png", "image/png"),
            UploadFile::new("agreement.pdf", "application/pdf"),
        ];
        let err = select_upload(&files).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFile(name) if name == "photo.png"));
    }

    #[test]
    fn test_guess_mime_type() {
        assert_eq!(guess_mime_type("a.pdf"), "application/pdf");
        assert_eq!(guess_mime_type("a.DOC"), "application/msword");
        assert_eq!(
            guess_mime_type("a.docx"),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(guess_mime_type("a.txt"), "");
    }
}
