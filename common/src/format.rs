//! 表示用フォーマット

use chrono::NaiveDate;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// バイト数を "1.5 KB" 形式にする（末尾の0は省く）
pub fn format_bytes(bytes: u64, decimals: i32) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let dm = decimals.max(0);

    // floor(log1024(bytes))、GB で頭打ち
    let mut i = 0;
    let mut unit = 1_u64;
    while i < SIZE_UNITS.len() - 1 && bytes / unit >= 1024 {
        unit *= 1024;
        i += 1;
    }

    // 0.5 は切り上げ（1.125 → 1.13）
    let scale = 10_f64.powi(dm);
    let rounded = (bytes as f64 / unit as f64 * scale).round() / scale;
    format!("{} {}", rounded, SIZE_UNITS[i])
}

/// 日付を "January 5, 2025" 形式にする
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0, 2), "0 Bytes");
        assert_eq!(format_bytes(512, 2), "512 Bytes");
        assert_eq!(format_bytes(1024, 2), "1 KB");
        assert_eq!(format_bytes(1536, 2), "1.5 KB");
        assert_eq!(format_bytes(2_457_600, 2), "2.34 MB");
        assert_eq!(format_bytes(1_073_741_824, 2), "1 GB");
    }

    #[test]
    fn test_format_bytes_rounds_half_up() {
        assert_eq!(format_bytes(1152, 2), "1.13 KB");
        assert_eq!(format_bytes(2560, 0), "3 KB");
    }

    #[test]
    fn test_format_bytes_negative_decimals() {
        assert_eq!(format_bytes(1536, -1), "2 KB");
    }

    #[test]
    fn test_format_bytes_clamps_to_largest_unit() {
        assert_eq!(format_bytes(2 * 1024_u64.pow(4), 0), "2048 GB");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_date(date), "January 5, 2025");
    }
}
