use crate::error::{AppError, Result};
use partnership_ai_common::sample::DEFAULT_STAGE_NAMES;
use partnership_ai_common::platform::EXPORT_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 待ち時間倍率を上書きする環境変数
pub const TIME_SCALE_ENV: &str = "PARTNERSHIP_AI_TIME_SCALE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 処理ステージ名（表示順）
    pub stage_names: Vec<String>,
    /// 疑似処理の待ち時間に掛ける倍率（0で待たない）
    pub time_scale: f64,
    /// export の既定出力ファイル名
    pub export_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stage_names: DEFAULT_STAGE_NAMES.iter().map(|s| s.to_string()).collect(),
            time_scale: 1.0,
            export_file_name: EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl Config {
    /// ~/.config/partnership-ai/config.json を読み込む（なければ既定値）
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        let mut config = if config_path.exists() {
            Self::load_from(&config_path)?
        } else {
            Self::default()
        };

        // 環境変数を優先
        if let Ok(value) = std::env::var(TIME_SCALE_ENV) {
            config.time_scale = value
                .parse()
                .map_err(|_| AppError::Config(format!("{} が数値ではありません: {}", TIME_SCALE_ENV, value)))?;
        }

        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AppError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("partnership-ai").join("config.json"))
    }

    /// 倍率を掛けた待ち時間
    pub fn scaled(&self, delay_ms: u32) -> Duration {
        let scale = if self.time_scale.is_finite() { self.time_scale.max(0.0) } else { 1.0 };
        Duration::from_millis((f64::from(delay_ms) * scale).round() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.stage_names.len(), 4);
        assert_eq!(config.time_scale, 1.0);
        assert_eq!(config.export_file_name, "partnership_tax_config.xml");
    }

    #[test]
    fn test_scaled_delay() {
        let mut config = Config::default();
        assert_eq!(config.scaled(2000), Duration::from_millis(2000));
        config.time_scale = 0.5;
        assert_eq!(config.scaled(2500), Duration::from_millis(1250));
        config.time_scale = -3.0;
        assert_eq!(config.scaled(2500), Duration::ZERO);
        config.time_scale = f64::NAN;
        assert_eq!(config.scaled(1500), Duration::from_millis(1500));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"time_scale": 0.1}"#).unwrap();
        assert_eq!(config.time_scale, 0.1);
        assert_eq!(config.stage_names.len(), 4);
    }
}
