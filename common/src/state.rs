//! アプリケーション状態

use crate::navigation::Section;
use crate::settings::Settings;
use crate::types::ExtractedComponent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// アプリケーションの状態
///
/// `AppController` が所有し、外部からは参照のみ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub current_section: String,
    pub is_processing: bool,
    pub current_document: Option<String>,
    /// ドキュメント名 → 抽出結果
    pub analysis_results: BTreeMap<String, Vec<ExtractedComponent>>,
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_section: Section::Dashboard.id().to_string(),
            is_processing: false,
            current_document: None,
            analysis_results: BTreeMap::new(),
            settings: Settings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.current_section, "dashboard");
        assert!(!state.is_processing);
        assert!(state.current_document.is_none());
        assert!(state.analysis_results.is_empty());
    }

    #[test]
    fn test_state_serialize_camel_case() {
        let json = serde_json::to_string(&AppState::default()).expect("シリアライズ失敗");
        assert!(json.contains("\"currentSection\":\"dashboard\""));
        assert!(json.contains("\"isProcessing\":false"));
        assert!(json.contains("\"currentDocument\":null"));
    }
}
