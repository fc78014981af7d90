//! アプリケーション設定
//!
//! 各項目は名前付きの選択肢を持つ。リセット時は選択項目を先頭の選択肢に、
//! スライダーを85に戻す。

use crate::types::Confidence;
use serde::{Deserialize, Serialize};

/// リセット時のスライダー値
pub const RANGE_RESET_VALUE: u8 = 85;

/// 選択肢を持つ設定項目
pub trait SelectOption: Sized + Copy + PartialEq + 'static {
    /// 選択肢（表示順）
    const OPTIONS: &'static [Self];

    fn label(&self) -> &'static str;

    fn first() -> Self {
        Self::OPTIONS[0]
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::OPTIONS.iter().copied().find(|o| o.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NlpModel {
    #[serde(rename = "LegalBERT v2.1")]
    LegalBert,
    #[serde(rename = "FinBERT Tax v1.4")]
    FinBertTax,
    #[serde(rename = "GPT-4 Legal")]
    Gpt4Legal,
}

impl SelectOption for NlpModel {
    const OPTIONS: &'static [Self] = &[NlpModel::LegalBert, NlpModel::FinBertTax, NlpModel::Gpt4Legal];

    fn label(&self) -> &'static str {
        match self {
            NlpModel::LegalBert => "LegalBERT v2.1",
            NlpModel::FinBertTax => "FinBERT Tax v1.4",
            NlpModel::Gpt4Legal => "GPT-4 Legal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxSoftware {
    #[serde(rename = "GoSystem Tax")]
    GoSystem,
    #[serde(rename = "Thomson Reuters UlaTax")]
    ThomsonReuters,
    #[serde(rename = "CCH Axcess")]
    CchAxcess,
}

impl SelectOption for TaxSoftware {
    const OPTIONS: &'static [Self] = &[
        TaxSoftware::GoSystem,
        TaxSoftware::ThomsonReuters,
        TaxSoftware::CchAxcess,
    ];

    fn label(&self) -> &'static str {
        match self {
            TaxSoftware::GoSystem => "GoSystem Tax",
            TaxSoftware::ThomsonReuters => "Thomson Reuters UlaTax",
            TaxSoftware::CchAxcess => "CCH Axcess",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessingPriority {
    Accuracy,
    Balanced,
    Speed,
}

impl SelectOption for ProcessingPriority {
    const OPTIONS: &'static [Self] = &[
        ProcessingPriority::Accuracy,
        ProcessingPriority::Balanced,
        ProcessingPriority::Speed,
    ];

    fn label(&self) -> &'static str {
        match self {
            ProcessingPriority::Accuracy => "Accuracy",
            ProcessingPriority::Balanced => "Balanced",
            ProcessingPriority::Speed => "Speed",
        }
    }
}

/// 設定値
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub nlp_model: NlpModel,
    pub confidence_threshold: Confidence,
    pub default_tax_software: TaxSoftware,
    pub processing_priority: ProcessingPriority,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            nlp_model: NlpModel::LegalBert,
            confidence_threshold: Confidence::saturating(85),
            default_tax_software: TaxSoftware::GoSystem,
            processing_priority: ProcessingPriority::Accuracy,
        }
    }
}

impl Settings {
    /// リセット後の値（選択項目は先頭、スライダーは85）
    pub fn reset_values() -> Self {
        Self {
            nlp_model: NlpModel::first(),
            confidence_threshold: Confidence::saturating(i64::from(RANGE_RESET_VALUE)),
            default_tax_software: TaxSoftware::first(),
            processing_priority: ProcessingPriority::first(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.nlp_model.label(), "LegalBERT v2.1");
        assert_eq!(settings.confidence_threshold.value(), 85);
        assert_eq!(settings.default_tax_software.label(), "GoSystem Tax");
        assert_eq!(settings.processing_priority.label(), "Accuracy");
    }

    #[test]
    fn test_reset_values_pick_first_options() {
        let reset = Settings::reset_values();
        assert_eq!(reset.nlp_model, NlpModel::OPTIONS[0]);
        assert_eq!(reset.default_tax_software, TaxSoftware::OPTIONS[0]);
        assert_eq!(reset.processing_priority, ProcessingPriority::OPTIONS[0]);
        assert_eq!(reset.confidence_threshold.value(), RANGE_RESET_VALUE);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(TaxSoftware::from_label("CCH Axcess"), Some(TaxSoftware::CchAxcess));
        assert_eq!(ProcessingPriority::from_label("Speed"), Some(ProcessingPriority::Speed));
        assert_eq!(NlpModel::from_label("unknown"), None);
    }

    #[test]
    fn test_settings_serialize_uses_labels() {
        let json = serde_json::to_string(&Settings::default()).expect("シリアライズ失敗");
        assert!(json.contains("\"nlpModel\":\"LegalBERT v2.1\""));
        assert!(json.contains("\"confidenceThreshold\":85"));
        assert!(json.contains("\"defaultTaxSoftware\":\"GoSystem Tax\""));
    }
}
