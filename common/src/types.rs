//! 解析結果・画面要素の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Confidence: 0〜100に制限された信頼度
//! - ExtractedComponent: 抽出された契約条項（サンプルデータ）
//! - ComponentCard: 画面上の条項カード
//! - ProcessingStage: 処理ステージの表示状態

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 信頼度（0〜100）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Confidence(u8);

impl Confidence {
    pub const MAX: u32 = 100;

    pub fn new(value: u32) -> Result<Self> {
        if value > Self::MAX {
            return Err(Error::ConfidenceOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    /// 範囲外の値を0〜100に丸めて生成
    pub fn saturating(value: i64) -> Self {
        Self(value.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for Confidence {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Confidence> for u32 {
    fn from(confidence: Confidence) -> Self {
        u32::from(confidence.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// 抽出された契約条項
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedComponent {
    pub title: String,
    pub confidence: Confidence,
    /// 表示用マークアップ
    pub content: String,
}

/// 画面上の条項カード
///
/// 解析完了時に先頭から順に結果が流し込まれる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentCard {
    pub title: String,
    /// "Confidence: 95%" 形式のラベル
    pub confidence_label: String,
    pub content_html: String,
}

impl ComponentCard {
    pub fn placeholder(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            confidence_label: "Confidence: --".to_string(),
            content_html: "<p>Awaiting analysis</p>".to_string(),
        }
    }

    /// 解析結果で信頼度と本文を上書き（タイトルはカード側を維持）
    pub fn apply(&mut self, component: &ExtractedComponent) {
        self.confidence_label = format!("Confidence: {}", component.confidence);
        self.content_html = component.content.clone();
    }
}

/// ステージの状態（Pending → Active → Completed の一方向）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageState {
    #[default]
    Pending,
    Active,
    Completed,
}

impl StageState {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageState::Pending => "pending",
            StageState::Active => "active",
            StageState::Completed => "completed",
        }
    }
}

/// 処理ステージ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingStage {
    pub name: String,
    pub state: StageState,
}

impl ProcessingStage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: StageState::Pending,
        }
    }
}
