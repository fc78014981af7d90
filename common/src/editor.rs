//! 条項の編集ダイアログ
//!
//! カードの内容を編集用の下書きに取り込む。保存してもカードには反映しない。

use crate::types::{ComponentCard, Confidence};
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static::lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref NUMBER_RE: Regex = Regex::new(r"\d+").unwrap();
}

/// HTMLタグを除去して前後の空白を落とす
pub fn strip_tags(markup: &str) -> String {
    TAG_RE.replace_all(markup, "").trim().to_string()
}

/// "Confidence: 95%" のようなラベルから最初の整数を取り出す
pub fn parse_confidence(label: &str) -> Option<Confidence> {
    let digits = NUMBER_RE.find(label)?;
    let value: i64 = digits.as_str().parse().unwrap_or(i64::MAX);
    Some(Confidence::saturating(value))
}

/// 編集中の下書き
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditDraft {
    pub card_index: usize,
    pub title: String,
    /// タグ除去済みの本文
    pub content: String,
    pub confidence: Confidence,
}

impl EditDraft {
    pub fn modal_title(&self) -> String {
        format!("Edit {}", self.title)
    }
}

/// 編集ダイアログを開ける要素
pub trait Editable {
    fn edit_draft(&self, card_index: usize) -> EditDraft;
}

impl Editable for ComponentCard {
    fn edit_draft(&self, card_index: usize) -> EditDraft {
        EditDraft {
            card_index,
            title: self.title.clone(),
            content: strip_tags(&self.content_html),
            // 数値のないラベル（解析前）は0%
            confidence: parse_confidence(&self.confidence_label)
                .unwrap_or_else(|| Confidence::saturating(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        let markup = "<p><strong>Rate:</strong> 8% annually</p>\n<p>Method</p>";
        assert_eq!(strip_tags(markup), "Rate: 8% annually\nMethod");
        assert_eq!(strip_tags("  <br/>  "), "");
    }

    #[test]
    fn test_parse_confidence() {
        assert_eq!(parse_confidence("Confidence: 95%").unwrap().value(), 95);
        assert_eq!(parse_confidence("Confidence: 7% (v2)").unwrap().value(), 7);
        assert!(parse_confidence("Confidence: --").is_none());
        assert_eq!(parse_confidence("Confidence: 400%").unwrap().value(), 100);
    }

    #[test]
    fn test_card_edit_draft() {
        let card = ComponentCard {
            title: "Capital Call Provisions".to_string(),
            confidence_label: "Confidence: 92%".to_string(),
            content_html: "<p><strong>Notice Period:</strong> 45 days</p>".to_string(),
        };

        let draft = card.edit_draft(2);
        assert_eq!(draft.card_index, 2);
        assert_eq!(draft.modal_title(), "Edit Capital Call Provisions");
        assert_eq!(draft.content, "Notice Period: 45 days");
        assert_eq!(draft.confidence.value(), 92);
    }

    #[test]
    fn test_placeholder_card_draft_defaults_to_zero() {
        let draft = ComponentCard::placeholder("Special Allocations").edit_draft(3);
        assert_eq!(draft.confidence.value(), 0);
        assert_eq!(draft.content, "Awaiting analysis");
    }
}
