//! デモ用サンプルデータ
//!
//! 解析結果・ステージ名・ダッシュボード表示はすべて固定値。

use crate::types::{Confidence, ExtractedComponent};
use chrono::NaiveDate;

/// 既定の処理ステージ名
pub const DEFAULT_STAGE_NAMES: [&str; 4] = [
    "Document Upload",
    "Text Extraction",
    "Clause Identification",
    "Tax Mapping",
];

/// 構造分析バー（ラベル, 割合%）
pub const STRUCTURE_BREAKDOWN: [(&str, u8); 3] = [
    ("Limited Partnership", 65),
    ("LLC", 28),
    ("Other", 7),
];

/// 構造分析バーを順に表示する間隔（ミリ秒）
pub const STRUCTURE_STAGGER_MS: u32 = 500;

/// 設定画面の外部API一覧
pub const API_CONNECTION_NAMES: [&str; 3] = [
    "Document OCR Service",
    "Legal NLP Engine",
    "Tax Form Repository",
];

const WATERFALL_HTML: &str = "<ul>
<li>Return of capital contributions - 100% to LPs</li>
<li>8% preferred return - 100% to LPs</li>
<li>Catchup - 100% to GP until 20% total return</li>
<li>Carried interest - 20% GP, 80% LPs</li>
</ul>";

const PREFERRED_RETURN_HTML: &str = "<p><strong>Rate:</strong> 8% annually</p>
<p><strong>Method:</strong> Cumulative compound</p>
<p><strong>Calculation:</strong> Based on capital contributions</p>";

const CAPITAL_CALL_HTML: &str = "<p><strong>Notice Period:</strong> 45 days</p>
<p><strong>Default Interest:</strong> 12% per annum</p>
<p><strong>Remedies:</strong> Dilution, suspension of rights</p>";

const SPECIAL_ALLOCATIONS_HTML: &str = "<ul>
<li>Depreciation allocated 90% to LPs</li>
<li>Section 704(c) gain allocated to contributing partner</li>
<li>Minimum gain chargeback provisions included</li>
</ul>";

/// 解析結果（固定4件、この順序で表示）
pub fn extracted_components() -> Vec<ExtractedComponent> {
    [
        ("Distribution Waterfall", 95, WATERFALL_HTML),
        ("Preferred Return", 88, PREFERRED_RETURN_HTML),
        ("Capital Call Provisions", 92, CAPITAL_CALL_HTML),
        ("Special Allocations", 86, SPECIAL_ALLOCATIONS_HTML),
    ]
    .into_iter()
    .map(|(title, confidence, content)| ExtractedComponent {
        title: title.to_string(),
        confidence: Confidence::saturating(confidence),
        content: content.to_string(),
    })
    .collect()
}

/// ダッシュボードの最近の解析履歴
#[derive(Debug, Clone, PartialEq)]
pub struct RecentAnalysis {
    pub file_name: &'static str,
    pub size_bytes: u64,
    pub analyzed_on: NaiveDate,
    pub components_found: u8,
}

pub fn recent_analyses() -> Vec<RecentAnalysis> {
    let entries = [
        ("Blackstone_Fund_VII_LPA.pdf", 2_457_600, (2024, 11, 18), 12),
        ("Carlyle_Partners_Amendment_3.docx", 318_464, (2024, 11, 14), 7),
        ("KKR_Infrastructure_LPA.pdf", 5_872_025, (2024, 11, 9), 15),
    ];

    entries
        .into_iter()
        .filter_map(|(file_name, size_bytes, (y, m, d), components_found)| {
            Some(RecentAnalysis {
                file_name,
                size_bytes,
                analyzed_on: NaiveDate::from_ymd_opt(y, m, d)?,
                components_found,
            })
        })
        .collect()
}
