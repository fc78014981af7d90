//! 画面切り替え

/// 画面セクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Upload,
    Analysis,
    Results,
    Platforms,
    Settings,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::Upload,
        Section::Analysis,
        Section::Results,
        Section::Platforms,
        Section::Settings,
    ];

    /// DOM上のid（タブの data-section と同じ値）
    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Upload => "upload",
            Section::Analysis => "analysis",
            Section::Results => "results",
            Section::Platforms => "platforms",
            Section::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Upload => "Upload",
            Section::Analysis => "Analysis",
            Section::Results => "Results",
            Section::Platforms => "Tax Platforms",
            Section::Settings => "Settings",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

/// 現在のセクション名から表示中のセクションを求める
///
/// 一致するものがなければ `None`（何も表示しない）。
pub fn visible_section(current: &str) -> Option<Section> {
    Section::from_id(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_roundtrip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }

    #[test]
    fn test_unknown_id_has_no_section() {
        assert_eq!(visible_section("reports"), None);
        assert_eq!(visible_section(""), None);
        assert_eq!(visible_section("Dashboard"), None);
    }
}
