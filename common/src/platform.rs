//! 税務ソフト連携（疑似）
//!
//! どの操作も「処理中」通知 → 一定時間後に「成功」通知を出すだけで、失敗しない。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 出力ファイル名
pub const EXPORT_FILE_NAME: &str = "partnership_tax_config.xml";
/// 出力ファイルのMIMEタイプ
pub const EXPORT_MIME_TYPE: &str = "application/xml";

/// 出力するXML（解析結果に関係なく常に同一）
pub const CONFIG_XML: &str = r#"<?xml version="1.0"?>
<TaxConfiguration>
    <Partnership>
        <DistributionWaterfall>
            <Tier1>Return of capital contributions - 100% to LPs</Tier1>
            <Tier2>8% preferred return - 100% to LPs</Tier2>
            <Tier3>Catchup - 100% to GP until 20% total return</Tier3>
            <Tier4>Carried interest - 20% GP, 80% LPs</Tier4>
        </DistributionWaterfall>
    </Partnership>
</TaxConfiguration>"#;

/// 連携先の税務ソフト
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    GoSystem,
    Thomson,
    Cch,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::GoSystem, Platform::Thomson, Platform::Cch];

    /// data-platform 属性の値
    pub fn id(&self) -> &'static str {
        match self {
            Platform::GoSystem => "gosystem",
            Platform::Thomson => "thomson",
            Platform::Cch => "cch",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::GoSystem => "GoSystem Tax",
            Platform::Thomson => "Thomson Reuters UlaTax",
            Platform::Cch => "CCH Axcess",
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| Error::UnknownPlatform(s.to_string()))
    }
}

/// 時間差で完了する疑似操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformAction {
    Configure(Platform),
    ValidateMapping,
    Sync,
    ConnectApi(String),
}

impl PlatformAction {
    /// 開始時の通知（info）
    pub fn pending_message(&self) -> String {
        match self {
            PlatformAction::Configure(p) => format!("Configuring {} integration...", p.display_name()),
            PlatformAction::ValidateMapping => "Validating tax form mappings...".to_string(),
            PlatformAction::Sync => "Syncing data to GoSystem Tax...".to_string(),
            PlatformAction::ConnectApi(name) => format!("Connecting to {}...", name),
        }
    }

    /// 完了時の通知（success）
    pub fn success_message(&self) -> String {
        match self {
            PlatformAction::Configure(p) => format!("{} configured successfully!", p.display_name()),
            PlatformAction::ValidateMapping => "All mappings validated successfully!".to_string(),
            PlatformAction::Sync => "Data synchronized successfully!".to_string(),
            PlatformAction::ConnectApi(name) => format!("Connected to {} successfully!", name),
        }
    }

    /// 完了までの時間（ミリ秒）
    pub fn delay_ms(&self) -> u32 {
        match self {
            PlatformAction::Configure(_) => 2000,
            PlatformAction::ValidateMapping => 1500,
            PlatformAction::Sync => 3000,
            PlatformAction::ConnectApi(_) => 2000,
        }
    }
}

/// 外部API接続状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConnection {
    pub name: String,
    pub status: ConnectionStatus,
}

impl ApiConnection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ConnectionStatus::Disconnected,
        }
    }

    pub fn status_label(&self) -> &'static str {
        match self.status {
            ConnectionStatus::Disconnected => "Not Connected",
            ConnectionStatus::Connected => "Connected",
        }
    }

    /// ボタン表示（未接続なら Connect、接続済みなら Configure）
    pub fn button_label(&self) -> &'static str {
        match self.status {
            ConnectionStatus::Disconnected => "Connect",
            ConnectionStatus::Connected => "Configure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_id() {
        assert_eq!("gosystem".parse::<Platform>().unwrap(), Platform::GoSystem);
        assert_eq!("thomson".parse::<Platform>().unwrap().display_name(), "Thomson Reuters UlaTax");
        assert!(matches!("quickbooks".parse::<Platform>(), Err(Error::UnknownPlatform(_))));
    }

    #[test]
    fn test_action_messages_and_delays() {
        let configure = PlatformAction::Configure(Platform::Cch);
        assert_eq!(configure.pending_message(), "Configuring CCH Axcess integration...");
        assert_eq!(configure.success_message(), "CCH Axcess configured successfully!");
        assert_eq!(configure.delay_ms(), 2000);

        assert_eq!(PlatformAction::ValidateMapping.delay_ms(), 1500);
        assert_eq!(PlatformAction::Sync.delay_ms(), 3000);
        assert_eq!(
            PlatformAction::ConnectApi("Legal NLP Engine".into()).success_message(),
            "Connected to Legal NLP Engine successfully!"
        );
    }

    #[test]
    fn test_config_xml_shape() {
        assert!(CONFIG_XML.starts_with("<?xml version=\"1.0\"?>\n<TaxConfiguration>"));
        assert!(CONFIG_XML.contains("<Tier4>Carried interest - 20% GP, 80% LPs</Tier4>"));
        assert!(CONFIG_XML.ends_with("</TaxConfiguration>"));
    }

    #[test]
    fn test_api_connection_labels() {
        let mut api = ApiConnection::new("Document OCR Service");
        assert_eq!(api.button_label(), "Connect");
        api.status = ConnectionStatus::Connected;
        assert_eq!(api.button_label(), "Configure");
        assert_eq!(api.status_label(), "Connected");
    }
}
