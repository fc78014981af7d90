use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "partnership-ai")]
#[command(about = "パートナーシップ契約の税務条項解析デモ", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 契約書を解析（疑似処理）して抽出条項を表示
    Analyze {
        /// 契約書ファイル（PDF/DOC/DOCX）
        #[arg(required = true)]
        file: PathBuf,

        /// MIMEタイプ（省略時は拡張子から推定）
        #[arg(long)]
        mime: Option<String>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 税務ソフト向け設定XMLを出力
    Export {
        /// 出力ファイル（デフォルト: partnership_tax_config.xml）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 税務ソフト連携（疑似）
    Platform {
        /// 操作
        #[arg(value_enum)]
        action: PlatformCommand,

        /// 連携先 (gosystem/thomson/cch)
        #[arg(short, long, default_value = "gosystem")]
        platform: String,
    },

    /// 設定を表示
    Settings {
        /// リセット後の値を表示
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PlatformCommand {
    Configure,
    Validate,
    Sync,
}
