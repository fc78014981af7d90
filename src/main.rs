use clap::Parser;
use partnership_ai::{cli, config, error, runner};
use cli::{Cli, Commands, PlatformCommand};
use config::Config;
use error::{AppError, Result};
use partnership_ai_common::format::format_bytes;
use partnership_ai_common::intake::guess_mime_type;
use partnership_ai_common::{AppController, Platform, PlatformAction, SelectOption, UploadFile};
use runner::RandJitter;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;
    let mut controller =
        AppController::with_layout(config.stage_names.clone(), AppController::default_cards());

    match cli.command {
        Commands::Analyze { file, mime, json } => {
            println!("📄 partnership-ai - 契約書解析\n");

            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .ok_or_else(|| AppError::FileNotFound(file.display().to_string()))?;
            let size = std::fs::metadata(&file)
                .map_err(|_| AppError::FileNotFound(file.display().to_string()))?
                .len();
            let mime = mime.unwrap_or_else(|| guess_mime_type(&name).to_string());
            println!("- {} ({})", name, format_bytes(size, 2));

            let upload = UploadFile::new(name, mime).with_size(size);
            let mut jitter = RandJitter(rand::rng());
            let results = runner::run_analysis(&mut controller, upload, &config, &mut jitter).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for component in &results {
                    println!("\n■ {}  (Confidence: {})", component.title, component.confidence);
                    println!("{}", partnership_ai_common::editor::strip_tags(&component.content));
                }
            }

            println!("\n✅ 解析完了");
        }

        Commands::Export { output } => {
            let output = output.unwrap_or_else(|| config.export_file_name.clone().into());
            let path = runner::write_export(&mut controller, &output)?;
            println!("✔ 出力先: {}", path.display());
        }

        Commands::Platform { action, platform } => {
            let action = match action {
                PlatformCommand::Configure => PlatformAction::Configure(platform.parse::<Platform>()?),
                PlatformCommand::Validate => PlatformAction::ValidateMapping,
                PlatformCommand::Sync => PlatformAction::Sync,
            };
            runner::run_platform_action(&mut controller, action, &config).await;
        }

        Commands::Settings { reset } => {
            if reset {
                controller.reset_settings();
                runner::print_notification(&controller);
            }
            let settings = controller.settings_draft();

            println!("設定:");
            println!("  NLPモデル: {}", settings.nlp_model.label());
            println!("  信頼度しきい値: {}", settings.confidence_threshold);
            println!("  既定の税務ソフト: {}", settings.default_tax_software.label());
            println!("  処理優先度: {}", settings.processing_priority.label());
            println!("  ステージ: {}", config.stage_names.join(" → "));
        }
    }

    Ok(())
}
