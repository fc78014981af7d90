//! 端末での疑似処理実行
//!
//! ブラウザ版と同じ `AppController` を tokio の sleep で駆動する。

use crate::config::Config;
use crate::error::{AppError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use partnership_ai_common::{
    AppController, ExtractedComponent, Jitter, NotificationKind, PlatformAction,
    RunStep, StageState, UploadFile, UploadOutcome,
};
use rand::Rng;
use std::path::{Path, PathBuf};

/// rand による乱数源
pub struct RandJitter<R: Rng>(pub R);

impl<R: Rng> Jitter for RandJitter<R> {
    fn unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// 表示中の通知を1行で出力
pub fn print_notification(controller: &AppController) {
    if let Some(n) = controller.notification() {
        let mark = match n.kind {
            NotificationKind::Success => "✔",
            NotificationKind::Error => "✖",
            NotificationKind::Warning => "!",
            NotificationKind::Info => "-",
        };
        println!("{} {}", mark, n.message);
    }
}

/// ファイルを受け付けて全ステージを実行し、抽出結果を返す
pub async fn run_analysis(
    controller: &mut AppController,
    file: UploadFile,
    config: &Config,
    jitter: &mut impl Jitter,
) -> Result<Vec<ExtractedComponent>> {
    let file_name = file.name.clone();

    let mut run = match controller.process_files(std::slice::from_ref(&file)) {
        UploadOutcome::Started { run } => run,
        UploadOutcome::Rejected { .. } => {
            print_notification(controller);
            return Err(partnership_ai_common::Error::UnsupportedFile(file_name).into());
        }
        UploadOutcome::Ignored => return Ok(Vec::new()),
    };
    println!("{}", controller.status_headline());

    let progress = ProgressBar::new(controller.stages().len() as u64);
    progress.set_style(
        ProgressStyle::with_template("[{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    loop {
        match controller.advance_pipeline(&mut run, jitter) {
            RunStep::Next { delay_ms } => {
                let stages = controller.stages();
                let completed = stages.iter().filter(|s| s.state == StageState::Completed).count();
                let active = stages
                    .iter()
                    .find(|s| s.state == StageState::Active)
                    .map(|s| s.name.clone())
                    .unwrap_or_default();
                progress.set_position(completed as u64);
                progress.set_message(active);
                tracing::debug!(delay_ms, "next stage scheduled");
                tokio::time::sleep(config.scaled(delay_ms)).await;
            }
            RunStep::Done { .. } => {
                progress.set_position(controller.stages().len() as u64);
                progress.finish_and_clear();
                break;
            }
        }
    }

    print_notification(controller);
    Ok(controller
        .state()
        .analysis_results
        .get(&file_name)
        .cloned()
        .unwrap_or_default())
}

/// 開始通知 → 待機 → 完了通知
pub async fn run_platform_action(
    controller: &mut AppController,
    action: PlatformAction,
    config: &Config,
) -> String {
    let pending = controller.begin_action(action);
    print_notification(controller);
    tokio::time::sleep(config.scaled(pending.delay_ms)).await;
    controller.complete_action(&pending.action);
    print_notification(controller);
    controller
        .notification()
        .map(|n| n.message.clone())
        .unwrap_or_default()
}

/// 設定XMLを書き出す
pub fn write_export(controller: &mut AppController, output: &Path) -> Result<PathBuf> {
    let export = controller.export_configuration();

    let path = if output.is_dir() {
        output.join(export.file_name)
    } else {
        output.to_path_buf()
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(AppError::FileNotFound(parent.display().to_string()));
        }
    }

    std::fs::write(&path, export.body)?;
    print_notification(controller);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use partnership_ai_common::FixedJitter;

    fn instant_config() -> Config {
        Config {
            time_scale: 0.0,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_run_analysis_returns_fixed_results() {
        let mut controller = AppController::new();
        let file = UploadFile::new("agreement.pdf", "application/pdf");

        let results = run_analysis(&mut controller, file, &instant_config(), &mut FixedJitter(0.3))
            .await
            .expect("解析失敗");

        let confidences: Vec<u8> = results.iter().map(|c| c.confidence.value()).collect();
        assert_eq!(confidences, vec![95, 88, 92, 86]);
        assert!(!controller.state().is_processing);
    }

    #[tokio::test]
    async fn test_run_analysis_rejects_images() {
        let mut controller = AppController::new();
        let file = UploadFile::new("scan.jpg", "image/jpeg");

        let err = run_analysis(&mut controller, file, &instant_config(), &mut FixedJitter(0.3))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Common(partnership_ai_common::Error::UnsupportedFile(_))
        ));
        assert!(controller.state().current_document.is_none());
    }

    #[tokio::test]
    async fn test_platform_action_ends_with_success() {
        let mut controller = AppController::new();
        let message =
            run_platform_action(&mut controller, PlatformAction::Sync, &instant_config()).await;
        assert_eq!(message, "Data synchronized successfully!");
    }

    #[test]
    fn test_rand_jitter_in_unit_range() {
        let mut jitter = RandJitter(rand::rng());
        for _ in 0..100 {
            let value = jitter.unit();
            assert!((0.0..1.0).contains(&value));
        }
    }
}
