//! コントローラの時間差処理をブラウザのタイマーで駆動する

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use partnership_ai_common::{
    ApiPress, AppController, DismissTimer, Jitter, NotificationId, NotificationKind, PlatformAction, PipelineRun,
    RunStep, UploadFile, UploadOutcome,
};

/// 画面全体で共有するコントローラ
pub type Controller = RwSignal<AppController>;

/// Math.random による乱数源
pub struct BrowserJitter;

impl Jitter for BrowserJitter {
    fn unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// `ms` ミリ秒後に一度だけ実行（キャンセルしない）
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    Timeout::new(ms, f).forget();
}

/// 通知の自動消去を予約
pub fn track(controller: Controller, id: Option<NotificationId>) {
    if let Some(timer) = id.map(DismissTimer::new) {
        after(timer.delay_ms, move || {
            controller.update(|c| {
                c.dismiss_notification(timer.id);
            });
        });
    }
}

pub fn notify(controller: Controller, message: impl Into<String>, kind: NotificationKind) {
    let message = message.into();
    track(controller, controller.try_update(|c| c.notify(message, kind)));
}

/// アップロードを受け付け、解析を開始
pub fn process_files(controller: Controller, files: Vec<UploadFile>) {
    match controller.try_update(|c| c.process_files(&files)) {
        Some(UploadOutcome::Started { run }) => tick(controller, run),
        Some(UploadOutcome::Rejected { notification }) => track(controller, Some(notification)),
        Some(UploadOutcome::Ignored) | None => {}
    }
}

fn tick(controller: Controller, mut run: PipelineRun) {
    let step = controller.try_update(|c| c.advance_pipeline(&mut run, &mut BrowserJitter));
    match step {
        Some(RunStep::Next { delay_ms }) => after(delay_ms, move || tick(controller, run)),
        Some(RunStep::Done { notification }) => track(controller, Some(notification)),
        None => log::warn!("Controller disposed during run {}", run.id()),
    }
}

/// 税務ソフト連携の疑似操作
pub fn run_action(controller: Controller, action: PlatformAction) {
    let Some(pending) = controller.try_update(|c| c.begin_action(action)) else {
        return;
    };
    track(controller, Some(pending.notification));

    after(pending.delay_ms, move || {
        track(controller, controller.try_update(|c| c.complete_action(&pending.action)));
    });
}

pub fn press_api_button(controller: Controller, index: usize) {
    match controller.try_update(|c| c.press_api_button(index)) {
        Some(ApiPress::Connecting(pending)) => {
            track(controller, Some(pending.notification));
            after(pending.delay_ms, move || {
                track(controller, controller.try_update(|c| c.complete_action(&pending.action)));
            });
        }
        Some(ApiPress::Configuring(id)) => track(controller, Some(id)),
        Some(ApiPress::Missing) | None => log::warn!("No API connection at index {}", index),
    }
}
