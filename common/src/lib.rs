//! Partnership AI Common Library
//!
//! CLIとWeb(WASM)で共有される画面状態・サンプルデータ・ユーティリティ

pub mod controller;
pub mod editor;
pub mod error;
pub mod format;
pub mod intake;
pub mod navigation;
pub mod notification;
pub mod pipeline;
pub mod platform;
pub mod sample;
pub mod settings;
pub mod state;
pub mod types;

pub use controller::{AppController, ApiPress, ConfigExport, PendingAction, RunStep, UploadOutcome};
pub use editor::{EditDraft, Editable};
pub use error::{Error, Result};
pub use intake::UploadFile;
pub use navigation::Section;
pub use notification::{DismissTimer, Notification, NotificationId, NotificationKind, AUTO_DISMISS_MS};
pub use pipeline::{FixedJitter, Jitter, PipelineRun};
pub use platform::{ApiConnection, Platform, PlatformAction};
pub use settings::{SelectOption, Settings};
pub use state::AppState;
pub use types::{ComponentCard, Confidence, ExtractedComponent, ProcessingStage, StageState};
