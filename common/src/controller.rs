//! 画面全体の状態を保持するコントローラ
//!
//! DOMやタイマーには触れない。時間差で行う処理は戻り値で待ち時間を返し、
//! 呼び出し側（WASM / CLI）がタイマーを設定して続きのメソッドを呼ぶ。

use crate::editor::{EditDraft, Editable};
use crate::intake::{select_upload, UploadFile};
use crate::navigation::{visible_section, Section};
use crate::notification::{Notification, NotificationCenter, NotificationId, NotificationKind};
use crate::pipeline::{self, Jitter, PipelineRun, PipelineStep};
use crate::platform::{
    ApiConnection, ConnectionStatus, PlatformAction, CONFIG_XML, EXPORT_FILE_NAME, EXPORT_MIME_TYPE,
};
use crate::sample;
use crate::settings::Settings;
use crate::state::AppState;
use crate::types::{ComponentCard, Confidence, ProcessingStage};

/// アップロード処理の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// ファイルなし
    Ignored,
    /// 形式エラー（エラー通知を表示済み）
    Rejected { notification: NotificationId },
    /// 解析開始。`advance_pipeline` を即時に呼ぶ
    Started { run: PipelineRun },
}

/// パイプラインを1ティック進めた結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStep {
    Next { delay_ms: u32 },
    Done { notification: NotificationId },
}

/// 開始済みの疑似操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub action: PlatformAction,
    pub notification: NotificationId,
    pub delay_ms: u32,
}

/// 外部APIボタン押下の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiPress {
    Connecting(PendingAction),
    Configuring(NotificationId),
    Missing,
}

/// 設定出力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigExport {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub body: &'static str,
    pub notification: NotificationId,
}

#[derive(Debug, Clone)]
pub struct AppController {
    state: AppState,
    notifications: NotificationCenter,
    stages: Vec<ProcessingStage>,
    status_headline: String,
    cards: Vec<ComponentCard>,
    editor: Option<EditDraft>,
    settings_draft: Settings,
    connections: Vec<ApiConnection>,
    next_run_id: u64,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl AppController {
    /// 既定のステージ・カード構成で生成
    pub fn new() -> Self {
        Self::with_layout(sample::DEFAULT_STAGE_NAMES.iter().copied(), Self::default_cards())
    }

    /// 解析前のカード（サンプル結果と同じ件数・タイトル）
    pub fn default_cards() -> Vec<ComponentCard> {
        sample::extracted_components()
            .iter()
            .map(|c| ComponentCard::placeholder(c.title.clone()))
            .collect()
    }

    /// ステージ名とカードを指定して生成
    pub fn with_layout<I, S>(stage_names: I, cards: Vec<ComponentCard>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let state = AppState::default();
        let settings_draft = state.settings.clone();
        Self {
            state,
            notifications: NotificationCenter::new(),
            stages: stage_names.into_iter().map(ProcessingStage::new).collect(),
            status_headline: "Waiting for document".to_string(),
            cards,
            editor: None,
            settings_draft,
            connections: sample::API_CONNECTION_NAMES
                .iter()
                .map(|name| ApiConnection::new(*name))
                .collect(),
            next_run_id: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    // ============================================
    // 画面切り替え
    // ============================================

    /// セクションを切り替える（不明な名前なら何も表示しない）
    pub fn switch_to_section(&mut self, name: &str) {
        log::debug!("Switching to section: {}", name);
        self.state.current_section = name.to_string();
    }

    pub fn visible_section(&self) -> Option<Section> {
        visible_section(&self.state.current_section)
    }

    pub fn is_section_active(&self, section: Section) -> bool {
        self.visible_section() == Some(section)
    }

    // ============================================
    // 通知
    // ============================================

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        self.notifications.notify(message, kind)
    }

    pub fn dismiss_notification(&mut self, id: NotificationId) -> bool {
        self.notifications.dismiss(id)
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    // ============================================
    // アップロード・解析
    // ============================================

    /// 先頭ファイルを検証して解析を開始
    ///
    /// 解析中でも新しいアップロードは受け付ける（`is_processing` は表示用）。
    pub fn process_files(&mut self, files: &[UploadFile]) -> UploadOutcome {
        let file = match select_upload(files) {
            Ok(Some(file)) => file,
            Ok(None) => return UploadOutcome::Ignored,
            Err(e) => {
                log::warn!("Rejected upload: {:?}", e);
                let notification = self.notify(e.to_string(), NotificationKind::Error);
                return UploadOutcome::Rejected { notification };
            }
        };

        let name = file.name.clone();
        log::info!("Processing file: {} ({})", name, file.mime_type);
        if self.state.is_processing {
            log::warn!("Starting a new run while another is in progress");
        }

        self.state.is_processing = true;
        self.state.current_document = Some(name.clone());
        self.switch_to_section(Section::Analysis.id());
        self.status_headline = format!("Processing: {}", name);
        pipeline::reset_stages(&mut self.stages);

        self.next_run_id += 1;
        UploadOutcome::Started {
            run: PipelineRun::new(self.next_run_id),
        }
    }

    /// パイプラインを1ティック進める。最終ティックで結果を反映する
    pub fn advance_pipeline(&mut self, run: &mut PipelineRun, jitter: &mut impl Jitter) -> RunStep {
        match pipeline::advance(&mut self.stages, run, jitter) {
            PipelineStep::Advance { active, next_delay_ms } => {
                log::debug!("Run {}: stage {} active", run.id(), active);
                RunStep::Next { delay_ms: next_delay_ms }
            }
            PipelineStep::Finished => RunStep::Done {
                notification: self.complete_processing(),
            },
        }
    }

    fn complete_processing(&mut self) -> NotificationId {
        log::info!("Processing completed");
        let components = sample::extracted_components();

        // カードN には結果N を流し込む。余ったカードはそのまま
        for (card, component) in self.cards.iter_mut().zip(components.iter()) {
            card.apply(component);
        }

        if let Some(document) = self.state.current_document.clone() {
            self.state.analysis_results.insert(document, components);
        }

        let notification = self.notify(
            "Document analysis completed successfully!",
            NotificationKind::Success,
        );
        self.state.is_processing = false;
        notification
    }

    pub fn stages(&self) -> &[ProcessingStage] {
        &self.stages
    }

    pub fn progress(&self) -> f32 {
        pipeline::progress(&self.stages)
    }

    pub fn status_headline(&self) -> &str {
        &self.status_headline
    }

    pub fn cards(&self) -> &[ComponentCard] {
        &self.cards
    }

    // ============================================
    // 編集ダイアログ
    // ============================================

    pub fn open_editor(&mut self, card_index: usize) -> Option<&EditDraft> {
        let draft = self.cards.get(card_index)?.edit_draft(card_index);
        self.editor = Some(draft);
        self.editor.as_ref()
    }

    pub fn editor(&self) -> Option<&EditDraft> {
        self.editor.as_ref()
    }

    pub fn set_editor_content(&mut self, content: String) {
        if let Some(draft) = self.editor.as_mut() {
            draft.content = content;
        }
    }

    pub fn set_editor_confidence(&mut self, confidence: Confidence) {
        if let Some(draft) = self.editor.as_mut() {
            draft.confidence = confidence;
        }
    }

    /// 保存（通知を出して閉じるのみ。カードは更新しない）
    pub fn save_editor(&mut self) -> Option<NotificationId> {
        let draft = self.editor.take()?;
        log::debug!("Discarding edits for card {}", draft.card_index);
        Some(self.notify("Component changes saved successfully!", NotificationKind::Success))
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    // ============================================
    // 設定
    // ============================================

    pub fn settings_draft(&self) -> &Settings {
        &self.settings_draft
    }

    pub fn settings_draft_mut(&mut self) -> &mut Settings {
        &mut self.settings_draft
    }

    /// 下書きを丸ごと確定
    pub fn save_settings(&mut self) -> NotificationId {
        self.state.settings = self.settings_draft.clone();
        self.notify("Settings saved successfully!", NotificationKind::Success)
    }

    /// 下書きを初期値に戻す（保存はしない）
    pub fn reset_settings(&mut self) -> NotificationId {
        self.settings_draft = Settings::reset_values();
        self.notify("Settings reset to defaults", NotificationKind::Info)
    }

    // ============================================
    // 税務ソフト連携
    // ============================================

    pub fn begin_action(&mut self, action: PlatformAction) -> PendingAction {
        let notification = self.notify(action.pending_message(), NotificationKind::Info);
        let delay_ms = action.delay_ms();
        PendingAction {
            action,
            notification,
            delay_ms,
        }
    }

    pub fn complete_action(&mut self, action: &PlatformAction) -> NotificationId {
        if let PlatformAction::ConnectApi(name) = action {
            if let Some(api) = self.connections.iter_mut().find(|a| &a.name == name) {
                api.status = ConnectionStatus::Connected;
            }
        }
        self.notify(action.success_message(), NotificationKind::Success)
    }

    pub fn connections(&self) -> &[ApiConnection] {
        &self.connections
    }

    pub fn press_api_button(&mut self, index: usize) -> ApiPress {
        let Some(api) = self.connections.get(index) else {
            return ApiPress::Missing;
        };
        let name = api.name.clone();
        let status = api.status;

        match status {
            ConnectionStatus::Disconnected => {
                ApiPress::Connecting(self.begin_action(PlatformAction::ConnectApi(name)))
            }
            ConnectionStatus::Connected => ApiPress::Configuring(self.notify(
                format!("Opening {} configuration...", name),
                NotificationKind::Info,
            )),
        }
    }

    /// 設定XMLの出力（内容は常に同一）
    pub fn export_configuration(&mut self) -> ConfigExport {
        let notification = self.notify("Configuration exported to XML file", NotificationKind::Success);
        ConfigExport {
            file_name: EXPORT_FILE_NAME,
            mime_type: EXPORT_MIME_TYPE,
            body: CONFIG_XML,
            notification,
        }
    }
}
