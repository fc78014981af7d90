//! 通知トースト
//!
//! 同時に表示できる通知は1件のみ。新しい通知は既存の通知を置き換える。

use serde::{Deserialize, Serialize};

/// 自動で閉じるまでの時間（ミリ秒）
pub const AUTO_DISMISS_MS: u32 = 5000;

/// 通知の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    /// 文字列から変換（不明な値は Info）
    pub fn parse(kind: &str) -> Self {
        match kind {
            "success" => NotificationKind::Success,
            "error" => NotificationKind::Error,
            "warning" => NotificationKind::Warning,
            _ => NotificationKind::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }

    /// 背景色
    pub fn color(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#22c55e",
            NotificationKind::Error => "#ef4444",
            NotificationKind::Warning => "#f59e0b",
            NotificationKind::Info => "#3b82f6",
        }
    }
}

/// 通知ID（自動消去タイマーの照合用）
pub type NotificationId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
}

/// 通知の自動消去予約
///
/// 呼び出し側は `delay_ms` 後に `id` を指定して閉じる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTimer {
    pub id: NotificationId,
    pub delay_ms: u32,
}

impl DismissTimer {
    pub fn new(id: NotificationId) -> Self {
        Self {
            id,
            delay_ms: AUTO_DISMISS_MS,
        }
    }
}

/// 表示中の通知を管理
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
    next_id: NotificationId,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 通知を表示（既存の通知は破棄）
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let message = message.into();
        log::info!("Notification: {} ({})", message, kind.as_str());

        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notification { id, message, kind });
        id
    }

    /// 指定IDの通知が表示中なら閉じる
    ///
    /// 置き換え済みの通知のタイマーが後から発火しても、新しい通知は残る。
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match &self.current {
            Some(n) if n.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unknown_kind_falls_back_to_info() {
        assert_eq!(NotificationKind::parse("error"), NotificationKind::Error);
        assert_eq!(NotificationKind::parse("critical"), NotificationKind::Info);
        assert_eq!(NotificationKind::parse(""), NotificationKind::Info);
        assert_eq!(NotificationKind::parse("critical").color(), "#3b82f6");
    }

    #[test]
    fn test_new_notification_replaces_existing() {
        let mut center = NotificationCenter::new();
        let first = center.notify("A", NotificationKind::Info);
        let second = center.notify("B", NotificationKind::Success);

        assert_ne!(first, second);
        let current = center.current().unwrap();
        assert_eq!(current.message, "B");
        assert_eq!(current.kind, NotificationKind::Success);
    }

    #[test]
    fn test_dismiss_timer_fires_after_five_seconds() {
        assert_eq!(AUTO_DISMISS_MS, 5000);

        let mut center = NotificationCenter::new();
        let timer = DismissTimer::new(center.notify("Saved", NotificationKind::Success));
        assert_eq!(timer.delay_ms, 5000);

        assert!(center.dismiss(timer.id));
        assert!(center.current().is_none());
    }

    #[test]
    fn test_stale_dismiss_keeps_newer_notification() {
        let mut center = NotificationCenter::new();
        let first = center.notify("A", NotificationKind::Info);
        let second = center.notify("B", NotificationKind::Info);

        assert!(!center.dismiss(first));
        assert_eq!(center.current().unwrap().id, second);

        assert!(center.dismiss(second));
        assert!(center.current().is_none());
        assert!(!center.dismiss(second));
    }
}
