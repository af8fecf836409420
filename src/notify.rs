//! Notifications
//!
//! Transient user-facing alerts shared by every flow: credential capture,
//! page forms and the dashboard.

use serde::Serialize;
use std::sync::RwLock;
use std::time::Duration;

use crate::format::escape_html;

/// How long an alert stays on screen before fading
pub const DISMISS_AFTER: Duration = Duration::from_millis(3000);

/// Fade-out duration once dismissal starts
pub const FADE_OUT: Duration = Duration::from_millis(300);

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

/// A single alert message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Render an alert as markup: `<div class="alert alert-{kind}">message</div>`
pub fn render_alert(notice: &Notice) -> String {
    format!(
        r#"<div class="alert alert-{}" role="alert">{}</div>"#,
        notice.kind.as_str(),
        escape_html(&notice.message)
    )
}

/// Sink for user-facing alerts
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Collects posted alerts in order. Used by the dev server, the CLI and tests.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: RwLock<Vec<Notice>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices posted so far, oldest first
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .read()
            .map(|n| n.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// The most recent notice
    pub fn latest(&self) -> Option<Notice> {
        self.notices().pop()
    }

    pub fn clear(&self) {
        match self.notices.write() {
            Ok(mut n) => n.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl Notifier for NoticeBoard {
    fn notify(&self, notice: Notice) {
        tracing::debug!(kind = notice.kind.as_str(), message = %notice.message, "Alert posted");
        match self.notices.write() {
            Ok(mut n) => n.push(notice),
            Err(poisoned) => poisoned.into_inner().push(notice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_alert_escapes_message() {
        let html = render_alert(&Notice::error("Use <strong> passwords"));
        assert_eq!(
            html,
            r#"<div class="alert alert-error" role="alert">Use &lt;strong&gt; passwords</div>"#
        );
    }

    #[test]
    fn test_board_keeps_order() {
        let board = NoticeBoard::new();
        board.notify(Notice::error("first"));
        board.notify(Notice::success("second"));

        let notices = board.notices();
        assert_eq!(notices.len(), 2);
        assert!(notices[0].is_error());
        assert_eq!(board.latest().unwrap().message, "second");

        board.clear();
        assert!(board.latest().is_none());
    }
}
