//! User-facing outcome messages for mutating operations.

use std::sync::Mutex;

use serde::Serialize;

use crate::error::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Sink for [`Notice`]s.
pub trait Notify: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Emit a success or failure notice for `result` and pass it through.
pub(crate) fn announce<T>(
    notify: &dyn Notify,
    result: Result<T, StoreError>,
    success: impl FnOnce(&T) -> String,
) -> Result<T, StoreError> {
    match &result {
        Ok(value) => notify.notify(Notice::success(success(value))),
        Err(error) => notify.notify(Notice::error(error.to_string())),
    }
    result
}

/// Routes notices to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotify;

impl Notify for LogNotify {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => tracing::info!(message = %notice.message, "notice"),
            NoticeLevel::Error => tracing::warn!(message = %notice.message, "notice"),
        }
    }
}

/// Keeps every notice in memory.
#[derive(Debug, Default)]
pub struct RecordingNotify {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotify {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }
}

impl Notify for RecordingNotify {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}
