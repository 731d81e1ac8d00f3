//! Notification boundary between the allocator and whoever shows feedback

use serde::{Deserialize, Serialize};

use crate::service::{AssignOutcome, RejectReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

impl NoticeLevel {
    pub fn label(self) -> &'static str {
        match self {
            NoticeLevel::Success => "ok",
            NoticeLevel::Info => "info",
            NoticeLevel::Error => "error",
        }
    }
}

/// User-facing feedback message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    /// Set when the notice reports a refused assignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectReason>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
            reason: None,
        }
    }

    pub fn rejected(reason: RejectReason) -> Self {
        let level = if reason.is_error() {
            NoticeLevel::Error
        } else {
            NoticeLevel::Info
        };
        Self {
            level,
            message: reason.message().to_string(),
            reason: Some(reason),
        }
    }

    pub fn from_outcome(outcome: &AssignOutcome) -> Self {
        match outcome {
            AssignOutcome::Assigned {
                person_name,
                vehicle_number,
            } => Self::success(format!(
                "Assigned {} to vehicle {}",
                person_name, vehicle_number
            )),
            AssignOutcome::Rejected { reason } => Self::rejected(*reason),
        }
    }
}

/// Receiver of feedback notices
pub trait NotificationSink {
    fn notify(&mut self, notice: Notice);
}

/// Sink that keeps every notice in order
#[derive(Debug, Default)]
pub struct RecordingSink {
    notices: Vec<Notice>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Take the recorded notices, leaving the sink empty
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for &mut S {
    fn notify(&mut self, notice: Notice) {
        (**self).notify(notice);
    }
}
