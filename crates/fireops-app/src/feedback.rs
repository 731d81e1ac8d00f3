//! Notification sinks provided by the app layer

use fireops_domain::notify::{Notice, NoticeLevel, NotificationSink};
use tracing::{debug, info, Level};

/// Level a notice is logged at; refusals log at debug
pub fn log_level(level: NoticeLevel) -> Level {
    match level {
        NoticeLevel::Success => Level::INFO,
        NoticeLevel::Info | NoticeLevel::Error => Level::DEBUG,
    }
}

/// Logs each notice, then hands it to the wrapped sink
#[derive(Debug, Default)]
pub struct TracingSink<S> {
    inner: S,
}

impl<S: NotificationSink> TracingSink<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: NotificationSink> NotificationSink for TracingSink<S> {
    fn notify(&mut self, notice: Notice) {
        let reason = notice.reason.map(|r| r.code()).unwrap_or("-");
        if log_level(notice.level) == Level::INFO {
            info!(notice = notice.level.label(), "{}", notice.message);
        } else {
            debug!(notice = notice.level.label(), reason, "{}", notice.message);
        }
        self.inner.notify(notice);
    }
}
