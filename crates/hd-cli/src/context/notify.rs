use hd_store::{Notice, NoticeLevel, Notify};

/// Prints success notices to stderr. Failures are left to the command's
/// error report and only traced here.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotify;

impl Notify for StderrNotify {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => eprintln!("{}", notice.message),
            NoticeLevel::Error => tracing::debug!(message = %notice.message, "operation failed"),
        }
    }
}
