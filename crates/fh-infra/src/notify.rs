use fh_core::ports::{Notice, NoticeSeverity, NotificationPort};
use tracing::{info, warn};

/// Writes notices to the log. Used when no UI is attached.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl NotificationPort for TracingNotifier {
    fn notify(&self, notice: Notice) {
        let description = notice.description.as_deref().unwrap_or("");
        match notice.severity {
            NoticeSeverity::Error => warn!(title = %notice.title, %description, "notice"),
            NoticeSeverity::Info | NoticeSeverity::Success => {
                info!(title = %notice.title, %description, "notice")
            }
        }
    }
}
