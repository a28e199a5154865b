//! Desktop notifications via the OS notification center.

use routine_core::reminders::{NotificationPermission, Notifier};
use routine_core::Error;

const APP_NAME: &str = "Morning Routine";

/// Shows reminders with `notify-rust`.
///
/// Desktop platforms have no permission prompt, so supported targets report
/// `Granted` up front.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn permission(&self) -> NotificationPermission {
        if cfg!(any(
            target_os = "windows",
            target_os = "macos",
            target_os = "linux",
            target_os = "freebsd"
        )) {
            NotificationPermission::Granted
        } else {
            NotificationPermission::Unsupported
        }
    }

    fn request_permission(&self) -> NotificationPermission {
        self.permission()
    }

    fn notify(&self, title: &str, body: &str) -> routine_core::Result<()> {
        tracing::info!("Showing reminder: {}", body);
        notify_rust::Notification::new()
            .appname(APP_NAME)
            .summary(title)
            .body(body)
            .show()
            .map(drop)
            .map_err(|error| Error::Notification(error.to_string()))
    }
}
