use dashboard_core::{Notification, NotificationSink, Severity};

/// Prints notifications to stderr so they don't mix with `--json` output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSink;

impl NotificationSink for TerminalSink {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", format_notification(&notification));
    }
}

fn format_notification(notification: &Notification) -> String {
    let marker = match notification.severity {
        Severity::Info => "✓",
        Severity::Destructive => "✗",
    };
    format!("{marker} {}: {}", notification.title, notification.description)
}
