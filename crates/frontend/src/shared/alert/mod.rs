//! User notifications
//!
//! One alert is visible at a time; showing a new one replaces the previous.
//! Screens get the service from context and never render alerts themselves.

use crate::shared::error::SyncError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Alerts close by themselves after this many milliseconds
const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Success,
    Error,
    Warning,
    Info,
}

impl AlertVariant {
    fn intent(self) -> MessageBarIntent {
        match self {
            AlertVariant::Success => MessageBarIntent::Success,
            AlertVariant::Error => MessageBarIntent::Error,
            AlertVariant::Warning => MessageBarIntent::Warning,
            AlertVariant::Info => MessageBarIntent::Info,
        }
    }

    fn default_title(self) -> &'static str {
        match self {
            AlertVariant::Success => "Success",
            AlertVariant::Error => "Error",
            AlertVariant::Warning => "Warning",
            AlertVariant::Info => "Info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    /// Sequence number; a dismiss timer only closes the alert it was started for
    pub seq: u64,
    pub variant: AlertVariant,
    pub title: String,
    pub message: String,
}

impl AlertMessage {
    pub fn new(seq: u64, variant: AlertVariant, message: impl Into<String>, title: Option<&str>) -> Self {
        Self {
            seq,
            variant,
            title: title.unwrap_or(variant.default_title()).to_string(),
            message: message.into(),
        }
    }

    pub fn from_error(seq: u64, err: &SyncError) -> Self {
        let variant = if err.is_validation() {
            AlertVariant::Warning
        } else {
            AlertVariant::Error
        };
        Self::new(seq, variant, err.user_message(), Some(err.title()))
    }
}

#[derive(Clone, Copy)]
pub struct AlertService {
    current: RwSignal<Option<AlertMessage>>,
    next_seq: StoredValue<u64>,
}

impl AlertService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_seq: StoredValue::new(1),
        }
    }

    pub fn current(&self) -> Option<AlertMessage> {
        self.current.get()
    }

    pub fn show(&self, message: impl Into<String>, variant: AlertVariant, title: Option<&str>) {
        let seq = self.take_seq();
        self.present(AlertMessage::new(seq, variant, message, title));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, AlertVariant::Success, None);
    }

    pub fn error(&self, err: &SyncError) {
        let seq = self.take_seq();
        self.present(AlertMessage::from_error(seq, err));
    }

    pub fn close(&self) {
        self.current.set(None);
    }

    fn take_seq(&self) -> u64 {
        let seq = self.next_seq.get_value();
        self.next_seq.set_value(seq + 1);
        seq
    }

    fn present(&self, alert: AlertMessage) {
        let seq = alert.seq;
        self.current.set(Some(alert));

        let current = self.current;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            // signal may be gone if the app was unmounted meanwhile
            let _ = current.try_update(|slot| {
                if slot.as_ref().map(|a| a.seq) == Some(seq) {
                    *slot = None;
                }
            });
        });
    }
}

impl Default for AlertService {
    fn default() -> Self {
        Self::new()
    }
}

/// Alert service from context
///
/// Panics when called outside the [`AlertHost`] subtree.
pub fn use_alert() -> AlertService {
    use_context::<AlertService>().expect("AlertService not found in context")
}

/// Renders the current alert above the page content
#[component]
pub fn AlertHost(children: Children) -> impl IntoView {
    let alerts = AlertService::new();
    provide_context(alerts);

    view! {
        {children()}
        {move || alerts.current().map(|alert| view! {
            <div class="alert-host" style="position: fixed; top: var(--spacing-lg); right: var(--spacing-lg); z-index: 2000; max-width: 420px;">
                <MessageBar intent=alert.variant.intent()>
                    <MessageBarBody>
                        <MessageBarTitle>{alert.title.clone()}</MessageBarTitle>
                        {alert.message.clone()}
                    </MessageBarBody>
                    <MessageBarActions>
                        <Button
                            appearance=ButtonAppearance::Transparent
                            size=ButtonSize::Small
                            on_click=move |_| alerts.close()
                        >
                            "✕"
                        </Button>
                    </MessageBarActions>
                </MessageBar>
            </div>
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::WriteAction;

    #[test]
    fn test_validation_error_is_a_warning() {
        let alert = AlertMessage::from_error(1, &SyncError::validation("Chapter title"));
        assert_eq!(alert.variant, AlertVariant::Warning);
        assert_eq!(alert.message, "Chapter title is required");
        assert_eq!(alert.title, "Missing information");
    }

    #[test]
    fn test_write_error_is_an_error() {
        let alert =
            AlertMessage::from_error(2, &SyncError::write(WriteAction::Delete, "HTTP 404"));
        assert_eq!(alert.variant, AlertVariant::Error);
        assert_eq!(alert.message, "Failed to delete: HTTP 404");
    }

    #[test]
    fn test_default_title_per_variant() {
        let alert = AlertMessage::new(3, AlertVariant::Success, "Chapter added", None);
        assert_eq!(alert.title, "Success");
        let alert = AlertMessage::new(4, AlertVariant::Info, "x", Some("Heads up"));
        assert_eq!(alert.title, "Heads up");
    }
}
