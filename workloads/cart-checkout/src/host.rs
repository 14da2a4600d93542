//! Side effects the page asks of its host: toasts, alerts and navigation.

use std::time::Duration;

use turbo_commerce::checkout::Redirect;

/// The environment hosting the page.
///
/// Toasts and navigation are fire-and-forget: they are scheduled and never
/// cancelled, and nothing waits for them.
pub trait PageHost {
    /// Show a transient notification for `duration`.
    fn toast(&mut self, message: &str, duration: Duration);

    /// Show a blocking alert.
    fn alert(&mut self, message: &str);

    /// Navigate once the redirect delay has elapsed.
    fn navigate(&mut self, redirect: &Redirect);
}

/// One recorded host side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Toast { message: String, duration: Duration },
    Alert(String),
    Navigate(Redirect),
}

/// Host that records every request, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    events: Vec<HostEvent>,
}

impl RecordingHost {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything requested so far.
    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Messages of every alert so far.
    pub fn alerts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Alert(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Check if a navigation was requested.
    pub fn navigated(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, HostEvent::Navigate(_)))
    }
}

impl PageHost for RecordingHost {
    fn toast(&mut self, message: &str, duration: Duration) {
        self.events.push(HostEvent::Toast {
            message: message.to_string(),
            duration,
        });
    }

    fn alert(&mut self, message: &str) {
        self.events.push(HostEvent::Alert(message.to_string()));
    }

    fn navigate(&mut self, redirect: &Redirect) {
        self.events.push(HostEvent::Navigate(redirect.clone()));
    }
}
