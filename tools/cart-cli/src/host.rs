//! Terminal host for the storefront.

use std::time::Duration;

use cart_checkout::PageHost;
use turbo_commerce::checkout::Redirect;

use crate::output::Output;

/// Prints toasts and alerts. Navigation is left to the checkout command,
/// which has the confirmation in hand.
pub struct ConsoleHost {
    output: Output,
}

impl ConsoleHost {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl PageHost for ConsoleHost {
    fn toast(&mut self, message: &str, duration: Duration) {
        tracing::trace!(?duration, "toast");
        self.output.success(message);
    }

    fn alert(&mut self, message: &str) {
        for line in message.lines() {
            self.output.info(line);
        }
    }

    fn navigate(&mut self, redirect: &Redirect) {
        self.output
            .debug(&format!("redirect to {} in {}ms", redirect.to, redirect.after_ms));
    }
}
