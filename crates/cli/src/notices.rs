//! Cart notifications collected for printing.

use std::sync::{Arc, Mutex, PoisonError};

use product_store::cart::Notifier;

/// [`Notifier`] that keeps messages so they can be printed with the output.
///
/// Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct Notices {
    messages: Arc<Mutex<Vec<String>>>,
}

impl Notices {
    /// Prefix `output` with every collected message, one per line.
    pub fn prepend_to(&self, output: String) -> String {
        let messages = self
            .messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if messages.is_empty() {
            return output;
        }
        format!("{}\n{output}", messages.join("\n"))
    }
}

impl Notifier for Notices {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
