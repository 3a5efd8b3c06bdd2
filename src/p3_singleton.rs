// Pattern 3: Singleton with OnceLock
// One process-wide instance, created on first access.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

static INSTANCE: OnceLock<Messenger> = OnceLock::new();
static CREATIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct Messenger {
    _private: (),
}

impl Messenger {
    // Only reachable through `instance`.
    fn new() -> Self {
        CREATIONS.fetch_add(1, Ordering::SeqCst);
        tracing::info!("Singleton instance created!");
        Self { _private: () }
    }

    /// Returns the shared instance, constructing it on the first call.
    ///
    /// `OnceLock` runs the initializer at most once even when several
    /// threads race on the first access.
    pub fn instance() -> &'static Messenger {
        INSTANCE.get_or_init(Messenger::new)
    }

    /// How many times the constructor has run in this process.
    pub fn creation_count() -> usize {
        CREATIONS.load(Ordering::SeqCst)
    }

    pub fn is_same(a: &Messenger, b: &Messenger) -> bool {
        std::ptr::eq(a, b)
    }

    pub fn display_message(&self, message: &str) -> String {
        tracing::debug!(message, "displaying message");
        message.to_string()
    }
}
