// src/notify.rs

/// User-facing notification sink, the toast surface of the client.
/// Injectable so controller logic can be exercised without a terminal.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

impl<N: Notifier> Notifier for std::sync::Arc<N> {
    fn success(&self, message: &str) {
        (**self).success(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}

/// Prints notifications to the terminal.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        println!("✓ {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("✗ {}", message);
    }
}
