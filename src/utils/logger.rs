use std::env;
use std::sync::OnceLock;

/// Debug logging is decided once per process from `PROMPTLINE_DEBUG`.
fn enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| env::var("PROMPTLINE_DEBUG").is_ok())
}

pub fn debug(message: &str) {
    if enabled() {
        eprintln!("[DEBUG] {}", message);
    }
}

pub fn debug_with_context(context: &str, message: &str) {
    if enabled() {
        eprintln!("[DEBUG] {}: {}", context, message);
    }
}
