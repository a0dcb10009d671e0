//! Global error observation.
//!
//! Uncaught panics are logged for diagnostics; no recovery is attempted.
use std::panic;
use std::sync::Once;

use tracing::error;

static HOOK: Once = Once::new();

/// Installs a panic hook that logs uncaught panics via `tracing`.
///
/// The previously installed hook (typically the default stderr printer)
/// still runs afterwards. Calling this more than once is a no-op.
pub fn init_panic_hook() {
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let payload = info.payload();
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic payload".to_string());

            match info.location() {
                Some(location) => {
                    error!(target: "pageguard::panic", %location, "uncaught panic: {message}")
                }
                None => error!(target: "pageguard::panic", "uncaught panic: {message}"),
            }

            previous(info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::init_panic_hook;

    #[test]
    fn installing_twice_is_a_noop() {
        init_panic_hook();
        init_panic_hook();
    }

    #[test]
    fn panics_still_propagate_to_the_caller() {
        init_panic_hook();

        let result = std::panic::catch_unwind(|| panic!("boom"));
        assert!(result.is_err());
    }
}
