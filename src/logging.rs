/// Debug-only `log!` macro for informational messages.
///
/// Browser builds write to the devtools console through `web_sys`; native builds
/// (the unit test runner) write to stderr instead. Either way the call disappears
/// from release builds unless the `console_logging` feature is on. Warnings and
/// errors are never compiled out and use `leptos::logging::{warn, error}`.
///
/// ```ignore
/// use crate::log;
///
/// log!("Travel status for train {}: {:?}", train.train_number, reconciliation);
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {{
        #[cfg(all(target_arch = "wasm32", any(debug_assertions, feature = "console_logging")))]
        {
            web_sys::console::log_1(&format!($($arg),+).into());
        }
        #[cfg(all(not(target_arch = "wasm32"), any(debug_assertions, feature = "console_logging")))]
        {
            eprintln!($($arg),+);
        }
    }};
}
