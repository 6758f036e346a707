//! Debug tracing for the functional calculus, gated by TITAN_DEBUG=1.
//!
//! Reports rejected non-square inputs, finished Schur reductions (with the
//! operation name and size) and eigenbases that could not be inverted.
use std::sync::OnceLock;

static ENABLED: OnceLock<bool> = OnceLock::new();

pub fn is_enabled() -> bool {
    *ENABLED.get_or_init(|| std::env::var("TITAN_DEBUG").ok().as_deref() == Some("1"))
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if $crate::core::debug::is_enabled() { eprintln!("[titan] {}", format_args!($($arg)*)); }
    }};
}
