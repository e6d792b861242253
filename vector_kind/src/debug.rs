//! Debug logging
//!
//! Set `VECTOR_KIND_DEBUG=1` to trace proxy unwrapping on stderr. The
//! variable is read once per process.

use std::sync::OnceLock;

/// Environment variable enabling proxy tracing
pub const DEBUG_ENV_VAR: &str = "VECTOR_KIND_DEBUG";

/// Check if proxy tracing is enabled via `VECTOR_KIND_DEBUG`.
pub fn debug_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var(DEBUG_ENV_VAR).is_ok())
}

/// Write one trace line to stderr without relying on `eprintln!`.
pub(crate) fn debug_log(args: std::fmt::Arguments<'_>) {
    use std::io::Write;
    let _ = writeln!(std::io::stderr(), "[vector_kind] {args}");
}
