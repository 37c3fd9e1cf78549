//! Tracing/logging setup shared by storefront binaries and tests.

/// Initialize process-wide tracing with the default `info` level.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Like [`init`], but with a caller-chosen fallback filter used when
/// `RUST_LOG` is unset (e.g. `"grocer_store=debug"`).
pub fn init_with_default(directives: &str) {
    tracing::init(directives);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
