static INIT_ONCE: std::sync::Once = std::sync::Once::new();

/// Install the tracing subscriber once per process. Honors `RUST_LOG`;
/// defaults to `info`. Later calls (including from tests sharing a process)
/// are no-ops.
pub fn init_tracing_once() {
    INIT_ONCE.call_once(|| {
        let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
    });
}
