use tracing_subscriber::EnvFilter;

/// Log pipeline stages when run with e.g. `RUST_LOG=shunting_calc=trace`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
