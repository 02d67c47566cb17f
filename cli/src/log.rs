/// Installs a `fmt` subscriber printing everything from `INFO` up.
pub fn init() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();
}
