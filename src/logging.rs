use env_logger::Env;

/// Initialize logging to stderr, leaving stdout for program output (the
/// askpass answer line, the final status line). RUST_LOG overrides the
/// default level.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();
}
