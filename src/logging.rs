//! Console logging.
//!
//! Filter with `RUST_LOG`, e.g. `RUST_LOG=csv_editor=debug`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "csv_editor=info,warn";

pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_line_number(true))
        .with(filter)
        .try_init();
    if let Err(err) = result {
        eprintln!("Warning: Could not initialize logging: {}", err);
    }
}
