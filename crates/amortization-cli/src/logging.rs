use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVES: &str = "amortization_core=warn,amort=warn";
const VERBOSE_DIRECTIVES: &str = "amortization_core=debug,amort=debug";

/// Install the global subscriber. Logs go to stderr so stdout stays
/// parseable; `RUST_LOG` wins over `--verbose`.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let fallback = if verbose { VERBOSE_DIRECTIVES } else { DEFAULT_DIRECTIVES };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .init();
    });
}
