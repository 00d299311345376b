//! Tracing setup shared by the engine's test suites.
//!
//! ```bash
//! TEST_LOG=sixhand_engine::services=debug cargo test -p sixhand-engine
//! ```

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when neither `TEST_LOG` nor `RUST_LOG` names one.
pub const DEFAULT_DIRECTIVE: &str = "warn";

static INSTALLED: OnceCell<bool> = OnceCell::new();

/// First non-blank of `test_log`, `rust_log`, else [`DEFAULT_DIRECTIVE`].
pub fn directive<'a>(test_log: Option<&'a str>, rust_log: Option<&'a str>) -> &'a str {
    [test_log, rust_log]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|d| !d.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVE)
}

/// Install the compact test-writer subscriber once per process.
///
/// Returns `true` when this call's subscriber is the global one; `false`
/// when another subscriber got there first. An unparsable directive falls
/// back to [`DEFAULT_DIRECTIVE`].
pub fn init() -> bool {
    *INSTALLED.get_or_init(|| {
        let test_log = std::env::var("TEST_LOG").ok();
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = EnvFilter::try_new(directive(test_log.as_deref(), rust_log.as_deref()))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .compact()
            .try_init()
            .is_ok()
    })
}
