//! Base-layer utility namespace.
//!
//! Everything callers need lives under [`util`]:
//!
//! ```text
//! use fc_util::util;
//!
//! let mut conf = util::parse_json(r#"{"retry": {"count": 1}}"#)?;
//! util::deep_extend(&mut conf, &[&overrides]);
//! let id = util::guid();
//! ```
//!
//! The value engine itself lives in `fc_value` and identifier generation in
//! `fc_ident`; this crate adds JSON text handling, template mixing and the
//! error reporting sink on top.

mod error;
mod json;
mod report;
mod template;
pub mod util;

use std::sync::Once;

pub use error::{TemplateError, UtilError};
pub use json::parse_json;
pub use report::{process_error, report_error, ErrorSink, Report, TracingSink};
pub use template::{mix_with, mix_with_engine, TemplateEngine, VariableTemplate};
pub use util::{custom_data, VERSION};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=fc_value=trace` or
/// `RUST_LOG=fc_util=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
