//! Observability hooks for the codec pipeline.
//!
//! Stage-level diagnostics go through the `log` facade. The `log_metric!` macro
//! emits structured key/value events and is compiled out of release builds.
//! Applications that want to see these events without configuring their own
//! logger can call [`enable_verbose_logging`].

use std::fs::OpenOptions;
use std::sync::Once;

use log::LevelFilter;

use crate::error::CodecError;

/// Logs a structured key-value metric at debug level, only in debug builds.
///
/// # Example
/// ```
/// use pixlzw::log_metric;
/// let codelength = 9;
/// log_metric!("event"="lzw_encode", "codelength"=&codelength);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+
            $crate::__log::debug!("PIXLZW_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` at `Debug` level, writing to stderr or appending
/// to `log_file`. Only the first call has any effect.
pub fn enable_verbose_logging(log_file: Option<&str>) -> Result<(), CodecError> {
    let target = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(move || {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Debug);

        // Just the level and the message.
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())
        });

        if let Some(file) = target {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}
