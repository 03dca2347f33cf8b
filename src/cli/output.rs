/// Diagnostics: error rendering, logging setup, debug timers.
use std::io::Write;

use tracing_subscriber::EnvFilter;

use crate::client::ClientError;
use crate::types::ErrorOutput;

/// Install the stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--debug` selects `debug`, else `warn`.
pub fn init_tracing(debug: bool) {
    let fallback = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Write an error to stderr, either as `Error: <message>` or as a JSON envelope.
pub fn write_error(err: &ClientError, json_errors: bool) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = render_error(&mut out, err, json_errors);
}

fn render_error<W: Write>(out: &mut W, err: &ClientError, json_errors: bool) -> std::io::Result<()> {
    if json_errors {
        let envelope = ErrorOutput::from_client_error(err);
        let s = serde_json::to_string_pretty(&envelope).unwrap_or_default();
        writeln!(out, "{s}")
    } else {
        writeln!(out, "Error: {err}")
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds at debug level on drop.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
}

impl DebugTimer {
    #[must_use]
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        tracing::debug!(label = self.label, "{ms:.2}ms");
    }
}
