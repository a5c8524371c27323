//! Capturing `tracing` output in tests.

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

/// Shared in-memory buffer that a `fmt` subscriber writes into.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Everything written so far, as UTF-8 (lossy).
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self.0.lock().unwrap_or_else(|e| e.into_inner());
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a thread-local subscriber that records every event at
/// TRACE level and above, returning `f`'s result and the formatted log.
///
/// # Example
///
/// ```
/// use test_utils::capture_logs;
///
/// let ((), logs) = capture_logs(|| tracing::debug!("skipped weighting"));
/// assert!(logs.contains("skipped weighting"));
/// ```
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_logs_records_levels() {
        let (value, logs) = capture_logs(|| {
            tracing::debug!(field = "tas", "debug event");
            tracing::warn!("warn event");
            42
        });

        assert_eq!(value, 42);
        assert!(logs.contains("DEBUG"));
        assert!(logs.contains("debug event"));
        assert!(logs.contains("field=\"tas\""));
        assert!(logs.contains("warn event"));
    }
}
