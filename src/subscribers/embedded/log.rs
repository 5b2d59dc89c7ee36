//! # LogWriter: simple snapshot printer
//!
//! A minimal observer that writes every snapshot it receives to an
//! [`OutputSink`]. Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! [round 1] subject="weather" state=WeatherReading { temperature: 21, humidity: 40, pressure: 7 }
//! [round 2] subject="weather" state=WeatherReading { temperature: 3, humidity: 12, pressure: 30 }
//! ```

use std::fmt::Debug;
use std::sync::Arc;

use crate::capabilities::OutputSink;
use crate::error::ObserveError;
use crate::events::Snapshot;
use crate::subscribers::Observe;

/// Snapshot writer observer.
pub struct LogWriter {
    sink: Arc<dyn OutputSink>,
}

impl LogWriter {
    /// Construct a new [`LogWriter`] writing to `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }
}

impl<S: Debug + 'static> Observe<S> for LogWriter {
    fn receive(&self, s: &Snapshot<S>) -> Result<(), ObserveError> {
        self.sink.emit(&format!(
            "[round {}] subject={:?} state={:?}",
            s.round(),
            s.subject(),
            s.state()
        ));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::MemorySink;

    #[test]
    fn test_writes_one_line_per_snapshot() {
        let sink = Arc::new(MemorySink::new());
        let writer = LogWriter::new(sink.clone());
        writer.receive(&Snapshot::new("temp", 4, 10_i32)).unwrap();
        assert_eq!(sink.lines(), vec![r#"[round 4] subject="temp" state=10"#]);
    }
}
