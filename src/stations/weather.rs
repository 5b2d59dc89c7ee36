//! # Weather station: a subject fed by random measurements.
//!
//! [`WeatherStation`] owns nothing but a shared [`Subject`] and an injected
//! [`RandomSource`]. Each measurement replaces the subject state; observers
//! such as [`ReadingDisplay`] pick it up on the next notification round.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use switchyard::{MemorySink, ReadingDisplay, SeededRandom, Subject, WeatherReading, WeatherStation};
//!
//! let subject = Arc::new(Subject::new("weather", WeatherReading::default()));
//! let out = Arc::new(MemorySink::new());
//! subject.attach(ReadingDisplay::handle("Phone", out.clone()));
//!
//! let station = WeatherStation::new(Arc::clone(&subject), Arc::new(SeededRandom::new(1)));
//! station.measure_and_notify().unwrap();
//! assert!(out.lines()[0].starts_with("Phone got a new reading: "));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::capabilities::{OutputSink, RandomSource};
use crate::core::{RoundReport, Subject};
use crate::error::{NotifyError, ObserveError};
use crate::events::Snapshot;
use crate::subscribers::{Observe, ObserverHandle};

/// Exclusive upper bound of every sampled field.
const SAMPLE_MAX: i64 = 50;

/// One measurement.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WeatherReading {
    pub temperature: i64,
    pub humidity: i64,
    pub pressure: i64,
}

impl fmt::Display for WeatherReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "temperature={} humidity={} pressure={}",
            self.temperature, self.humidity, self.pressure
        )
    }
}

/// Random measurement source publishing into a subject.
pub struct WeatherStation {
    subject: Arc<Subject<WeatherReading>>,
    random: Arc<dyn RandomSource>,
}

impl WeatherStation {
    pub fn new(subject: Arc<Subject<WeatherReading>>, random: Arc<dyn RandomSource>) -> Self {
        Self { subject, random }
    }

    pub fn subject(&self) -> &Arc<Subject<WeatherReading>> {
        &self.subject
    }

    /// Draws a new reading and stores it as the subject state without notifying.
    pub fn sample(&self) -> WeatherReading {
        let reading = WeatherReading {
            temperature: self.random.uniform_int(0, SAMPLE_MAX),
            humidity: self.random.uniform_int(0, SAMPLE_MAX),
            pressure: self.random.uniform_int(0, SAMPLE_MAX),
        };
        self.subject.update_state(reading);
        reading
    }

    /// Samples and notifies every attached observer.
    pub fn measure_and_notify(&self) -> Result<RoundReport, NotifyError> {
        self.sample();
        self.subject.notify()
    }
}

/// Observer printing every reading it receives, prefixed with its label.
pub struct ReadingDisplay {
    label: String,
    sink: Arc<dyn OutputSink>,
}

impl ReadingDisplay {
    pub fn new(label: impl Into<String>, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            label: label.into(),
            sink,
        }
    }

    /// Creates the display and returns it as a fresh handle.
    pub fn handle(
        label: impl Into<String>,
        sink: Arc<dyn OutputSink>,
    ) -> ObserverHandle<WeatherReading> {
        ObserverHandle::new(Self::new(label, sink))
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Observe<WeatherReading> for ReadingDisplay {
    fn receive(&self, snapshot: &Snapshot<WeatherReading>) -> Result<(), ObserveError> {
        self.sink
            .emit(&format!("{} got a new reading: {}", self.label, snapshot.state()));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ReadingDisplay"
    }
}
