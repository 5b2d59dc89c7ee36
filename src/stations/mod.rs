//! Measurement stations publishing into subjects.

mod weather;

pub use weather::{ReadingDisplay, WeatherReading, WeatherStation};
