//! # Example: Weather Station
//!
//! A station samples random readings every 500ms and notifies three displays.
//! After three rounds the "Window" display detaches itself.
//!
//! Run with `RUST_LOG=switchyard=debug` to see registry and round events.

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use switchyard::{
    ObserverFn, ObserverHandle, OutputSink, ReadingDisplay, Scheduler, Snapshot, StdoutSink,
    Subject, SubjectConfig, ThreadRandom, TokioScheduler, WeatherReading, WeatherStation,
};
use tracing_subscriber::EnvFilter;

type SelfHandle = Arc<Mutex<Option<ObserverHandle<WeatherReading>>>>;

/// Display that detaches itself from the subject after `leave_after` rounds.
fn leaving_display(
    subject: Weak<Subject<WeatherReading>>,
    sink: Arc<dyn OutputSink>,
    leave_after: u64,
) -> (ObserverHandle<WeatherReading>, SelfHandle) {
    let me: SelfHandle = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&me);
    let handle = ObserverFn::handle("Window", move |snap: &Snapshot<WeatherReading>| {
        sink.emit(&format!("Window got a new reading: {}", snap.state()));
        if snap.round() >= leave_after {
            let own = slot.lock().ok().and_then(|mut g| g.take());
            if let (Some(own), Some(subject)) = (own, subject.upgrade()) {
                subject.detach(&own);
            }
        }
        Ok(())
    });
    (handle, me)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sink = Arc::new(StdoutSink);
    let subject = Subject::builder(SubjectConfig::named("weather"))
        .with_sink(sink.clone())
        .build(WeatherReading::default());

    subject.attach(ReadingDisplay::handle("Phone", sink.clone()));
    subject.attach(ReadingDisplay::handle("Tablet", sink.clone()));
    let (window, me) = leaving_display(Arc::downgrade(&subject), sink.clone(), 3);
    if let Ok(mut slot) = me.lock() {
        *slot = Some(window.clone());
    }
    subject.attach(window);

    let station = Arc::new(WeatherStation::new(
        Arc::clone(&subject),
        Arc::new(ThreadRandom),
    ));
    let scheduler = TokioScheduler::current()?;
    let ticker = Arc::clone(&station);
    let handle = scheduler.schedule_repeating(
        Duration::from_millis(500),
        Box::new(move || {
            if let Err(e) = ticker.measure_and_notify() {
                tracing::warn!(label = e.as_label(), error = %e, "weather round failed");
            }
        }),
    );

    tokio::time::sleep(Duration::from_millis(2600)).await;
    handle.stopped().await;
    println!("rounds: {}, observers: {:?}", subject.rounds(), subject.observer_names());
    Ok(())
}
