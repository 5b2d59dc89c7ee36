//! # Example: Duck Pond
//!
//! Four breeds with their construction-time loadouts, then runtime
//! substitution on one duck, by value and by catalog name.

use std::sync::Arc;

use switchyard::{
    Breed, Duck, Flight, FlyWithWings, IdAllocator, OutputSink, StdoutSink, Voice,
};
use tracing_subscriber::EnvFilter;

fn show(duck: &Duck, out: &dyn OutputSink) {
    out.emit(&format!("-- duck #{} --", duck.id()));
    duck.display(out);
    duck.swim(out);
    duck.perform_fly(out);
    duck.perform_quack(out);
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let out = StdoutSink;
    let ids = IdAllocator::new();
    let mut pond: Vec<Duck> = [Breed::Mallard, Breed::Redhead, Breed::Rubber, Breed::Decoy]
        .into_iter()
        .map(|breed| Duck::new(ids.next_id(), breed))
        .collect();

    for duck in &pond {
        show(duck, &out);
    }

    // The rubber duck learns to fly; every other duck keeps its loadout.
    let rubber = &mut pond[2];
    rubber.set_flight(Arc::new(FlyWithWings));

    // The decoy gets its voice from configuration.
    let voices = Voice::catalog()?;
    let flights = Flight::catalog()?;
    let decoy = &mut pond[3];
    decoy.set_voice_named(&voices, "quack")?;
    if let Err(e) = decoy.set_flight_named(&flights, "rocket") {
        tracing::warn!(label = e.as_label(), error = %e, "flight not changed");
    }

    for duck in &pond {
        show(duck, &out);
    }
    Ok(())
}
