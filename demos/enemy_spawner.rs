//! # Example: Enemy Spawner
//!
//! Spawns a random enemy every 300ms and announces it to two observers.
//! A seed given as the first argument makes the run reproducible.

use std::sync::Arc;
use std::time::Duration;

use switchyard::{
    ActorId, Enemy, EnemyKind, EnemySpawner, IdAllocator, LogWriter, ObserverFn, RandomSource,
    SeededRandom, Snapshot, SpawnerConfig, Subject, ThreadRandom, TokioScheduler, TracingSink,
};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let random: Arc<dyn RandomSource> = match std::env::args().nth(1) {
        Some(seed) => Arc::new(SeededRandom::new(seed.parse()?)),
        None => Arc::new(ThreadRandom),
    };

    let subject = Arc::new(Subject::new(
        "enemies",
        Enemy {
            id: ActorId(0),
            kind: EnemyKind::Ork,
            health: 0,
            damage: 0,
        },
    ));
    subject.attach(ObserverFn::handle("announcer", |snap: &Snapshot<Enemy>| {
        println!("A wild {} appears!", snap.state());
        Ok(())
    }));
    subject.attach(Arc::new(LogWriter::new(Arc::new(TracingSink))).into());

    let spawner = Arc::new(EnemySpawner::new(
        SpawnerConfig::default(),
        Arc::new(IdAllocator::new()),
        random,
    )?);
    let scheduler = TokioScheduler::current()?;
    let handle = spawner.start(&scheduler, Duration::from_millis(300), Arc::clone(&subject));

    tokio::time::sleep(Duration::from_millis(1000)).await;
    handle.stopped().await;
    println!("spawned {} enemies", subject.rounds());
    Ok(())
}
