//! # Duck: an actor composed of two strategy slots.
//!
//! Every duck swims and can describe itself (fixed behavior). How it flies and
//! how it sounds are strategies held in the [`Flight`] and [`Voice`] slots and
//! can be swapped at any time without touching the duck type.
//!
//! ## Breed loadouts (bound at construction)
//! | Breed     | Flight         | Voice       |
//! |-----------|----------------|-------------|
//! | Mallard   | `FlyWithWings` | `Quack`     |
//! | Redhead   | `FlyWithWings` | `Quack`     |
//! | Rubber    | `FlyNoWay`     | `Squeak`    |
//! | Decoy     | `FlyNoWay`     | `MuteQuack` |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use switchyard::{ActorId, Breed, Duck, FlyWithWings, MemorySink};
//!
//! let out = MemorySink::new();
//! let mut duck = Duck::new(ActorId(1), Breed::Rubber);
//! duck.perform_fly(&out);                 // grounded: writes nothing
//! duck.set_flight(Arc::new(FlyWithWings));
//! duck.perform_fly(&out);
//! assert_eq!(out.lines(), vec!["I am flying with wings"]);
//! ```

use std::fmt;
use std::sync::Arc;

use super::id::ActorId;
use crate::capabilities::OutputSink;
use crate::error::SlotError;
use crate::strategies::{SlotKind, StrategyCatalog, StrategySlot};

/// Locomotion strategy.
pub trait FlightBehavior: Send + Sync {
    fn fly(&self, out: &dyn OutputSink);
}

/// Vocalization strategy.
pub trait QuackBehavior: Send + Sync {
    fn quack(&self, out: &dyn OutputSink);
}

/// Flies with wings.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlyWithWings;

impl FlightBehavior for FlyWithWings {
    fn fly(&self, out: &dyn OutputSink) {
        out.emit("I am flying with wings");
    }
}

/// Does not fly at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlyNoWay;

impl FlightBehavior for FlyNoWay {
    fn fly(&self, _out: &dyn OutputSink) {}
}

/// Regular quack.
#[derive(Debug, Default, Clone, Copy)]
pub struct Quack;

impl QuackBehavior for Quack {
    fn quack(&self, out: &dyn OutputSink) {
        out.emit("*Quack*");
    }
}

/// Rubber ducks squeak.
#[derive(Debug, Default, Clone, Copy)]
pub struct Squeak;

impl QuackBehavior for Squeak {
    fn quack(&self, out: &dyn OutputSink) {
        out.emit("*Squeak*");
    }
}

/// Wooden ducks make no sound.
#[derive(Debug, Default, Clone, Copy)]
pub struct MuteQuack;

impl QuackBehavior for MuteQuack {
    fn quack(&self, out: &dyn OutputSink) {
        out.emit("*Silence*");
    }
}

/// Flight slot kind. Default: [`FlyWithWings`].
#[derive(Debug)]
pub struct Flight;

impl SlotKind for Flight {
    const NAME: &'static str = "flight";
    type Strategy = dyn FlightBehavior;

    fn default_strategy() -> Arc<Self::Strategy> {
        Arc::new(FlyWithWings)
    }
}

impl Flight {
    /// Catalog with `wings` (default) and `no-way`.
    pub fn catalog() -> Result<StrategyCatalog<Flight>, SlotError> {
        StrategyCatalog::<Flight>::builder()
            .register("wings", Arc::new(FlyWithWings))
            .register("no-way", Arc::new(FlyNoWay))
            .default_to("wings")
            .build()
    }
}

/// Voice slot kind. Default: [`Quack`].
#[derive(Debug)]
pub struct Voice;

impl SlotKind for Voice {
    const NAME: &'static str = "voice";
    type Strategy = dyn QuackBehavior;

    fn default_strategy() -> Arc<Self::Strategy> {
        Arc::new(Quack)
    }
}

impl Voice {
    /// Catalog with `quack` (default), `squeak` and `mute`.
    pub fn catalog() -> Result<StrategyCatalog<Voice>, SlotError> {
        StrategyCatalog::<Voice>::builder()
            .register("quack", Arc::new(Quack))
            .register("squeak", Arc::new(Squeak))
            .register("mute", Arc::new(MuteQuack))
            .default_to("quack")
            .build()
    }
}

/// Duck breeds; each documents its construction-time loadout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breed {
    Mallard,
    Redhead,
    Rubber,
    Decoy,
}

impl Breed {
    /// Lowercase breed label.
    pub fn label(&self) -> &'static str {
        match self {
            Breed::Mallard => "mallard",
            Breed::Redhead => "redhead",
            Breed::Rubber => "rubber",
            Breed::Decoy => "decoy",
        }
    }

    fn flight(&self) -> Arc<dyn FlightBehavior> {
        match self {
            Breed::Mallard | Breed::Redhead => Arc::new(FlyWithWings),
            Breed::Rubber | Breed::Decoy => Arc::new(FlyNoWay),
        }
    }

    fn voice(&self) -> Arc<dyn QuackBehavior> {
        match self {
            Breed::Mallard | Breed::Redhead => Arc::new(Quack),
            Breed::Rubber => Arc::new(Squeak),
            Breed::Decoy => Arc::new(MuteQuack),
        }
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A duck: identity, breed and two behavior slots.
#[derive(Debug, Clone)]
pub struct Duck {
    id: ActorId,
    breed: Breed,
    flight: StrategySlot<Flight>,
    voice: StrategySlot<Voice>,
}

impl Duck {
    /// Creates a duck bound to its breed's loadout.
    pub fn new(id: ActorId, breed: Breed) -> Self {
        Self {
            id,
            breed,
            flight: StrategySlot::<Flight>::new(breed.flight()),
            voice: StrategySlot::<Voice>::new(breed.voice()),
        }
    }

    /// Creates a duck bound to the slot-kind defaults, whatever its breed.
    pub fn with_kind_defaults(id: ActorId, breed: Breed) -> Self {
        Self {
            id,
            breed,
            flight: StrategySlot::default(),
            voice: StrategySlot::default(),
        }
    }

    /// Creates a duck bound to the catalog defaults.
    pub fn from_catalogs(
        id: ActorId,
        breed: Breed,
        flights: &StrategyCatalog<Flight>,
        voices: &StrategyCatalog<Voice>,
    ) -> Self {
        Self {
            id,
            breed,
            flight: StrategySlot::from_catalog(flights),
            voice: StrategySlot::from_catalog(voices),
        }
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn breed(&self) -> Breed {
        self.breed
    }

    /// Every duck swims the same way.
    pub fn swim(&self, out: &dyn OutputSink) {
        out.emit("I am swimming");
    }

    pub fn display(&self, out: &dyn OutputSink) {
        out.emit(&format!("I am a {} duck", self.breed));
    }

    /// Delegates to the bound flight strategy.
    pub fn perform_fly(&self, out: &dyn OutputSink) {
        self.flight.get().fly(out);
    }

    /// Delegates to the bound voice strategy.
    pub fn perform_quack(&self, out: &dyn OutputSink) {
        self.voice.get().quack(out);
    }

    pub fn set_flight(&mut self, strategy: Arc<dyn FlightBehavior>) {
        self.flight.bind(strategy);
    }

    pub fn set_voice(&mut self, strategy: Arc<dyn QuackBehavior>) {
        self.voice.bind(strategy);
    }

    /// Binds the flight strategy registered as `name`; unchanged on error.
    pub fn set_flight_named(
        &mut self,
        catalog: &StrategyCatalog<Flight>,
        name: &str,
    ) -> Result<(), SlotError> {
        self.flight.bind_named(catalog, name)
    }

    /// Binds the voice strategy registered as `name`; unchanged on error.
    pub fn set_voice_named(
        &mut self,
        catalog: &StrategyCatalog<Voice>,
        name: &str,
    ) -> Result<(), SlotError> {
        self.voice.bind_named(catalog, name)
    }

    pub fn flight(&self) -> &StrategySlot<Flight> {
        &self.flight
    }

    pub fn voice(&self) -> &StrategySlot<Voice> {
        &self.voice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::MemorySink;

    fn run(duck: &Duck) -> Vec<String> {
        let out = MemorySink::new();
        duck.perform_fly(&out);
        duck.perform_quack(&out);
        out.take()
    }

    #[test]
    fn test_breed_loadouts() {
        assert_eq!(
            run(&Duck::new(ActorId(0), Breed::Mallard)),
            vec!["I am flying with wings", "*Quack*"]
        );
        assert_eq!(run(&Duck::new(ActorId(1), Breed::Rubber)), vec!["*Squeak*"]);
        assert_eq!(run(&Duck::new(ActorId(2), Breed::Decoy)), vec!["*Silence*"]);
    }

    #[test]
    fn test_fixed_behavior() {
        let out = MemorySink::new();
        let duck = Duck::new(ActorId(0), Breed::Redhead);
        duck.swim(&out);
        duck.display(&out);
        assert_eq!(out.lines(), vec!["I am swimming", "I am a redhead duck"]);
    }

    #[test]
    fn test_substitution_is_isolated_per_actor() {
        let mut a = Duck::new(ActorId(0), Breed::Mallard);
        let b = Duck::new(ActorId(1), Breed::Mallard);
        a.set_flight(Arc::new(FlyNoWay));
        a.set_voice(Arc::new(Squeak));

        assert_eq!(run(&a), vec!["*Squeak*"]);
        assert_eq!(run(&b), vec!["I am flying with wings", "*Quack*"]);
        assert_eq!(a.flight().rebinds(), 1);
        assert_eq!(b.flight().rebinds(), 0);
    }

    #[test]
    fn test_identity_survives_rebinding() {
        let mut duck = Duck::new(ActorId(7), Breed::Rubber);
        duck.set_voice(Arc::new(Quack));
        duck.set_voice(Arc::new(MuteQuack));
        assert_eq!(duck.id(), ActorId(7));
        assert_eq!(duck.breed(), Breed::Rubber);
    }

    #[test]
    fn test_kind_defaults_match_explicit_binding() {
        let fresh = Duck::with_kind_defaults(ActorId(0), Breed::Decoy);
        let mut explicit = Duck::with_kind_defaults(ActorId(1), Breed::Decoy);
        explicit.set_flight(Flight::default_strategy());
        explicit.set_voice(Voice::default_strategy());
        assert_eq!(run(&fresh), run(&explicit));
        assert_eq!(run(&fresh), vec!["I am flying with wings", "*Quack*"]);
    }

    #[test]
    fn test_named_binding_through_catalogs() {
        let flights = Flight::catalog().unwrap();
        let voices = Voice::catalog().unwrap();
        let mut duck = Duck::from_catalogs(ActorId(0), Breed::Mallard, &flights, &voices);

        duck.set_flight_named(&flights, "no-way").unwrap();
        duck.set_voice_named(&voices, "mute").unwrap();
        assert_eq!(run(&duck), vec!["*Silence*"]);

        let err = duck.set_voice_named(&voices, "honk").unwrap_err();
        assert_eq!(err.as_label(), "unknown_strategy");
        assert_eq!(run(&duck), vec!["*Silence*"]);
    }
}
