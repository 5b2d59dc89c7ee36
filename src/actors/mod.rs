//! # Actors: identity plus strategy slots.
//!
//! An actor is a plain struct that composes one [`StrategySlot`](crate::StrategySlot)
//! per behavior family next to its own identity and state. Fixed behavior is
//! ordinary methods; variable behavior delegates to whatever strategy the slot
//! currently holds.
//!
//! ## Contents
//! - [`ActorId`], [`IdAllocator`] explicit, injectable identity source
//! - [`Duck`] reference actor with [`Flight`] and [`Voice`] slots

mod duck;
mod id;

pub use duck::{
    Breed, Duck, Flight, FlightBehavior, FlyNoWay, FlyWithWings, MuteQuack, Quack, QuackBehavior,
    Squeak, Voice,
};
pub use id::{ActorId, IdAllocator};
