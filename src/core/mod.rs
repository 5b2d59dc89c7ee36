//! Subject core: state ownership and notification rounds.
//!
//! The public API from this module is [`Subject`] (with [`SubjectBuilder`] and
//! [`SubjectConfig`]), plus the round types it returns.
//!
//! Internal modules:
//! - [`subject`]: owns the registry and state, starts rounds;
//! - [`round`]: delivers one snapshot over a fixed observer list;
//! - [`builder`]: wires configuration, sink and initial observers;
//! - [`config`]: naming and delivery policy.

mod builder;
mod config;
mod round;
mod subject;

pub use builder::SubjectBuilder;
pub use config::{DeliveryPolicy, SubjectConfig};
pub use round::{NotificationRound, RoundReport};
pub use subject::Subject;
