//! # Strategy catalog.
//!
//! [`StrategyCatalog`] maps names to the strategies of one [`SlotKind`] and names
//! the default. It lets slots be bound from configuration strings.
//!
//! ## Rules
//! - `build()` fails with [`SlotError::UnboundSlot`] if no default was set or the
//!   default does not name a registered strategy; a slot built from a catalog is
//!   therefore always bound.
//! - Registering a name twice fails with [`SlotError::DuplicateStrategy`].
//! - `resolve` of an unknown name fails with [`SlotError::UnknownStrategy`].
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use switchyard::{Flight, FlyNoWay, FlyWithWings, StrategyCatalog, StrategySlot};
//!
//! let catalog = StrategyCatalog::<Flight>::builder()
//!     .register("wings", Arc::new(FlyWithWings))
//!     .register("grounded", Arc::new(FlyNoWay))
//!     .default_to("grounded")
//!     .build()
//!     .unwrap();
//!
//! let mut slot = StrategySlot::from_catalog(&catalog);
//! slot.bind_named(&catalog, "wings").unwrap();
//! assert!(slot.bind_named(&catalog, "rocket").is_err());
//! assert_eq!(catalog.names(), vec!["grounded", "wings"]);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::kind::SlotKind;
use crate::error::SlotError;

/// Named strategies of one slot kind, with a resolved default.
pub struct StrategyCatalog<K: SlotKind> {
    entries: BTreeMap<String, Arc<K::Strategy>>,
    default: Arc<K::Strategy>,
    default_name: String,
}

impl<K: SlotKind> StrategyCatalog<K> {
    /// Starts a catalog definition.
    pub fn builder() -> CatalogBuilder<K> {
        CatalogBuilder {
            entries: Vec::new(),
            default_name: None,
        }
    }

    /// Returns the strategy registered as `name`.
    pub fn resolve(&self, name: &str) -> Result<Arc<K::Strategy>, SlotError> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| SlotError::UnknownStrategy {
                slot: K::NAME,
                name: name.to_owned(),
            })
    }

    /// The default strategy.
    pub fn default_strategy(&self) -> Arc<K::Strategy> {
        Arc::clone(&self.default)
    }

    /// Name of the default strategy.
    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// True if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

impl<K: SlotKind> fmt::Debug for StrategyCatalog<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyCatalog")
            .field("slot", &K::NAME)
            .field("names", &self.names())
            .field("default", &self.default_name)
            .finish()
    }
}

/// Builder for [`StrategyCatalog`].
pub struct CatalogBuilder<K: SlotKind> {
    entries: Vec<(String, Arc<K::Strategy>)>,
    default_name: Option<String>,
}

impl<K: SlotKind> CatalogBuilder<K> {
    /// Registers `strategy` under `name`.
    pub fn register(mut self, name: impl Into<String>, strategy: Arc<K::Strategy>) -> Self {
        self.entries.push((name.into(), strategy));
        self
    }

    /// Names the default strategy.
    pub fn default_to(mut self, name: impl Into<String>) -> Self {
        self.default_name = Some(name.into());
        self
    }

    /// Validates and builds the catalog.
    pub fn build(self) -> Result<StrategyCatalog<K>, SlotError> {
        let mut entries = BTreeMap::new();
        for (name, strategy) in self.entries {
            if entries.contains_key(&name) {
                return Err(SlotError::DuplicateStrategy {
                    slot: K::NAME,
                    name,
                });
            }
            entries.insert(name, strategy);
        }

        let default_name = self
            .default_name
            .ok_or(SlotError::UnboundSlot { slot: K::NAME })?;
        let default = entries
            .get(&default_name)
            .cloned()
            .ok_or(SlotError::UnboundSlot { slot: K::NAME })?;

        Ok(StrategyCatalog {
            entries,
            default,
            default_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::{Flight, FlyNoWay, FlyWithWings};

    #[test]
    fn test_missing_default_is_unbound_slot() {
        let err = StrategyCatalog::<Flight>::builder()
            .register("wings", Arc::new(FlyWithWings))
            .build()
            .unwrap_err();
        assert_eq!(err, SlotError::UnboundSlot { slot: "flight" });
    }

    #[test]
    fn test_default_must_be_registered() {
        let err = StrategyCatalog::<Flight>::builder()
            .register("wings", Arc::new(FlyWithWings))
            .default_to("jetpack")
            .build()
            .unwrap_err();
        assert_eq!(err.as_label(), "unbound_slot");
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = StrategyCatalog::<Flight>::builder()
            .register("wings", Arc::new(FlyWithWings))
            .register("wings", Arc::new(FlyNoWay))
            .default_to("wings")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SlotError::DuplicateStrategy {
                slot: "flight",
                name: "wings".into()
            }
        );
    }

    #[test]
    fn test_resolve_unknown() {
        let catalog = StrategyCatalog::<Flight>::builder()
            .register("grounded", Arc::new(FlyNoWay))
            .default_to("grounded")
            .build()
            .unwrap();
        assert_eq!(catalog.default_name(), "grounded");
        assert!(catalog.contains("grounded"));
        assert!(matches!(
            catalog.resolve("wings"),
            Err(SlotError::UnknownStrategy { .. })
        ));
    }
}
