//! Strategy factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::ConversionError;
use crate::exact::ExactMembership;
use crate::floyd::TortoiseHare;
use crate::strategy::{PeriodicityStrategy, StrategyKind};

/// Factory trait for looking up periodicity strategies.
pub trait StrategyFactory: Send + Sync {
    /// Get or create a strategy by name.
    fn get(&self, name: &str) -> Result<Arc<dyn PeriodicityStrategy>, ConversionError>;

    /// List all available strategy names.
    fn available(&self) -> Vec<&str>;
}

/// Build a fresh strategy of the given kind.
#[must_use]
pub fn create_strategy(kind: StrategyKind) -> Arc<dyn PeriodicityStrategy> {
    match kind {
        StrategyKind::TortoiseHare => Arc::new(TortoiseHare::new()),
        StrategyKind::ExactMembership => Arc::new(ExactMembership::new()),
    }
}

/// Map a registry name or alias to a strategy kind.
pub fn parse_kind(name: &str) -> Result<StrategyKind, ConversionError> {
    match name {
        "floyd" | "tortoise-hare" => Ok(StrategyKind::TortoiseHare),
        "exact" | "set" => Ok(StrategyKind::ExactMembership),
        _ => Err(ConversionError::Config(format!("unknown strategy: {name}"))),
    }
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn PeriodicityStrategy>>>,
}

impl DefaultFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn PeriodicityStrategy>, ConversionError> {
        if let Some(strategy) = self.cache.read().get(name) {
            return Ok(Arc::clone(strategy));
        }

        let strategy = create_strategy(parse_kind(name)?);
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&strategy));
        Ok(strategy)
    }

    fn available(&self) -> Vec<&str> {
        vec!["floyd", "exact"]
    }
}
