use std::collections::HashMap;

use super::{TaxRegime, TaxRegimeError};

/// Named regimes available to callers.
///
/// Typical lifetime:
/// 1. Create with `RegimeRegistry::builtin()` (or `new()` for an empty one).
/// 2. Call `register` for any additional regime.
/// 3. Call `get` with the name selected in configuration.
#[derive(Debug, Clone)]
pub struct RegimeRegistry {
    regimes: HashMap<String, TaxRegime>,
}

impl RegimeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            regimes: HashMap::new(),
        }
    }

    /// A registry holding the rent relief and consolidated relief regimes.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(TaxRegime::rent_relief());
        registry.register(TaxRegime::consolidated_relief());
        registry
    }

    /// Register a regime under its own name.
    ///
    /// A regime with the same name is silently replaced.
    pub fn register(&mut self, regime: TaxRegime) {
        self.regimes.insert(regime.name.clone(), regime);
    }

    /// Names of every registered regime, sorted alphabetically.
    pub fn available_regimes(&self) -> Vec<String> {
        let mut names: Vec<_> = self.regimes.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// # Errors
    /// * [`TaxRegimeError::UnknownRegime`] when nothing is registered under
    ///   `name`.
    pub fn get(&self, name: &str) -> Result<&TaxRegime, TaxRegimeError> {
        self.regimes
            .get(name)
            .ok_or_else(|| TaxRegimeError::UnknownRegime {
                name: name.to_string(),
                available: self.available_regimes(),
            })
    }
}

impl Default for RegimeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
