//! # Core Configuration
//!
//! Capacities for the fixed-size kernel, loaded once at startup.
//!
//! Every container in this crate is sized when it is created and never
//! grows. The numbers come from here: either the compiled-in defaults or a
//! TOML file parsed before any store exists.

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Default size of the entity identifier universe.
pub const DEFAULT_MAX_ENTITIES: usize = 1024 * 512;

/// Default number of distinct component types the registry can hold.
pub const DEFAULT_MAX_COMPONENT_TYPES: usize = 256;

/// Startup capacities for the core kernel.
///
/// # Example
///
/// ```rust,ignore
/// let config = CoreConfig::from_toml_str("max_entities = 4096")?;
/// let registry = ComponentRegistry::with_config(&config);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    /// Size of the entity identifier universe, `[0, max_entities)`.
    pub max_entities: usize,
    /// Maximum number of distinct component types.
    pub max_component_types: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            max_entities: DEFAULT_MAX_ENTITIES,
            max_component_types: DEFAULT_MAX_COMPONENT_TYPES,
        }
    }
}

impl CoreConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// Missing fields fall back to the defaults; unknown fields are
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] if the text is not valid TOML
    /// or a capacity is out of range.
    pub fn from_toml_str(raw: &str) -> CoreResult<Self> {
        let config: Self =
            toml::from_str(raw).map_err(|err| CoreError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every capacity is non-zero and representable as a
    /// 32-bit index.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_entities == 0 || self.max_entities > u32::MAX as usize {
            return Err(CoreError::InvalidConfig(format!(
                "max_entities out of range: {}",
                self.max_entities
            )));
        }
        if self.max_component_types == 0 || self.max_component_types > u32::MAX as usize {
            return Err(CoreError::InvalidConfig(format!(
                "max_component_types out of range: {}",
                self.max_component_types
            )));
        }
        Ok(())
    }
}
