//! TOML configuration loading
//!
//! Every key is optional; missing keys keep their defaults.
//!
//! ```toml
//! [display]
//! brightness = 0.05
//! alternating = false
//!
//! [scroll]
//! color = 0x00FF00
//! background = 0x000000
//! frame_interval_ms = 80
//! origin_row = 1
//! ```

use super::{ConfigError, KitConfig};

impl KitConfig {
    /// Parse and validate a TOML configuration
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: KitConfig = ::toml::from_str(input).map_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::warn!("configuration is not valid TOML");
            ConfigError::Parse
        })?;
        config.validate()?;
        Ok(config)
    }
}
