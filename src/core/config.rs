//! Game configuration.
//!
//! A crossing is configured by three counts taken from the player:
//! - how many monsters,
//! - how many humans,
//! - how many seats the boat has.
//!
//! The minimum crew needed to row the boat defaults to one and can be
//! raised with `with_min_crew`. Monsters and humans together may not
//! exceed `MAX_AVATARS`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Largest number of avatars (monsters plus humans) in one game.
pub const MAX_AVATARS: u32 = 10_000;

/// Name of each configuration field, as reported in `ConfigError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfigField {
    Monsters,
    Humans,
    BoatCapacity,
    MinCrew,
}

impl std::fmt::Display for ConfigField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ConfigField::Monsters => "monsters",
            ConfigField::Humans => "humans",
            ConfigField::BoatCapacity => "boat capacity",
            ConfigField::MinCrew => "minimum crew",
        })
    }
}

/// Complete crossing configuration.
///
/// ```
/// use river_crossing::core::CrossingConfig;
///
/// let config = CrossingConfig::new(3, 3, 2);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.total_avatars(), 6);
/// assert_eq!(config.min_crew, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossingConfig {
    /// Number of monsters (at least 1).
    pub monsters: u32,

    /// Number of humans (at least 1).
    pub humans: u32,

    /// Seats in the boat (at least 1).
    pub boat_capacity: u32,

    /// Passengers needed before the boat may leave (1..=boat_capacity).
    pub min_crew: u32,
}

impl Default for CrossingConfig {
    fn default() -> Self {
        Self::new(3, 3, 2)
    }
}

impl CrossingConfig {
    /// Create a configuration with a minimum crew of one.
    ///
    /// The values are not checked here; call `validate`.
    #[must_use]
    pub fn new(monsters: u32, humans: u32, boat_capacity: u32) -> Self {
        Self {
            monsters,
            humans,
            boat_capacity,
            min_crew: 1,
        }
    }

    /// Set the minimum crew.
    #[must_use]
    pub fn with_min_crew(mut self, min_crew: u32) -> Self {
        self.min_crew = min_crew;
        self
    }

    /// Parse the three form fields (monsters, humans, boat capacity).
    ///
    /// Each field must be an integer of at least 1; surrounding whitespace
    /// is ignored.
    pub fn from_inputs(monsters: &str, humans: &str, boat_capacity: &str) -> Result<Self, ConfigError> {
        let config = Self::new(
            parse_count(ConfigField::Monsters, monsters)?,
            parse_count(ConfigField::Humans, humans)?,
            parse_count(ConfigField::BoatCapacity, boat_capacity)?,
        );
        config.validate()?;
        Ok(config)
    }

    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            (ConfigField::Monsters, self.monsters),
            (ConfigField::Humans, self.humans),
            (ConfigField::BoatCapacity, self.boat_capacity),
        ] {
            if value < 1 {
                return Err(ConfigError::TooSmall {
                    field,
                    value: i64::from(value),
                });
            }
        }

        let total = u64::from(self.monsters) + u64::from(self.humans);
        if total > u64::from(MAX_AVATARS) {
            return Err(ConfigError::TooManyAvatars {
                total,
                max: MAX_AVATARS,
            });
        }

        if self.min_crew < 1 || self.min_crew > self.boat_capacity {
            return Err(ConfigError::MinCrewOutOfRange {
                min_crew: self.min_crew,
                boat_capacity: self.boat_capacity,
            });
        }

        Ok(())
    }

    /// Total number of avatars in a game built from this configuration.
    ///
    /// Saturates on configurations that `validate` would refuse.
    #[must_use]
    pub fn total_avatars(&self) -> u32 {
        self.monsters.saturating_add(self.humans)
    }
}

fn parse_count(field: ConfigField, input: &str) -> Result<u32, ConfigError> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(value) if value < 1 => Err(ConfigError::TooSmall { field, value }),
        Ok(value) => u32::try_from(value).map_err(|_| ConfigError::NotAnInteger {
            field,
            input: trimmed.to_string(),
        }),
        Err(_) => Err(ConfigError::NotAnInteger {
            field,
            input: trimmed.to_string(),
        }),
    }
}
