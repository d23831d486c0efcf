//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::RoomRegistry;
use crate::room::{Room, RoomNumber};

/// Complete configuration structure.
///
/// All fields are optional; unset fields fall through to the next layer.
/// Unknown keys in a config file are rejected rather than silently ignored.
///
/// # Examples
///
/// ```
/// use roombook::config::Config;
///
/// let config: Config = serde_yaml::from_str("data_dir: /tmp/rooms").unwrap();
/// assert_eq!(config.data_dir.unwrap().to_str(), Some("/tmp/rooms"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the snapshot file.
    pub data_dir: Option<PathBuf>,

    /// Room set to seed when no snapshot exists, replacing the built-in
    /// default rooms.
    pub rooms: Option<Vec<RoomSeed>>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Overlays `other` on top of this configuration.
    ///
    /// Fields set in `other` win; unset fields keep the current value.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            data_dir: other.data_dir.or(self.data_dir),
            rooms: other.rooms.or(self.rooms),
            output_format: other.output_format.or(self.output_format),
        }
    }

    /// Builds the registry to seed when no snapshot exists.
    ///
    /// Uses the configured room set if one is given, otherwise the built-in
    /// default rooms.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedInput`] if a configured room number
    /// is invalid.
    pub fn seed_registry(&self) -> Result<RoomRegistry> {
        match &self.rooms {
            None => Ok(RoomRegistry::with_default_rooms()),
            Some(seeds) => {
                let rooms = seeds
                    .iter()
                    .map(|seed| {
                        let number = RoomNumber::try_from(seed.number)?;
                        Ok(Room::new(number, seed.capacity))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(RoomRegistry::from_rooms(rooms))
            }
        }
    }
}

/// A room seed entry in the configuration file.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RoomSeed {
    /// The room number.
    pub number: u32,
    /// The initial capacity.
    pub capacity: u32,
}

/// Output format for list commands.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}
