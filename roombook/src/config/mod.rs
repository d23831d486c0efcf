//! Configuration schema and layered loading.
//!
//! Configuration comes from three layers, later ones overriding earlier:
//! built-in defaults, the `roombook.yaml` file in the data directory, and
//! the environment (`ROOMBOOK_DATA_DIR`).

mod builder;
mod schema;

pub use builder::{default_config_path, ConfigBuilder};
pub use schema::{Config, OutputFormat, RoomSeed};
