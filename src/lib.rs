//! Quick settings torch tile backed by a sysfs LED control file.
//!
//! [`TorchTile`] reads and flips the torch through a [`ControlFile`] and draws
//! itself on whatever [`TileSurface`] the host hands it. Hosts deliver events
//! through [`TileHost`]; [`TileDispatcher`] is the in-process one.

pub mod control_file;
pub mod error;
pub mod host;
pub mod tile;
pub mod tile_config;

pub use control_file::{read_first_line, write_value, ControlFile, Outcome};
pub use error::{AccessError, ConfigError, Op};
pub use host::{RecordingSurface, TileDispatcher};
pub use tile::{Icon, TileEvent, TileHandler, TileHost, TileState, TileSurface, TorchTile};
pub use tile_config::{load_config, TileConfig, TorchEncoding, DEFAULT_CONTROL_PATH};
