mod config;
mod consts;
mod decoder;

pub use wyoming_types as types;
pub use config::{Config, ConfigBuilder, ConfigError, UnknownTypePolicy};
pub use decoder::{Decoder, Stats};
