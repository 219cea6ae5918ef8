pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{MemoryBuffer, RecordingNotifier, TracingNotifier};
pub use config::{cli::StdioBuffer, toml_config::TomlConfig, Settings};
pub use core::command::CaseCommand;
pub use core::encoding::decode;
pub use core::transform::{invert_case, to_lower, to_upper, transform};
pub use domain::model::{ConversionReport, EncodingPolicy, TransformMode};
pub use utils::error::{CaserError, Result};
