pub mod command;
pub mod encoding;
pub mod transform;

pub use crate::domain::model::{ConversionReport, EncodingPolicy, TransformMode};
pub use crate::domain::ports::{Notifier, TextBuffer};
pub use crate::utils::error::Result;
