use crate::utils::error::{CaserError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 要套用的大小寫轉換
///
/// Deserializes through [`FromStr`], so config files accept the same
/// spellings and aliases as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TransformMode {
    Upper,
    Lower,
    Invert,
}

impl TransformMode {
    /// Menu order.
    pub const ALL: [TransformMode; 3] = [
        TransformMode::Upper,
        TransformMode::Lower,
        TransformMode::Invert,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TransformMode::Upper => "upper",
            TransformMode::Lower => "lower",
            TransformMode::Invert => "invert",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransformMode::Upper => "uppercase",
            TransformMode::Lower => "lowercase",
            TransformMode::Invert => "inverted case",
        }
    }

    pub fn confirmation_message(self) -> String {
        format!("Content converted to {}", self.label())
    }
}

impl fmt::Display for TransformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransformMode {
    type Err = CaserError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upper" | "uppercase" => Ok(TransformMode::Upper),
            "lower" | "lowercase" => Ok(TransformMode::Lower),
            "invert" | "swap" | "toggle" => Ok(TransformMode::Invert),
            _ => Err(CaserError::InvalidConfigValueError {
                field: "mode".to_string(),
                value: s.to_string(),
                reason: "Expected one of: upper, lower, invert".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for TransformMode {
    type Error = CaserError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// How malformed UTF-8 is treated at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum EncodingPolicy {
    Strict,
    #[default]
    Replace,
}

impl fmt::Display for EncodingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingPolicy::Strict => f.write_str("strict"),
            EncodingPolicy::Replace => f.write_str("replace"),
        }
    }
}

impl FromStr for EncodingPolicy {
    type Err = CaserError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(EncodingPolicy::Strict),
            "replace" => Ok(EncodingPolicy::Replace),
            _ => Err(CaserError::InvalidConfigValueError {
                field: "encoding".to_string(),
                value: s.to_string(),
                reason: "Expected one of: strict, replace".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for EncodingPolicy {
    type Error = CaserError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    pub mode: TransformMode,
    pub input_chars: usize,
    pub output_chars: usize,
    pub changed_chars: usize,
    pub message: String,
}

impl ConversionReport {
    pub fn new(mode: TransformMode, input: &str, output: &str) -> Self {
        let changed_chars = input
            .chars()
            .zip(output.chars())
            .filter(|(before, after)| before != after)
            .count();

        Self {
            mode,
            input_chars: input.chars().count(),
            output_chars: output.chars().count(),
            changed_chars,
            message: mode.confirmation_message(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
