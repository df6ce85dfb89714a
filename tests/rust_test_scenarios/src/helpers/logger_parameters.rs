//! Logger parameters test helpers.

use rust_tagged_log::prelude::{BuildMode, Category};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn deserialize_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let name: Option<String> = Option::deserialize(deserializer)?;
    name.map(|n| {
        n.parse::<Category>()
            .map_err(<D::Error as serde::de::Error>::custom)
    })
    .transpose()
}

fn deserialize_mode<'de, D>(deserializer: D) -> Result<Option<BuildMode>, D::Error>
where
    D: Deserializer<'de>,
{
    let name: Option<String> = Option::deserialize(deserializer)?;
    name.map(|n| {
        n.parse::<BuildMode>()
            .map_err(<D::Error as serde::de::Error>::custom)
    })
    .transpose()
}

/// Single message to emit.
#[derive(Deserialize, Debug)]
pub struct MessageParameters {
    /// `info`, `warning` or `error`.
    pub level: String,

    /// Message text.
    pub text: String,
}

/// Logger parameters, read from `logger` field of scenario input.
#[derive(Deserialize, Debug)]
pub struct LoggerParameters {
    /// Display name.
    pub name: String,

    /// Category, default if not set.
    #[serde(default, deserialize_with = "deserialize_category")]
    pub category: Option<Category>,

    /// Build mode, process-wide mode if not set.
    #[serde(default, deserialize_with = "deserialize_mode")]
    pub mode: Option<BuildMode>,

    /// Messages emitted in order.
    #[serde(default)]
    pub messages: Vec<MessageParameters>,
}

impl LoggerParameters {
    /// Parse `LoggerParameters` from JSON string.
    /// JSON is expected to contain `logger` field.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        let input_json: Value = serde_json::from_str(input)?;
        serde_json::from_value(input_json["logger"].clone())
    }
}
