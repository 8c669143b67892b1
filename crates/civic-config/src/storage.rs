//! Persistence slot configuration.

use std::path::PathBuf;

use civic_core::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Deserializer, Serialize};

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

/// Accept a scalar of any kind where a string is expected.
///
/// Environment values are parsed before extraction, so `CIVIC_STORAGE__KEY=2024`
/// arrives as a number. Numbers are rendered back in their canonical form; a
/// value like `007` must be quoted (`"007"`) to survive verbatim.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Signed(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    })
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the slot file. Empty means the platform data directory.
    #[serde(default, deserialize_with = "lenient_string")]
    pub data_dir: String,

    /// Slot key; the file is `{data_dir}/{key}.json`.
    #[serde(default = "default_key", deserialize_with = "lenient_string")]
    pub key: String,

    /// Maximum serialized size in bytes. 0 disables the limit.
    #[serde(default)]
    pub quota_bytes: usize,
}

impl StorageConfig {
    /// Directory the slot lives in.
    ///
    /// Falls back to `{platform data dir}/civic`, or `.civic` in the current
    /// directory on platforms without one.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        if !self.data_dir.is_empty() {
            return PathBuf::from(&self.data_dir);
        }
        dirs::data_dir().map_or_else(|| PathBuf::from(".civic"), |dir| dir.join("civic"))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            key: default_key(),
            quota_bytes: 0,
        }
    }
}
