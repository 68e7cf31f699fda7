use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Explicit database file, relative to the config directory. When
    /// unset the environment preset picks the file.
    pub path: Option<String>,
}
