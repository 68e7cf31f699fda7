use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Deployment environment tag.
///
/// Selects the database preset when no explicit path is configured.
/// Parsing is lenient: an unrecognized tag falls back to `Dev`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Dev,
    Testing,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Testing => "testing",
            Environment::Prod => "prod",
        }
    }

    /// Database file used when no explicit path is configured
    pub fn default_database_file(&self) -> &'static str {
        match self {
            Environment::Dev => "dev.db",
            Environment::Testing => "testing.db",
            Environment::Prod => "prod.db",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Environment::Dev),
            "testing" => Ok(Environment::Testing),
            "prod" => Ok(Environment::Prod),
            _ => Ok(Environment::Dev), // unknown tags fall back to dev
        }
    }
}

impl<'de> Deserialize<'de> for Environment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer).unwrap_or_else(|_| String::from("dev"));

        // FromStr never fails, always returns a valid Environment
        Ok(Environment::from_str(&s).unwrap())
    }
}
