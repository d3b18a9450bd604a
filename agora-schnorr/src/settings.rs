//! Environment configuration for the command line tools.

use crate::curve::CurveName;
use crate::hasher::ChallengeEncoding;

use config::{Config, ConfigError};
use dotenv::dotenv;

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub curve: CurveName,
    #[serde(default)]
    pub challenge_encoding: ChallengeEncoding,
}

impl Settings {
    pub fn from_config(conf: Config) -> Result<Self, ConfigError> {
        conf.try_deserialize()
    }
}

/// Reads `SCHNORR_CURVE` and `SCHNORR_CHALLENGE_ENCODING`, also from a
/// `.env` file if there is one.
pub fn get_settings() -> Result<Settings, ConfigError> {
    // a missing .env file is fine
    dotenv().ok();

    let conf = Config::builder()
        .add_source(config::Environment::with_prefix("SCHNORR"))
        .build()?;
    Settings::from_config(conf)
}
