use config::{Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::errors::AccountsError;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Version {
    pub ref_name: Option<String>,
    pub commit_hash: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub accounts_path: String,
    #[serde(default)]
    pub version: Version,
}

impl Config {
    pub fn get() -> Result<Config, AccountsError> {
        let mut config = config::Config::builder()
            .add_source(File::new("./configuration/base.yaml", FileFormat::Yaml));

        config = match std::env::var("CONFIG_FILE") {
            Ok(config_path) => config.add_source(File::new(&config_path, FileFormat::Yaml)),
            Err(_) => config,
        };

        config = config.add_source(Environment::default().separator("__"));
        Ok(config.build()?.try_deserialize()?)
    }
}
