use std::{env::var, path::PathBuf};

use dotenvy::dotenv;

use crate::domain::models::{
    EndpointPolicy,
    endpoint::{PROMOTIONAL_URL, TRANSACTIONAL_URL},
};

pub const DEFAULT_DATA_DIR: &str = "/data";

pub struct Config {
    pub data_dir: PathBuf,
    pub endpoints: EndpointPolicy,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();
        Self::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, &'static str> {
        let data_dir = lookup("KBC_DATADIR").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());

        let endpoints = match lookup("BULKGATE_ENDPOINT") {
            Some(url) if url.trim().is_empty() => {
                return Err("BULKGATE_ENDPOINT env param is empty");
            }
            Some(url) => EndpointPolicy::Fixed(url),
            None => EndpointPolicy::ByMessageType {
                promotional: lookup("BULKGATE_PROMOTIONAL_URL")
                    .unwrap_or_else(|| PROMOTIONAL_URL.to_string()),
                transactional: lookup("BULKGATE_TRANSACTIONAL_URL")
                    .unwrap_or_else(|| TRANSACTIONAL_URL.to_string()),
            },
        };

        Ok(Config {
            data_dir: PathBuf::from(data_dir),
            endpoints,
        })
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.json")
    }

    pub fn input_tables_dir(&self) -> PathBuf {
        self.data_dir.join("in").join("tables")
    }

    pub fn output_tables_dir(&self) -> PathBuf {
        self.data_dir.join("out").join("tables")
    }
}
