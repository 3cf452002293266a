use std::fs::File;

use anyhow::{Context, Result};
use api::ApiConfig;
use app::AppConfig;
use log::LogConfig;
use search::SearchConfig;
use serde::Deserialize;
use site::SiteConfig;

pub mod api;
pub mod app;
pub mod log;
pub mod search;
pub mod site;

#[derive(Deserialize)]
pub struct Config {
    app: AppConfig,
    log: LogConfig,
    api: ApiConfig,
    site: SiteConfig,
    #[serde(default)]
    search: SearchConfig,
}

impl Config {
    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn search(&self) -> &SearchConfig {
        &self.search
    }
}

pub fn from_path(path: &str) -> Result<Config> {
    let file = File::open(path).with_context(|| format!("Failed to open config file '{path}'"))?;
    serde_yaml::from_reader::<_, Config>(file)
        .with_context(|| format!("Failed to parse config file '{path}'"))
}

pub fn from_str(yaml: &str) -> Result<Config> {
    Ok(serde_yaml::from_str::<Config>(yaml)?)
}
