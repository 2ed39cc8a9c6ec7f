use std::time::Duration;

use clap::Parser;

use super::HoraireOperation;
use crate::horaire::{ApiConfig, HoraireError};

/// command line client for the Grenoble Métromobilité realtime transit API
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct HoraireApp {
    #[command(subcommand)]
    pub op: HoraireOperation,
    /// API root, without a trailing slash
    #[arg(long, default_value_t = String::from("https://data.mobilites-m.fr/api"))]
    pub base_url: String,
    /// agency prefix applied to bare route/stop ids
    #[arg(long, default_value_t = String::from("SEM:"))]
    pub id_prefix: String,
    /// origin header sent with every request
    #[arg(long, default_value_t = String::from("mtag"))]
    pub origin: String,
    #[arg(long, default_value_t = 10)]
    pub timeout_seconds: u64,
}

impl HoraireApp {
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.clone(),
            id_prefix: self.id_prefix.clone(),
            origin: self.origin.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }

    pub fn run(&self) -> Result<(), HoraireError> {
        self.op.run(&self.api_config())
    }
}
