pub mod cli;
pub mod toml_config;

use crate::core::registry::DEFAULT_CAPACITY;
use crate::core::ConfigProvider;
use crate::domain::model::BillingRates;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "marina-inventory")]
#[command(about = "A boat inventory manager for a small marina")]
pub struct CliConfig {
    #[arg(help = "CSV file holding the boat inventory")]
    pub data_file: String,

    #[arg(long, help = "Maximum number of boats kept in the inventory")]
    pub max_boats: Option<usize>,

    #[arg(short, long, help = "TOML config file with capacity and billing rates")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn capacity(&self) -> usize {
        self.max_boats.unwrap_or(DEFAULT_CAPACITY)
    }

    fn rates(&self) -> BillingRates {
        BillingRates::default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_path("data_file", &self.data_file)?;

        if let Some(max_boats) = self.max_boats {
            crate::utils::validation::validate_positive_number("max_boats", max_boats, 1)?;
        }

        Ok(())
    }
}
