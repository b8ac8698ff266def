pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::persistence::LoadSummary;
pub use core::registry::Registry;
pub use domain::model::{BillingRates, Boat, Placement};
pub use domain::ports::{ConfigProvider, Storage};
pub use utils::error::{MarinaError, Result};
