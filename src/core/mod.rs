pub mod billing;
pub mod codec;
pub mod persistence;
pub mod registry;

pub use crate::domain::model::{BillingRates, Boat, Placement};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
