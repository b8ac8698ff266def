use crate::domain::model::BillingRates;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<String>;
    fn write_file(&self, path: &str, data: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn capacity(&self) -> usize;
    fn rates(&self) -> BillingRates;
}
