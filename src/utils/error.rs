use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarinaError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed boat record: {message}")]
    ParseError { message: String },

    #[error("Registry is full: capacity of {capacity} boats reached")]
    CapacityError { capacity: usize },

    #[error("No boat named '{name}'")]
    NotFoundError { name: String },

    #[error("A boat named '{name}' is already registered")]
    DuplicateNameError { name: String },

    #[error("Payment of ${amount:.2} is more than the amount owed, ${owed:.2}")]
    PaymentExceedsBalanceError { amount: f64, owed: f64 },

    #[error("Payment amount must be positive, got ${amount:.2}")]
    InvalidPaymentError { amount: f64 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, MarinaError>;
