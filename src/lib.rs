pub mod collateral;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod payments;
pub mod types;

// re-export key types
pub use collateral::{DownPaymentValidator, PropertyOwnership};
pub use config::ProductRates;
pub use decimal::{Money, Rate};
pub use errors::{EngineError, Result};
pub use payments::{annuity, credit, mortgage, refinance};
pub use types::LoanParameters;

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
