pub mod down_payment;
pub mod ltv;

pub use down_payment::DownPaymentValidator;
pub use ltv::PropertyOwnership;
