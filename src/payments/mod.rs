//! payment calculators built on the shared annuity math
//!
//! rounding direction is a product rule, not a style choice: mortgage
//! payments and payoff periods truncate toward the borrower, credit
//! payments round up toward the lender.

pub mod annuity;
pub mod credit;
pub mod mortgage;
pub mod refinance;
