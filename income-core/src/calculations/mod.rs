//! Income calculations.
//!
//! The form's arithmetic lives in [`income`]; mapping the resulting net
//! income to a card bracket lives in [`bracket`].

pub mod bracket;
pub mod common;
pub mod income;

pub use bracket::BracketResolver;
pub use income::{IncomeCalculationError, IncomeCalculator};
