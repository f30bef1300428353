//! Net income calculation for the card finder form.
//!
//! # Lines
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Gross income (basic salary + fixed allowance) |
//! | 2    | Other income |
//! | 3    | Total income (Line 1 + Line 2) |
//! | 4    | EPF contribution |
//! | 5    | SOCSO contribution |
//! | 6    | Monthly deductions |
//! | 7    | Other deductions (PTPTN, AEON CREDIT, COWAY, ...) |
//! | 8    | Total deductions (Line 4 + Line 5 + Line 6 + Line 7) |
//! | 9    | Net income (Line 3 - Line 8), may be negative |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use income_core::calculations::IncomeCalculator;
//! use income_core::IncomeInputs;
//!
//! let inputs = IncomeInputs {
//!     gross_income: dec!(4200.00),
//!     other_income: dec!(300.00),
//!     epf: dec!(462.00),
//!     socso: dec!(20.75),
//!     ..Default::default()
//! };
//!
//! let summary = IncomeCalculator::calculate(&inputs)?;
//!
//! assert_eq!(summary.total_income, dec!(4500.00));
//! assert_eq!(summary.total_deductions, dec!(482.75));
//! assert_eq!(summary.net_income, dec!(4017.25));
//! # Ok::<(), income_core::calculations::IncomeCalculationError>(())
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{IncomeInputs, IncomeSummary};

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum IncomeCalculationError {
    #[error("{0} is too large to calculate")]
    Overflow(&'static str),
}

/// Turns the entered figures into an [`IncomeSummary`].
pub struct IncomeCalculator;

impl IncomeCalculator {
    /// Sums income and deductions and subtracts them.
    ///
    /// Exact decimal arithmetic; nothing is rounded and a negative net income
    /// is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`IncomeCalculationError::Overflow`] naming the first line
    /// whose value falls outside the [`Decimal`] range.
    pub fn calculate(inputs: &IncomeInputs) -> Result<IncomeSummary, IncomeCalculationError> {
        let total_income = inputs
            .gross_income
            .checked_add(inputs.other_income)
            .ok_or(IncomeCalculationError::Overflow("total income"))?;

        let total_deductions = [
            inputs.epf,
            inputs.socso,
            inputs.monthly_deductions,
            inputs.other_deductions,
        ]
        .into_iter()
        .try_fold(Decimal::ZERO, Decimal::checked_add)
        .ok_or(IncomeCalculationError::Overflow("total deductions"))?;

        let net_income = total_income
            .checked_sub(total_deductions)
            .ok_or(IncomeCalculationError::Overflow("net income"))?;

        Ok(IncomeSummary {
            total_income,
            total_deductions,
            net_income,
        })
    }
}
