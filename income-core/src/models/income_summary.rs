use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals derived from [`crate::IncomeInputs`]. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeSummary {
    pub total_income: Decimal,
    pub total_deductions: Decimal,
    /// May be negative when deductions exceed income.
    pub net_income: Decimal,
}

impl fmt::Display for IncomeSummary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Total income:     {:.2}", self.total_income)?;
        writeln!(f, "Total deductions: {:.2}", self.total_deductions)?;
        write!(f, "Net income:       {:.2}", self.net_income)
    }
}
