use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the six numeric fields on the income form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeField {
    GrossIncome,
    OtherIncome,
    Epf,
    Socso,
    MonthlyDeductions,
    OtherDeductions,
}

impl IncomeField {
    /// All fields in form order: income first, then deductions.
    pub fn all() -> &'static [IncomeField] {
        &[
            IncomeField::GrossIncome,
            IncomeField::OtherIncome,
            IncomeField::Epf,
            IncomeField::Socso,
            IncomeField::MonthlyDeductions,
            IncomeField::OtherDeductions,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            IncomeField::GrossIncome => "Gross Income (Basic Salary + Fixed Allowance)",
            IncomeField::OtherIncome => "Other Income",
            IncomeField::Epf => "EPF",
            IncomeField::Socso => "SOCSO",
            IncomeField::MonthlyDeductions => "Monthly Deductions",
            IncomeField::OtherDeductions => "Others (e.g., PTPTN, AEON CREDIT, COWAY)",
        }
    }

    /// `true` for the fields summed into total deductions.
    pub fn is_deduction(&self) -> bool {
        !matches!(self, IncomeField::GrossIncome | IncomeField::OtherIncome)
    }
}

/// Rejected form input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IncomeInputError {
    #[error("{} must not be negative (got {value})", .field.label())]
    Negative { field: IncomeField, value: Decimal },
}

/// Raw figures entered on the form, in MYR.
///
/// Unset fields are zero. Values are recreated on every interaction and never
/// stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeInputs {
    pub gross_income: Decimal,
    pub other_income: Decimal,
    pub epf: Decimal,
    pub socso: Decimal,
    pub monthly_deductions: Decimal,
    pub other_deductions: Decimal,
}

impl IncomeInputs {
    pub fn get(
        &self,
        field: IncomeField,
    ) -> Decimal {
        match field {
            IncomeField::GrossIncome => self.gross_income,
            IncomeField::OtherIncome => self.other_income,
            IncomeField::Epf => self.epf,
            IncomeField::Socso => self.socso,
            IncomeField::MonthlyDeductions => self.monthly_deductions,
            IncomeField::OtherDeductions => self.other_deductions,
        }
    }

    pub fn set(
        &mut self,
        field: IncomeField,
        value: Decimal,
    ) {
        let slot = match field {
            IncomeField::GrossIncome => &mut self.gross_income,
            IncomeField::OtherIncome => &mut self.other_income,
            IncomeField::Epf => &mut self.epf,
            IncomeField::Socso => &mut self.socso,
            IncomeField::MonthlyDeductions => &mut self.monthly_deductions,
            IncomeField::OtherDeductions => &mut self.other_deductions,
        };
        *slot = value;
    }

    /// Checks the only rule the form enforces: every figure is non-negative.
    ///
    /// Returns one error per offending field, in form order.
    pub fn validate(&self) -> Result<(), Vec<IncomeInputError>> {
        let errors: Vec<_> = IncomeField::all()
            .iter()
            .filter_map(|&field| {
                let value = self.get(field);
                (value < Decimal::ZERO).then_some(IncomeInputError::Negative { field, value })
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_inputs_are_all_zero() {
        let inputs = IncomeInputs::default();

        for &field in IncomeField::all() {
            assert_eq!(inputs.get(field), Decimal::ZERO);
        }
    }

    #[test]
    fn set_then_get_addresses_the_same_field() {
        let mut inputs = IncomeInputs::default();
        inputs.set(IncomeField::Socso, dec!(24.75));

        assert_eq!(inputs.socso, dec!(24.75));
        assert_eq!(inputs.get(IncomeField::Socso), dec!(24.75));
        assert_eq!(inputs.get(IncomeField::Epf), Decimal::ZERO);
    }

    #[test]
    fn only_income_fields_are_not_deductions() {
        let deductions: Vec<_> = IncomeField::all()
            .iter()
            .filter(|f| f.is_deduction())
            .copied()
            .collect();

        assert_eq!(
            deductions,
            vec![
                IncomeField::Epf,
                IncomeField::Socso,
                IncomeField::MonthlyDeductions,
                IncomeField::OtherDeductions,
            ]
        );
    }

    #[test]
    fn validate_accepts_zero_and_positive_values() {
        let inputs = IncomeInputs {
            gross_income: dec!(3500.00),
            epf: dec!(385.00),
            ..Default::default()
        };

        assert_eq!(inputs.validate(), Ok(()));
    }

    #[test]
    fn validate_accepts_negative_zero() {
        let inputs = IncomeInputs {
            other_income: -dec!(0.00),
            ..Default::default()
        };

        assert_eq!(inputs.validate(), Ok(()));
    }

    #[test]
    fn validate_reports_every_negative_field_in_form_order() {
        let inputs = IncomeInputs {
            gross_income: dec!(3000),
            other_deductions: dec!(-10),
            epf: dec!(-1.50),
            ..Default::default()
        };

        assert_eq!(
            inputs.validate(),
            Err(vec![
                IncomeInputError::Negative {
                    field: IncomeField::Epf,
                    value: dec!(-1.50),
                },
                IncomeInputError::Negative {
                    field: IncomeField::OtherDeductions,
                    value: dec!(-10),
                },
            ])
        );
    }

    #[test]
    fn negative_error_message_names_the_field() {
        let error = IncomeInputError::Negative {
            field: IncomeField::Epf,
            value: dec!(-5),
        };

        assert_eq!(error.to_string(), "EPF must not be negative (got -5)");
    }
}
