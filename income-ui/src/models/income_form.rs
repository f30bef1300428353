use std::fmt;

use income_core::calculations::{IncomeCalculationError, IncomeCalculator};
use income_core::calculations::common::format_myr;
use income_core::{IncomeField, IncomeInputs, IncomeSummary};

use crate::utils::parse_decimal;

/// Values collected from the calculator form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IncomeFormModel {
    pub inputs: IncomeInputs,
}

impl IncomeFormModel {
    /// Parses the raw text of each field.
    ///
    /// Fields not present in `raw` stay at zero. Every unparseable field is
    /// reported, not just the first.
    pub fn from_raw<I, S>(raw: I) -> Result<Self, Vec<String>>
    where
        I: IntoIterator<Item = (IncomeField, S)>,
        S: AsRef<str>,
    {
        let mut inputs = IncomeInputs::default();
        let mut errors = Vec::new();

        for (field, text) in raw {
            match parse_decimal(text.as_ref()) {
                Ok(value) => inputs.set(field, value),
                Err(e) => errors.push(format!("{}: {e}", field.label())),
            }
        }

        if errors.is_empty() {
            Ok(Self { inputs })
        } else {
            Err(errors)
        }
    }

    /// Checks the model can be turned into card results.
    ///
    /// Rules:
    /// - every amount must be zero or positive
    /// - the totals must be representable
    pub fn validate_for_submit(&self) -> Result<(), Vec<String>> {
        self.inputs
            .validate()
            .map_err(|errors| errors.iter().map(ToString::to_string).collect::<Vec<_>>())?;
        self.summary().map(|_| ()).map_err(|e| vec![e.to_string()])
    }

    pub fn summary(&self) -> Result<IncomeSummary, IncomeCalculationError> {
        IncomeCalculator::calculate(&self.inputs)
    }
}

impl fmt::Display for IncomeFormModel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (i, field) in IncomeField::all().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:<46} {}",
                format!("{}:", field.label()),
                format_myr(self.inputs.get(*field))
            )?;
        }
        Ok(())
    }
}
