//! Maps a net income to the bracket whose cards should be shown.
//!
//! Resolution order:
//!
//! 1. Below [`BracketMapping::minimum_income`] → [`BracketResolution::Ineligible`].
//! 2. First explicit range (in mapping order) containing the value →
//!    [`BracketResolution::Bracket`].
//! 3. At or above [`BracketMapping::high_income_floor`] →
//!    [`BracketResolution::HighBracket`].
//! 4. Anything left falls between ranges → [`BracketResolution::Unmatched`].
//!
//! Gaps between ranges are kept as they are; a value such as 2950 in the
//! default mapping is not pulled into a neighbouring bracket.

use rust_decimal::Decimal;
use tracing::debug;

use crate::{BracketMapping, BracketResolution};

pub struct BracketResolver<'a> {
    mapping: &'a BracketMapping,
}

impl<'a> BracketResolver<'a> {
    pub fn new(mapping: &'a BracketMapping) -> Self {
        Self { mapping }
    }

    pub fn resolve(
        &self,
        net_income: Decimal,
    ) -> BracketResolution {
        let resolution = if net_income < self.mapping.minimum_income() {
            BracketResolution::Ineligible
        } else if let Some(range) = self
            .mapping
            .ranges()
            .iter()
            .find(|range| range.contains(net_income))
        {
            BracketResolution::Bracket(range.bracket)
        } else if net_income >= self.mapping.high_income_floor() {
            BracketResolution::HighBracket(self.mapping.high_bracket())
        } else {
            BracketResolution::Unmatched
        };

        debug!(%net_income, ?resolution, "resolved income bracket");
        resolution
    }
}
