//! Turns a net income into the list of cards to display.
//!
//! Every outcome is informational: an ineligible income, a gap between
//! ranges and a missing or empty asset directory each produce their own
//! [`CardListing`] variant instead of an error.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::assets::store::{CardStore, StoreError};
use crate::calculations::BracketResolver;
use crate::models::{BracketId, BracketMapping, BracketResolution, CardAsset};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardListing {
    /// Net income below the minimum eligibility threshold.
    Ineligible { net_income: Decimal },
    /// Eligible, but no range covers this income.
    Unmatched { net_income: Decimal },
    /// The bracket's asset directory is absent or holds no displayable card.
    NoCardsFound { bracket: BracketId },
    Cards {
        bracket: BracketId,
        heading: String,
        cards: Vec<CardAsset>,
    },
}

pub struct CardCatalog<'a> {
    mapping: &'a BracketMapping,
    store: &'a dyn CardStore,
}

impl<'a> CardCatalog<'a> {
    pub fn new(
        mapping: &'a BracketMapping,
        store: &'a dyn CardStore,
    ) -> Self {
        Self { mapping, store }
    }

    pub fn listing(
        &self,
        net_income: Decimal,
    ) -> CardListing {
        let bracket = match BracketResolver::new(self.mapping).resolve(net_income) {
            BracketResolution::Ineligible => return CardListing::Ineligible { net_income },
            BracketResolution::Unmatched => return CardListing::Unmatched { net_income },
            BracketResolution::Bracket(id) | BracketResolution::HighBracket(id) => id,
        };

        match self.store.load_cards(bracket) {
            Ok(cards) if cards.is_empty() => {
                debug!(%bracket, "bracket has no displayable cards");
                CardListing::NoCardsFound { bracket }
            }
            Ok(cards) => CardListing::Cards {
                bracket,
                heading: self.heading(bracket),
                cards,
            },
            Err(StoreError::NotFound(what)) => {
                debug!(%bracket, %what, "bracket asset directory not found");
                CardListing::NoCardsFound { bracket }
            }
            Err(error) => {
                warn!(%bracket, %error, "failed to load cards");
                CardListing::NoCardsFound { bracket }
            }
        }
    }

    /// `"Cards for Income Range: 2000 - 2900 MYR"`, or `"... 5000+ MYR"` for
    /// a bracket without an explicit range.
    pub fn heading(
        &self,
        bracket: BracketId,
    ) -> String {
        match self.mapping.range_for(bracket) {
            Some(range) => format!(
                "Cards for Income Range: {} - {} MYR",
                range.lower, range.upper
            ),
            None => format!(
                "Cards for Income Range: {}+ MYR",
                self.mapping.high_income_floor()
            ),
        }
    }
}
