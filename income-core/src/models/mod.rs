mod bracket;
mod card_asset;
mod income_inputs;
mod income_summary;

pub use bracket::{
    BracketId, BracketMapping, BracketMappingError, BracketRange, BracketResolution,
};
pub use card_asset::CardAsset;
pub use income_inputs::{IncomeField, IncomeInputError, IncomeInputs};
pub use income_summary::IncomeSummary;
