//! Form input → summary → bracket → store lookup, without any UI.

use std::path::PathBuf;
use std::sync::Mutex;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use income_core::assets::{AssetFile, CardDir};
use income_core::calculations::{BracketResolver, IncomeCalculator};
use income_core::{
    BracketId, BracketMapping, BracketResolution, CardCatalog, CardListing, CardStore,
    IncomeInputs, Session, StoreError,
};

/// Store that records every bracket it is asked to list.
#[derive(Default)]
struct SpyStore {
    listed: Mutex<Vec<BracketId>>,
}

impl CardStore for SpyStore {
    fn list_card_dirs(
        &self,
        bracket: BracketId,
    ) -> Result<Vec<CardDir>, StoreError> {
        self.listed.lock().unwrap().push(bracket);
        Ok(vec![CardDir {
            id: "everyday".to_string(),
            path: PathBuf::from(bracket.as_str()).join("everyday"),
        }])
    }

    fn read_asset(
        &self,
        _card: &CardDir,
        file: AssetFile,
    ) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(match file {
            AssetFile::Thumbnail => Some(vec![0x89, b'P', b'N', b'G']),
            AssetFile::Name => Some(b"Everyday Card\n".to_vec()),
            AssetFile::Details => Some(b"No annual fee.".to_vec()),
            AssetFile::CoverImage => None,
        })
    }
}

#[test]
fn gross_three_thousand_queries_middle_bracket() {
    let inputs = IncomeInputs {
        gross_income: dec!(3000),
        ..Default::default()
    };
    assert_eq!(inputs.validate(), Ok(()));

    let summary = IncomeCalculator::calculate(&inputs).unwrap();
    assert_eq!(summary.total_income, dec!(3000));
    assert_eq!(summary.total_deductions, dec!(0));
    assert_eq!(summary.net_income, dec!(3000));

    let mapping = BracketMapping::default();
    assert_eq!(
        BracketResolver::new(&mapping).resolve(summary.net_income),
        BracketResolution::Bracket(BracketId::From3000To4900)
    );

    let mut session = Session::new();
    session.show_results(summary, ());

    let store = SpyStore::default();
    let net_income = session.net_income().unwrap();
    let listing = CardCatalog::new(&mapping, &store).listing(net_income);

    assert_eq!(
        *store.listed.lock().unwrap(),
        vec![BracketId::From3000To4900]
    );
    match listing {
        CardListing::Cards { heading, cards, .. } => {
            assert_eq!(heading, "Cards for Income Range: 3000 - 4900 MYR");
            assert_eq!(cards.len(), 1);
            assert_eq!(cards[0].name, "Everyday Card");
            assert_eq!(cards[0].details.as_deref(), Some("No annual fee."));
            assert!(cards[0].cover_image.is_none());
        }
        other => panic!("expected cards, got {other:#?}"),
    }

    session.back_to_form();
    assert_eq!(session.net_income(), None);
}

#[test]
fn deductions_can_push_income_below_eligibility() {
    let inputs = IncomeInputs {
        gross_income: dec!(2400),
        epf: dec!(264),
        socso: dec!(11.75),
        monthly_deductions: dec!(150),
        ..Default::default()
    };

    let summary = IncomeCalculator::calculate(&inputs).unwrap();
    assert_eq!(summary.net_income, dec!(1974.25));

    let mapping = BracketMapping::default();
    let store = SpyStore::default();

    assert_eq!(
        CardCatalog::new(&mapping, &store).listing(summary.net_income),
        CardListing::Ineligible {
            net_income: dec!(1974.25)
        }
    );
    assert!(store.listed.lock().unwrap().is_empty());
}
