//! Exercises the filesystem store and catalog against real directories.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use income_assets_fs::{FsCardStore, FsCardStoreFactory};
use income_core::assets::{AssetFile, StoreConfig, StoreRegistry};
use income_core::{BracketId, BracketMapping, CardCatalog, CardListing, CardStore, StoreError};

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

fn write_card(
    root: &Path,
    bracket: &str,
    card: &str,
    files: &[(AssetFile, &[u8])],
) {
    let dir = root.join(bracket).join(card);
    fs::create_dir_all(&dir).expect("create card dir");
    for (file, contents) in files {
        fs::write(dir.join(file.file_name()), contents).expect("write asset");
    }
}

fn store_at(root: &Path) -> FsCardStore {
    FsCardStore::new(StoreConfig {
        root: root.to_path_buf(),
        ..StoreConfig::default()
    })
    .expect("open store")
}

#[test]
fn lists_card_directories_sorted_and_ignores_files() {
    let temp = TempDir::new().unwrap();
    write_card(temp.path(), "3000-4900", "zeta", &[]);
    write_card(temp.path(), "3000-4900", "alpha", &[]);
    fs::write(temp.path().join("3000-4900").join("README.txt"), "notes").unwrap();

    let dirs = store_at(temp.path())
        .list_card_dirs(BracketId::From3000To4900)
        .unwrap();

    let ids: Vec<_> = dirs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["alpha", "zeta"]);
}

#[test]
fn missing_bracket_directory_is_not_found() {
    let temp = TempDir::new().unwrap();

    let result = store_at(temp.path()).list_card_dirs(BracketId::From5000Up);

    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[test]
fn read_asset_returns_none_for_missing_file() {
    let temp = TempDir::new().unwrap();
    write_card(
        temp.path(),
        "2000-2900",
        "classic",
        &[(AssetFile::Name, b"Classic")],
    );
    let store = store_at(temp.path());
    let dir = &store.list_card_dirs(BracketId::From2000To2900).unwrap()[0];

    assert_eq!(
        store.read_asset(dir, AssetFile::Name).unwrap(),
        Some(b"Classic".to_vec())
    );
    assert_eq!(store.read_asset(dir, AssetFile::CoverImage).unwrap(), None);
}

#[test]
fn load_cards_reads_full_and_partial_cards() {
    let temp = TempDir::new().unwrap();
    write_card(
        temp.path(),
        "5000+",
        "infinite",
        &[
            (AssetFile::Thumbnail, PNG_MAGIC),
            (AssetFile::Name, b"Visa Infinite\n"),
            (AssetFile::CoverImage, PNG_MAGIC),
            (AssetFile::Details, b"Unlimited lounge access."),
        ],
    );
    write_card(
        temp.path(),
        "5000+",
        "platinum",
        &[
            (AssetFile::Thumbnail, PNG_MAGIC),
            (AssetFile::Name, b"Platinum"),
        ],
    );
    write_card(
        temp.path(),
        "5000+",
        "unnamed",
        &[(AssetFile::Thumbnail, PNG_MAGIC)],
    );

    let cards = store_at(temp.path())
        .load_cards(BracketId::From5000Up)
        .unwrap();

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].name, "Visa Infinite");
    assert_eq!(cards[0].thumbnail, PNG_MAGIC.to_vec());
    assert_eq!(cards[0].cover_image.as_deref(), Some(PNG_MAGIC));
    assert_eq!(
        cards[0].details.as_deref(),
        Some("Unlimited lounge access.")
    );
    assert_eq!(cards[1].name, "Platinum");
    assert_eq!(cards[1].cover_image, None);
    assert_eq!(cards[1].details, None);
}

#[test]
fn configured_path_override_is_used() {
    let temp = TempDir::new().unwrap();
    write_card(
        temp.path(),
        "premium",
        "signature",
        &[
            (AssetFile::Thumbnail, PNG_MAGIC),
            (AssetFile::Name, b"Signature"),
        ],
    );
    let mut config = StoreConfig {
        root: temp.path().to_path_buf(),
        ..StoreConfig::default()
    };
    config
        .paths
        .insert(BracketId::From5000Up, "premium".into());

    let store = FsCardStore::new(config).unwrap();
    let cards = store.load_cards(BracketId::From5000Up).unwrap();

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id, "signature");
}

#[test]
fn registry_creates_fs_store() {
    let temp = TempDir::new().unwrap();
    let mut registry = StoreRegistry::new();
    registry.register(Box::new(FsCardStoreFactory));

    let config = StoreConfig {
        root: temp.path().to_path_buf(),
        ..StoreConfig::default()
    };

    assert!(registry.create(&config).is_ok());
}

#[test]
fn registry_surfaces_missing_root() {
    let temp = TempDir::new().unwrap();
    let mut registry = StoreRegistry::new();
    registry.register(Box::new(FsCardStoreFactory));

    let config = StoreConfig {
        root: temp.path().join("missing"),
        ..StoreConfig::default()
    };

    assert!(matches!(
        registry.create(&config),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn catalog_over_fs_store_covers_every_outcome() {
    let temp = TempDir::new().unwrap();
    write_card(
        temp.path(),
        "3000-4900",
        "gold",
        &[
            (AssetFile::Thumbnail, PNG_MAGIC),
            (AssetFile::Name, b"Gold"),
        ],
    );
    fs::create_dir_all(temp.path().join("5000+")).unwrap();

    let mapping = BracketMapping::default();
    let store = store_at(temp.path());
    let catalog = CardCatalog::new(&mapping, &store);

    assert_eq!(
        catalog.listing(dec!(1500)),
        CardListing::Ineligible {
            net_income: dec!(1500)
        }
    );
    assert_eq!(
        catalog.listing(dec!(2950)),
        CardListing::Unmatched {
            net_income: dec!(2950)
        }
    );
    assert_eq!(
        catalog.listing(dec!(2500)),
        CardListing::NoCardsFound {
            bracket: BracketId::From2000To2900
        }
    );
    assert_eq!(
        catalog.listing(dec!(8000)),
        CardListing::NoCardsFound {
            bracket: BracketId::From5000Up
        }
    );
    assert!(matches!(
        catalog.listing(dec!(3000)),
        CardListing::Cards { bracket: BracketId::From3000To4900, cards, .. } if cards.len() == 1
    ));
}

#[test]
fn unreadable_files_only_affect_their_own_card() {
    let temp = TempDir::new().unwrap();
    write_card(
        temp.path(),
        "3000-4900",
        "bad-details",
        &[
            (AssetFile::Thumbnail, PNG_MAGIC),
            (AssetFile::Name, b"Broken Details"),
        ],
    );
    fs::create_dir(
        temp.path()
            .join("3000-4900")
            .join("bad-details")
            .join(AssetFile::Details.file_name()),
    )
    .unwrap();
    write_card(
        temp.path(),
        "3000-4900",
        "bad-image",
        &[(AssetFile::Name, b"Broken Image")],
    );
    fs::create_dir(
        temp.path()
            .join("3000-4900")
            .join("bad-image")
            .join(AssetFile::Thumbnail.file_name()),
    )
    .unwrap();
    write_card(
        temp.path(),
        "3000-4900",
        "good",
        &[
            (AssetFile::Thumbnail, PNG_MAGIC),
            (AssetFile::Name, b"Good Card"),
        ],
    );
    let store = store_at(temp.path());
    let mapping = BracketMapping::default();

    match CardCatalog::new(&mapping, &store).listing(dec!(3500)) {
        CardListing::Cards { cards, .. } => {
            let names: Vec<_> = cards.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names, vec!["Broken Details", "Good Card"]);
            assert_eq!(cards[0].details, None);
        }
        other => panic!("expected cards, got {other:?}"),
    }
}
