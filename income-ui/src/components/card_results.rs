//! Drawing a [`CardListing`] in the results view.

use std::sync::Arc;

use gpui::{
    App, ClickEvent, Div, FontWeight, Image, ImageFormat, ParentElement, SharedString, Styled,
    Window, div, img, px,
};
use gpui_component::button::Button;
use gpui_component::v_flex;
use income_core::calculations::common::format_myr;
use income_core::{CardAsset, CardListing};

pub const THUMBNAIL_WIDTH: f32 = 300.0;

pub const INELIGIBLE_MESSAGE: &str =
    "Net income is below the minimum range for the available cards.";
pub const NO_CARDS_MESSAGE: &str = "No cards found for this income range.";

/// One card with its images decoded for drawing.
pub struct CardView {
    pub id: String,
    pub name: SharedString,
    pub details: Option<SharedString>,
    thumbnail: Arc<Image>,
    cover_image: Option<Arc<Image>>,
}

impl CardView {
    pub fn new(asset: CardAsset) -> Self {
        Self {
            thumbnail: png(asset.thumbnail),
            cover_image: asset.cover_image.map(png),
            name: asset.name.into(),
            details: asset.details.map(Into::into),
            id: asset.id,
        }
    }

    pub fn has_details(&self) -> bool {
        self.cover_image.is_some() || self.details.is_some()
    }
}

fn png(bytes: Vec<u8>) -> Arc<Image> {
    Arc::new(Image::from_bytes(ImageFormat::Png, bytes))
}

/// What the results view shows below the summary.
pub enum ResultsContent {
    Message(SharedString),
    Cards {
        heading: SharedString,
        cards: Vec<CardView>,
    },
}

impl ResultsContent {
    /// The informational text, when there are no cards to show.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(&**message),
            Self::Cards { .. } => None,
        }
    }
}

impl From<CardListing> for ResultsContent {
    fn from(listing: CardListing) -> Self {
        let message = match listing {
            CardListing::Cards { heading, cards, .. } => {
                return ResultsContent::Cards {
                    heading: heading.into(),
                    cards: cards.into_iter().map(CardView::new).collect(),
                };
            }
            CardListing::Ineligible { .. } => INELIGIBLE_MESSAGE.to_string(),
            CardListing::Unmatched { net_income } => format!(
                "No card range covers a net income of {} MYR.",
                format_myr(net_income)
            ),
            CardListing::NoCardsFound { .. } => NO_CARDS_MESSAGE.to_string(),
        };
        ResultsContent::Message(message.into())
    }
}

/// Thumbnail, bold name and a details toggle; cover image and details
/// text appear below when `expanded`.
pub fn render_card(
    card: &CardView,
    expanded: bool,
    on_toggle: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Div {
    let mut column = v_flex()
        .items_center()
        .gap_2()
        .mb_5()
        .child(img(card.thumbnail.clone()).w(px(THUMBNAIL_WIDTH)))
        .child(
            div()
                .text_lg()
                .font_weight(FontWeight::BOLD)
                .child(card.name.clone()),
        );

    if !card.has_details() {
        return column;
    }

    let label = if expanded {
        format!("Hide Details for {}", card.name)
    } else {
        format!("View Details for {}", card.name)
    };
    column = column.child(
        Button::new(SharedString::from(format!("details-{}", card.id)))
            .label(label)
            .on_click(on_toggle),
    );

    if expanded {
        if let Some(cover) = &card.cover_image {
            column = column
                .child(img(cover.clone()).w(px(THUMBNAIL_WIDTH * 2.0)))
                .child(div().text_sm().child("Card Cover Image"));
        }
        if let Some(details) = &card.details {
            column = column.child(div().max_w(px(THUMBNAIL_WIDTH * 2.0)).child(details.clone()));
        }
    }
    column
}

#[cfg(test)]
mod tests {
    use income_core::BracketId;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn informational_outcomes_have_fixed_messages() {
        let ineligible = ResultsContent::from(CardListing::Ineligible {
            net_income: dec!(1999.99),
        });
        let empty = ResultsContent::from(CardListing::NoCardsFound {
            bracket: BracketId::From5000Up,
        });

        assert_eq!(ineligible.message(), Some(INELIGIBLE_MESSAGE));
        assert_eq!(empty.message(), Some(NO_CARDS_MESSAGE));
    }

    #[test]
    fn gap_message_names_the_income() {
        let content = ResultsContent::from(CardListing::Unmatched {
            net_income: dec!(2950.5),
        });

        assert_eq!(
            content.message(),
            Some("No card range covers a net income of 2950.50 MYR.")
        );
    }

    #[test]
    fn cards_carry_no_message() {
        let content = ResultsContent::from(CardListing::Cards {
            bracket: BracketId::From3000To4900,
            heading: "Cards for Income Range: 3000 - 4900 MYR".to_string(),
            cards: Vec::new(),
        });

        assert_eq!(content.message(), None);
    }

    #[test]
    fn details_toggle_only_when_there_is_something_to_show() {
        let bare = CardView::new(CardAsset {
            id: "basic".to_string(),
            name: "Basic".to_string(),
            thumbnail: vec![1, 2, 3],
            cover_image: None,
            details: None,
        });
        let rich = CardView::new(CardAsset {
            id: "rich".to_string(),
            name: "Rich".to_string(),
            thumbnail: vec![1, 2, 3],
            cover_image: None,
            details: Some("Cashback on groceries.".to_string()),
        });

        assert!(!bare.has_details());
        assert!(rich.has_details());
        assert_eq!(
            rich.details.as_ref().map(ToString::to_string),
            Some("Cashback on groceries.".to_string())
        );
    }
}
