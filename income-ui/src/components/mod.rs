pub mod calculator;
pub mod card_results;
pub mod income_form;

use gpui::{App, Div, SharedString, Window};
use gpui::{ClickEvent, ParentElement, Styled, TextAlign, div};
use gpui::{Pixels, Size, px};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{Sizable, h_flex};

pub use calculator::CalculatorView;
pub use income_form::IncomeForm;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self {
            size: Size {
                width: px(720.0),
                height: px(900.0),
            },
        }
    }
}

/// Creates a primary-styled button with a custom click handler.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .primary()
        .large()
        .w(px(220.))
        .label(label.into())
        .on_click(on_click)
}

/// Right-aligned label column shared by input and total rows.
fn make_labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex().items_center().gap_5().p(px(2.)).child(
        div()
            .min_w(px(320.))
            .text_align(TextAlign::Right)
            .child(label.into()),
    )
}

/// A label followed by a bold MYR amount.
fn make_amount_row(
    label: impl Into<SharedString>,
    amount: impl Into<SharedString>,
) -> Div {
    make_labeled_row(label).child(
        div()
            .font_weight(gpui::FontWeight::BOLD)
            .child(amount.into()),
    )
}
