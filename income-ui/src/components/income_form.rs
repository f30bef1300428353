use gpui::{
    App, AppContext, Context, Div, Entity, FontWeight, IntoElement, ParentElement, Render,
    SharedString, Styled, Subscription, Window, div,
};
use gpui_component::{
    input::{Input, InputEvent, InputState, MaskPattern},
    v_flex,
};
use income_core::calculations::{IncomeCalculationError, IncomeCalculator};
use income_core::calculations::common::format_myr;
use income_core::{IncomeField, IncomeInputs, IncomeSummary};
use rust_decimal::Decimal;

use super::{make_amount_row, make_labeled_row};
use crate::{models::IncomeFormModel, utils::parse_decimal_or_zero};

/// The six amount inputs plus running totals.
pub struct IncomeForm {
    inputs: Vec<(IncomeField, Entity<InputState>)>,
    _subscriptions: Vec<Subscription>,
}

impl IncomeForm {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let inputs: Vec<_> = IncomeField::all()
            .iter()
            .map(|&field| (field, make_amount_input("0.00", window, cx)))
            .collect();

        // Totals are recomputed on every render, so any edit just re-renders.
        let subscriptions = inputs
            .iter()
            .map(|(_, state)| cx.subscribe(state, |_, _, _: &InputEvent, cx| cx.notify()))
            .collect();

        Self {
            inputs,
            _subscriptions: subscriptions,
        }
    }

    /// Collects the current form values into an [`IncomeFormModel`].
    pub fn to_model(
        &self,
        cx: &App,
    ) -> Result<IncomeFormModel, Vec<String>> {
        IncomeFormModel::from_raw(
            self.inputs
                .iter()
                .map(|(field, state)| (*field, state.read(cx).value())),
        )
    }

    /// Totals for the values typed so far, counting unparseable text as 0.
    fn live_summary(
        &self,
        cx: &App,
    ) -> Result<IncomeSummary, IncomeCalculationError> {
        let mut inputs = IncomeInputs::default();
        for (field, state) in &self.inputs {
            inputs.set(*field, parse_decimal_or_zero(state.read(cx).value().as_str()));
        }
        IncomeCalculator::calculate(&inputs)
    }

    fn rows(
        &self,
        deductions: bool,
    ) -> Vec<Div> {
        self.inputs
            .iter()
            .filter(|(field, _)| field.is_deduction() == deductions)
            .map(|(field, state)| make_input_row(state, format!("{}:", field.label())))
            .collect()
    }
}

impl Render for IncomeForm {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let summary = self.live_summary(cx);
        let total = |line: fn(&IncomeSummary) -> Decimal| match &summary {
            Ok(summary) => format_myr(line(summary)),
            Err(error) => error.to_string(),
        };

        v_flex()
            .gap_2()
            .w_full()
            .child(section_heading("Income Details"))
            .children(self.rows(false))
            .child(make_amount_row(
                "Total Income (MYR):",
                total(|s| s.total_income),
            ))
            .child(section_heading("Deductions"))
            .children(self.rows(true))
            .child(make_amount_row(
                "Total Deductions (MYR):",
                total(|s| s.total_deductions),
            ))
            .child(make_amount_row(
                "Net Income (MYR):",
                total(|s| s.net_income),
            ))
    }
}

fn section_heading(title: &'static str) -> Div {
    div()
        .pt_3()
        .text_lg()
        .font_weight(FontWeight::BOLD)
        .child(title)
}

fn make_amount_input(
    placeholder: impl Into<SharedString>,
    window: &mut Window,
    cx: &mut Context<IncomeForm>,
) -> Entity<InputState> {
    let pattern = MaskPattern::Number {
        separator: Some(','),
        fraction: Some(2),
    };

    cx.new(|closure_cx| {
        InputState::new(window, closure_cx)
            .mask_pattern(pattern)
            .placeholder(placeholder.into())
    })
}

fn make_input_row(
    state: &Entity<InputState>,
    input_label: impl Into<SharedString>,
) -> Div {
    make_labeled_row(input_label).child(Input::new(state).flex_grow())
}
