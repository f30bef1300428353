use std::collections::HashSet;

use gpui::{
    App, AppContext, ClickEvent, Context, Div, Entity, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, StatefulInteractiveElement, Styled, Subscription, Window, div,
};
use gpui_component::{ActiveTheme, h_flex, v_flex};
use income_core::calculations::common::format_myr;
use income_core::session::SessionView;
use income_core::{IncomeSummary, Session};
use tracing::{info, warn};

use super::card_results::{ResultsContent, render_card};
use super::{IncomeForm, make_amount_row, make_button};
use crate::app::AppServices;

/// Cards loaded for one summary, plus which of them show their details.
pub struct CardResults {
    content: ResultsContent,
    expanded: HashSet<String>,
}

impl CardResults {
    pub fn new(content: ResultsContent) -> Self {
        Self {
            content,
            expanded: HashSet::new(),
        }
    }

    pub fn is_expanded(
        &self,
        card_id: &str,
    ) -> bool {
        self.expanded.contains(card_id)
    }

    pub fn toggle_details(
        &mut self,
        card_id: &str,
    ) {
        if !self.expanded.remove(card_id) {
            self.expanded.insert(card_id.to_string());
        }
    }
}

/// Root view of the main window: the form, or the cards for one summary.
pub struct CalculatorView {
    services: AppServices,
    session: Session<CardResults>,
    form: Entity<IncomeForm>,
    errors: Vec<String>,
    _window_close_subscription: Subscription,
}

impl CalculatorView {
    pub fn new(
        services: AppServices,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let form = cx.new(|form_cx| IncomeForm::new(window, form_cx));

        let subscription = cx.on_window_closed(|_cx: &mut App| {
            info!("Window closed callback");
            #[cfg(not(target_os = "linux"))]
            crate::quit(&crate::Quit, _cx);
        });

        info!("Window constructed");
        Self {
            services,
            session: Session::new(),
            form,
            errors: Vec::new(),
            _window_close_subscription: subscription,
        }
    }

    fn show_cards(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        let model = match self.form.read(cx).to_model(cx) {
            Ok(m) => m,
            Err(errors) => {
                warn!(count = errors.len(), "Invalid amount in form");
                self.errors = errors;
                cx.notify();
                return;
            }
        };
        if let Err(errors) = model.validate_for_submit() {
            warn!("Cannot show cards due to validation errors");
            for error in &errors {
                warn!(%error, "validation error");
            }
            self.errors = errors;
            cx.notify();
            return;
        }

        let summary = match model.summary() {
            Ok(summary) => summary,
            Err(error) => {
                warn!(%error, "Cannot calculate totals");
                self.errors = vec![error.to_string()];
                cx.notify();
                return;
            }
        };

        info!(%model, "Form validated");
        self.errors.clear();
        let results = CardResults::new(self.services.listing(summary.net_income).into());
        self.session.show_results(summary, results);
        cx.notify();
    }

    fn back_to_form(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        self.session.back_to_form();
        cx.notify();
    }

    fn toggle_details(
        &mut self,
        card_id: &str,
        cx: &mut Context<Self>,
    ) {
        if let Some(results) = self.session.results_mut() {
            results.toggle_details(card_id);
            cx.notify();
        }
    }

    fn render_form(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        let danger = cx.theme().danger;

        v_flex()
            .gap_4()
            .w_full()
            .child(self.form.clone())
            .children(
                self.errors
                    .iter()
                    .map(|error| div().text_color(danger).child(error.clone())),
            )
            .child(
                h_flex().justify_center().child(make_button(
                    "show-cards",
                    "Show Suitable Cards",
                    cx.listener(|this, _: &ClickEvent, _, cx| this.show_cards(cx)),
                )),
            )
    }

    fn render_results(
        &self,
        summary: &IncomeSummary,
        results: &CardResults,
        cx: &mut Context<Self>,
    ) -> Div {
        let muted = cx.theme().muted_foreground;

        let mut body = v_flex()
            .gap_4()
            .w_full()
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::BOLD)
                    .child("Suitable Cards"),
            )
            .child(make_amount_row(
                "Total Income (MYR):",
                format_myr(summary.total_income),
            ))
            .child(make_amount_row(
                "Total Deductions (MYR):",
                format_myr(summary.total_deductions),
            ))
            .child(make_amount_row(
                "Net Income (MYR):",
                format_myr(summary.net_income),
            ));

        body = match &results.content {
            ResultsContent::Message(message) => {
                body.child(div().text_color(muted).child(message.clone()))
            }
            ResultsContent::Cards { heading, cards } => body
                .child(
                    div()
                        .text_lg()
                        .font_weight(FontWeight::BOLD)
                        .child(heading.clone()),
                )
                .children(cards.iter().map(|card| {
                    let card_id = card.id.clone();
                    render_card(
                        card,
                        results.is_expanded(&card.id),
                        cx.listener(move |this, _: &ClickEvent, _, cx| {
                            this.toggle_details(&card_id, cx)
                        }),
                    )
                })),
        };

        body.child(
            h_flex().justify_center().child(make_button(
                "back-to-form",
                "Back to Calculator",
                cx.listener(|this, _: &ClickEvent, _, cx| this.back_to_form(cx)),
            )),
        )
    }
}

impl Render for CalculatorView {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let content = match self.session.view() {
            SessionView::Form => self.render_form(cx),
            SessionView::Results { summary, results } => {
                self.render_results(summary, results, cx)
            }
        };

        v_flex()
            .id("calculator")
            .size_full()
            .p_5()
            .gap_4()
            .overflow_y_scroll()
            .child(
                div()
                    .text_2xl()
                    .font_weight(FontWeight::BOLD)
                    .child("Income Calculator"),
            )
            .child(content)
    }
}
