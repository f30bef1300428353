//! Per-window interaction state.
//!
//! The window is either showing the input form or the results for one
//! calculated summary. The summary, together with whatever the results view
//! keeps alongside it, is written once when the user asks for cards and
//! dropped when they return to the form.

use rust_decimal::Decimal;
use tracing::info;

use crate::IncomeSummary;

/// `R` is the data only the results view needs, such as the loaded cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionView<R = ()> {
    Form,
    Results { summary: IncomeSummary, results: R },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session<R = ()> {
    view: SessionView<R>,
}

impl<R> Default for Session<R> {
    fn default() -> Self {
        Self {
            view: SessionView::Form,
        }
    }
}

impl<R> Session<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &SessionView<R> {
        &self.view
    }

    pub fn is_showing_results(&self) -> bool {
        matches!(self.view, SessionView::Results { .. })
    }

    /// Form → Results. Calling it again while on Results replaces both the
    /// summary and the results data.
    pub fn show_results(
        &mut self,
        summary: IncomeSummary,
        results: R,
    ) {
        info!(net_income = %summary.net_income, "showing card results");
        self.view = SessionView::Results { summary, results };
    }

    /// Results → Form, discarding the stored summary and results data.
    pub fn back_to_form(&mut self) {
        if self.is_showing_results() {
            info!("returning to calculator form");
        }
        self.view = SessionView::Form;
    }

    pub fn summary(&self) -> Option<&IncomeSummary> {
        match &self.view {
            SessionView::Results { summary, .. } => Some(summary),
            SessionView::Form => None,
        }
    }

    pub fn net_income(&self) -> Option<Decimal> {
        self.summary().map(|s| s.net_income)
    }

    pub fn results_mut(&mut self) -> Option<&mut R> {
        match &mut self.view {
            SessionView::Results { results, .. } => Some(results),
            SessionView::Form => None,
        }
    }
}
