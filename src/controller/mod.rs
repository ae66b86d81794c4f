//! Client Controller
//!
//! Keeps the expense table and the three summary charts in sync with the
//! server.
//!
//! # Flow
//!
//! - [`ClientController::start`]: build the chart surfaces, then fetch the
//!   list and the summary
//! - [`ClientController::on_submit`]: create an expense from the entry form,
//!   clear the form, refresh everything
//! - [`ClientController::on_table_click`]: delete the expense behind a delete
//!   control, refresh everything
//!
//! Every mutation is followed by a full re-fetch of both the list and the
//! summary; nothing is updated optimistically. Each refresh is split into
//! fetch (the [`ExpenseApi`] call, which also parses) and render (the
//! [`ExpenseView`] call), and returns a [`ClientResult`]. The event-level
//! entry points log failures and hand them to [`ExpenseView::show_error`].
//! Creates and deletes return an [`ActionError`] that tells a rejected request
//! apart from a change that was saved but could not be re-fetched.
//!
//! # Ordering
//!
//! Refreshes of the same kind may overlap when the user acts quickly. Each
//! one draws a ticket from a [`RequestSequence`]; only the response for the
//! most recent ticket is rendered, older ones are dropped, failures included.

mod error;
mod events;
mod sequence;

pub use error::{ActionError, ActionResult};
pub use events::{parse_float, ClickOutcome, ClickTarget, FormInput};
pub use sequence::{RefreshOutcome, RequestSequence, RequestTicket};

use futures_util::future::join;
use std::cell::{Ref, RefCell};

use crate::api::{ClientError, ClientResult, ExpenseApi, Summary};
use crate::chart::{ChartKind, ChartStyle, ChartSurface};
use crate::view::{render_rows, ExpenseView};

/// Client-side state owned by the controller
#[derive(Debug, Default)]
pub struct ClientState {
    daily: Option<ChartSurface>,
    monthly: Option<ChartSurface>,
    yearly: Option<ChartSurface>,
}

impl ClientState {
    /// The chart surface for `kind`, if it has been built
    pub fn chart(&self, kind: ChartKind) -> Option<&ChartSurface> {
        match kind {
            ChartKind::Daily => self.daily.as_ref(),
            ChartKind::Monthly => self.monthly.as_ref(),
            ChartKind::Yearly => self.yearly.as_ref(),
        }
    }

    fn chart_slot(&mut self, kind: ChartKind) -> &mut Option<ChartSurface> {
        match kind {
            ChartKind::Daily => &mut self.daily,
            ChartKind::Monthly => &mut self.monthly,
            ChartKind::Yearly => &mut self.yearly,
        }
    }

    /// Whether all three chart surfaces exist
    pub fn charts_ready(&self) -> bool {
        ChartKind::ALL.iter().all(|kind| self.chart(*kind).is_some())
    }
}

/// The single client component: owns the API handle, the view and the
/// client state
pub struct ClientController<A, V> {
    api: A,
    view: V,
    chart_style: ChartStyle,
    state: RefCell<ClientState>,
    list_requests: RequestSequence,
    summary_requests: RequestSequence,
}

impl<A: ExpenseApi, V: ExpenseView> ClientController<A, V> {
    /// Create a controller with no chart surfaces yet
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            chart_style: ChartStyle::default(),
            state: RefCell::new(ClientState::default()),
            list_requests: RequestSequence::new(),
            summary_requests: RequestSequence::new(),
        }
    }

    /// Use `style` for the chart surfaces built by [`Self::init_charts`]
    pub fn with_chart_style(mut self, style: ChartStyle) -> Self {
        self.chart_style = style;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn state(&self) -> Ref<'_, ClientState> {
        self.state.borrow()
    }

    /// Build the daily, monthly and yearly chart surfaces and draw them empty.
    ///
    /// Surfaces are built once; calling this again leaves existing ones alone.
    pub fn init_charts(&self) {
        let mut created = Vec::new();

        {
            let mut state = self.state.borrow_mut();
            for kind in ChartKind::ALL {
                let slot = state.chart_slot(kind);
                if slot.is_none() {
                    let surface = ChartSurface::new(kind, self.chart_style.clone());
                    created.push(surface.clone());
                    *slot = Some(surface);
                }
            }
        }

        for surface in &created {
            self.view.draw_chart(surface);
        }

        if !created.is_empty() {
            tracing::debug!(count = created.len(), "Initialized chart surfaces");
        }
    }

    /// Page-ready entry point: build the charts, then load the list and summary
    pub async fn start(&self) {
        self.init_charts();

        if let Err(e) = self.refresh_all().await {
            self.report("Initial load failed", &e);
        }
    }

    /// Fetch every expense and replace the rendered table rows
    pub async fn refresh_list(&self) -> ClientResult<RefreshOutcome> {
        let ticket = self.list_requests.issue();

        let result = self.api.list_expenses().await;

        if !self.list_requests.is_latest(ticket) {
            tracing::debug!(
                ticket = ticket.number(),
                failed = result.is_err(),
                "Dropping stale expense list response"
            );
            return Ok(RefreshOutcome::Stale);
        }

        let rows = render_rows(&result?);
        tracing::debug!(rows = rows.len(), "Rendering expense list");
        self.view.replace_rows(rows);

        Ok(RefreshOutcome::Applied)
    }

    /// Fetch the aggregated totals and update the three charts
    pub async fn refresh_summary(&self) -> ClientResult<RefreshOutcome> {
        let ticket = self.summary_requests.issue();

        let result = self.api.fetch_summary().await;

        if !self.summary_requests.is_latest(ticket) {
            tracing::debug!(
                ticket = ticket.number(),
                failed = result.is_err(),
                "Dropping stale summary response"
            );
            return Ok(RefreshOutcome::Stale);
        }

        self.apply_summary(&result?);

        Ok(RefreshOutcome::Applied)
    }

    /// Push a summary into each chart surface and redraw it.
    ///
    /// A chart whose surface has not been built yet is skipped.
    pub fn apply_summary(&self, summary: &Summary) {
        for kind in ChartKind::ALL {
            let updated = {
                let mut state = self.state.borrow_mut();
                match state.chart_slot(kind) {
                    Some(surface) => {
                        surface.update(kind.title(), kind.series_from(summary));
                        Some(surface.clone())
                    }
                    None => None,
                }
            };

            match updated {
                Some(surface) => self.view.draw_chart(&surface),
                None => tracing::debug!(chart = ?kind, "Chart not initialized, skipping update"),
            }
        }
    }

    /// Refresh the list and the summary together.
    ///
    /// Both run to completion even if one fails; the first error is returned.
    pub async fn refresh_all(&self) -> ClientResult<()> {
        let (list, summary) = join(self.refresh_list(), self.refresh_summary()).await;

        list.and(summary).map(|_| ())
    }

    /// Create an expense from the current form contents.
    ///
    /// On success the form is cleared and both list and summary are fetched
    /// again. On failure the form keeps its contents and nothing is refreshed.
    pub async fn submit_expense(&self) -> ActionResult<()> {
        let payload = self.view.read_form().to_payload();

        self.api.create_expense(&payload).await?;
        tracing::info!(description = %payload.description, amount = payload.amount, "Expense created");

        self.view.reset_form();
        self.refresh_all().await.map_err(ActionError::Refresh)
    }

    /// React to a click anywhere in the table body.
    ///
    /// Only clicks on a delete control do anything: the expense named by its
    /// `data-id` is deleted, then list and summary are fetched again. The
    /// refresh also runs when the server answered the delete with an error;
    /// only a request that got no response skips it.
    pub async fn handle_table_click(&self, target: &ClickTarget) -> ActionResult<ClickOutcome> {
        let id = match target.delete_target() {
            Some(id) => id,
            None => {
                if target.is_delete_button() {
                    tracing::warn!("Delete control without a data-id, ignoring click");
                }
                return Ok(ClickOutcome::Ignored);
            }
        };

        if let Err(e) = self.api.delete_expense(&id).await {
            if !matches!(e, ClientError::Transport(_)) {
                if let Err(refresh) = self.refresh_all().await {
                    tracing::warn!(error = %refresh, "Refresh after rejected delete failed");
                }
            }
            return Err(e.into());
        }
        tracing::info!(%id, "Expense deleted");

        self.refresh_all().await.map_err(ActionError::Refresh)?;
        Ok(ClickOutcome::Deleted(id))
    }

    /// Form submit handler; failures are logged and shown to the user
    pub async fn on_submit(&self) {
        if let Err(e) = self.submit_expense().await {
            self.report_action("Failed to add expense", &e);
        }
    }

    /// Table click handler; failures are logged and shown to the user
    pub async fn on_table_click(&self, target: ClickTarget) {
        if let Err(e) = self.handle_table_click(&target).await {
            self.report_action("Failed to delete expense", &e);
        }
    }

    fn report(&self, context: &str, error: &ClientError) {
        tracing::error!(error = %error, "{}", context);
        self.view.show_error(&error.user_message());
    }

    fn report_action(&self, failed: &str, error: &ActionError) {
        let context = match error {
            ActionError::Request(_) => failed,
            ActionError::Refresh(_) => "Change saved, but refreshing failed",
        };
        tracing::error!(error = %error.client_error(), "{}", context);
        self.view.show_error(&error.user_message());
    }
}
