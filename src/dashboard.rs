use crate::errors::FetchError;
use crate::models::{DailyStats, Totals};
use crate::stats::aggregate;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Idle,
    Loading,
    Ready {
        records: Vec<DailyStats>,
        totals: Totals,
        fetched_at: DateTime<Utc>,
    },
    Failed {
        error: FetchError,
        failed_at: DateTime<Utc>,
    },
}

/// Identifies one refresh attempt. Only the most recent ticket may settle the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    generation: u64,
}

#[derive(Debug)]
pub struct Dashboard {
    state: DashboardState,
    generation: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub status: &'static str,
    pub loading: bool,
    pub records: Vec<DailyStats>,
    pub totals: Totals,
    pub error: Option<ErrorView>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorView {
    pub kind: &'static str,
    pub message: String,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            state: DashboardState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        self.state = DashboardState::Loading;
        RefreshTicket {
            generation: self.generation,
        }
    }

    /// Settles the refresh named by `ticket`. Returns `false` and leaves the
    /// state untouched when a newer refresh has started since.
    pub fn complete(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<DailyStats>, FetchError>,
    ) -> bool {
        self.complete_at(ticket, result, Utc::now())
    }

    pub fn complete_at(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<DailyStats>, FetchError>,
        now: DateTime<Utc>,
    ) -> bool {
        if ticket.generation != self.generation {
            return false;
        }

        self.state = match result {
            Ok(records) => DashboardState::Ready {
                totals: aggregate(&records),
                records,
                fetched_at: now,
            },
            Err(error) => DashboardState::Failed {
                error,
                failed_at: now,
            },
        };
        true
    }

    pub fn totals(&self) -> Totals {
        match &self.state {
            DashboardState::Ready { totals, .. } => *totals,
            _ => Totals::default(),
        }
    }

    pub fn view(&self) -> DashboardView {
        match &self.state {
            DashboardState::Idle => DashboardView {
                status: "idle",
                loading: true,
                records: Vec::new(),
                totals: Totals::default(),
                error: None,
                updated_at: None,
            },
            DashboardState::Loading => DashboardView {
                status: "loading",
                loading: true,
                records: Vec::new(),
                totals: Totals::default(),
                error: None,
                updated_at: None,
            },
            DashboardState::Ready {
                records,
                totals,
                fetched_at,
            } => DashboardView {
                status: "ready",
                loading: false,
                records: records.clone(),
                totals: *totals,
                error: None,
                updated_at: Some(*fetched_at),
            },
            DashboardState::Failed { error, failed_at } => DashboardView {
                status: "failed",
                loading: false,
                records: Vec::new(),
                totals: Totals::default(),
                error: Some(ErrorView {
                    kind: error.kind(),
                    message: error.to_string(),
                }),
                updated_at: Some(*failed_at),
            },
        }
    }
}
