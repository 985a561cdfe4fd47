use crate::dashboards::d400_catch_report::{LogbookRow, SpeciesShare};
use crate::shared::WorkflowError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Request for the overview dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewRequest {
    pub year: i32,
    pub month: u32,
}

impl OverviewRequest {
    pub fn new(year: i32, month: u32) -> Result<Self, WorkflowError> {
        if !(1..=12).contains(&month) {
            return Err(WorkflowError::invalid_input(format!(
                "month {} is out of range 1..=12",
                month
            )));
        }
        Ok(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Previous calendar month
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Period in format "YYYY-MM"
    pub fn period(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Response of the overview dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewResponse {
    /// Period in format "YYYY-MM"
    pub period: String,
    /// Logbooks with trip return date in the month, any status
    pub logbooks_this_month: usize,
    /// Change vs previous month in percent; `None` when the previous month is empty
    pub logbooks_change_pct: Option<f64>,
    /// Approved catch of the month in kg
    pub total_catch: f64,
    pub active_vessels: usize,
    pub registered_vessels: usize,
    pub pending_validation: usize,
    /// Approved catch of the month per species
    pub species: Vec<SpeciesShare>,
    /// Latest submitted logbooks, newest first
    pub recent_logbooks: Vec<LogbookRow>,
}
