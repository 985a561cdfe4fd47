use crate::dashboards::d400_catch_report::service::{round1, species_shares};
use contracts::dashboards::d400_catch_report::LogbookRow;
use contracts::dashboards::d401_overview::{OverviewRequest, OverviewResponse};
use contracts::domain::a001_vessel::Vessel;
use contracts::domain::a002_logbook::{Logbook, LogbookStatus};

/// Build the landing dashboard for one month
pub fn build_overview(
    request: OverviewRequest,
    vessels: &[Vessel],
    logbooks: &[Logbook],
    recent_limit: usize,
) -> OverviewResponse {
    let previous = request.previous();
    let in_month: Vec<&Logbook> = logbooks
        .iter()
        .filter(|l| request.contains(l.trip.return_date))
        .collect();
    let previous_count = logbooks
        .iter()
        .filter(|l| previous.contains(l.trip.return_date))
        .count();

    let logbooks_this_month = in_month.len();
    let logbooks_change_pct = (previous_count > 0).then(|| {
        round1((logbooks_this_month as f64 - previous_count as f64) / previous_count as f64 * 100.0)
    });

    let approved: Vec<&Logbook> = in_month
        .iter()
        .copied()
        .filter(|l| l.status == LogbookStatus::Approved)
        .collect();
    let total_catch: f64 = approved.iter().map(|l| l.weight_kg()).sum();

    let mut recent: Vec<&Logbook> = logbooks.iter().collect();
    recent.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    let recent_logbooks = recent
        .into_iter()
        .take(recent_limit)
        .map(LogbookRow::from)
        .collect();

    OverviewResponse {
        period: request.period(),
        logbooks_this_month,
        logbooks_change_pct,
        total_catch,
        active_vessels: vessels.iter().filter(|v| v.is_active()).count(),
        registered_vessels: vessels.len(),
        pending_validation: logbooks.iter().filter(|l| l.is_pending()).count(),
        species: species_shares(&approved),
        recent_logbooks,
    }
}

/// Overview dashboard with the configured number of recent logbooks
pub struct OverviewService {
    recent_limit: usize,
}

impl OverviewService {
    pub fn new(recent_limit: usize) -> Self {
        Self { recent_limit }
    }

    pub fn get_overview(
        &self,
        request: OverviewRequest,
        vessels: &[Vessel],
        logbooks: &[Logbook],
    ) -> OverviewResponse {
        let response = build_overview(request, vessels, logbooks, self.recent_limit);
        tracing::info!(
            "Overview {}: {} logbooks, {} pending",
            response.period,
            response.logbooks_this_month,
            response.pending_validation
        );
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::fixtures;
    use contracts::enums::FishSpecies;

    #[test]
    fn test_march_overview() {
        let vessels = fixtures::vessels().unwrap();
        let logbooks = fixtures::logbooks().unwrap();
        let overview = build_overview(OverviewRequest::new(2024, 3).unwrap(), &vessels, &logbooks, 3);

        assert_eq!(overview.period, "2024-03");
        assert_eq!(overview.logbooks_this_month, 4);
        // February had one logbook
        assert_eq!(overview.logbooks_change_pct, Some(300.0));
        assert_eq!(overview.total_catch, 3200.0);
        assert_eq!(overview.active_vessels, 3);
        assert_eq!(overview.registered_vessels, 4);
        assert_eq!(overview.pending_validation, 3);
        assert_eq!(overview.species[0].species, FishSpecies::Tongkol);

        let codes: Vec<&str> = overview.recent_logbooks.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["LB-0003", "LB-0002", "LB-0001"]);
    }

    #[test]
    fn test_change_is_none_without_previous_month() {
        let vessels = fixtures::vessels().unwrap();
        let logbooks = fixtures::logbooks().unwrap();
        let overview = build_overview(OverviewRequest::new(2024, 1).unwrap(), &vessels, &logbooks, 10);
        assert_eq!(overview.logbooks_this_month, 1);
        assert_eq!(overview.logbooks_change_pct, None);
        assert_eq!(overview.recent_logbooks.len(), 6);
    }
}
