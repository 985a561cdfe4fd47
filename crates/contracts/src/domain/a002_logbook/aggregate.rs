use super::catch_entry::{total_count, total_quantity, total_weight_kg, CatchEntry};
use super::photo::PhotoAttachment;
use crate::domain::a001_vessel::VesselId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::FishSpecies;
use crate::shared::WorkflowError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// ID типа для логбука
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LogbookId(pub i64);

impl AggregateId for LogbookId {
    fn value(&self) -> i64 {
        self.0
    }
    fn from_value(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for LogbookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Status
// ============================================================================

/// Статус проверки логбука
///
/// `Pending` является единственным нетерминальным состоянием. Из `Approved`,
/// `Rejected` и `Revision` переходов нет.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogbookStatus {
    Pending,
    Approved,
    Rejected,
    Revision,
}

impl LogbookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogbookStatus::Pending => "pending",
            LogbookStatus::Approved => "approved",
            LogbookStatus::Rejected => "rejected",
            LogbookStatus::Revision => "revision",
        }
    }

    /// Подпись бейджа для UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LogbookStatus::Pending => "Menunggu",
            LogbookStatus::Approved => "Disetujui",
            LogbookStatus::Rejected => "Ditolak",
            LogbookStatus::Revision => "Perlu Revisi",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, LogbookStatus::Pending)
    }
}

impl std::fmt::Display for LogbookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LogbookStatus {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(LogbookStatus::Pending),
            "approved" => Ok(LogbookStatus::Approved),
            "rejected" => Ok(LogbookStatus::Rejected),
            "revision" => Ok(LogbookStatus::Revision),
            other => Err(WorkflowError::invalid_input(format!(
                "unknown logbook status: {}",
                other
            ))),
        }
    }
}

/// Решение проверяющего по логбуку
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "lowercase")]
pub enum ReviewDecision {
    Approved,
    Rejected { reason: String },
    Revision { notes: String },
}

impl ReviewDecision {
    /// Статус, в который переводит решение
    pub fn target_status(&self) -> LogbookStatus {
        match self {
            ReviewDecision::Approved => LogbookStatus::Approved,
            ReviewDecision::Rejected { .. } => LogbookStatus::Rejected,
            ReviewDecision::Revision { .. } => LogbookStatus::Revision,
        }
    }

    /// Текст причины/замечаний, если решение его требует
    pub fn detail(&self) -> Option<&str> {
        match self {
            ReviewDecision::Approved => None,
            ReviewDecision::Rejected { reason } => Some(reason),
            ReviewDecision::Revision { notes } => Some(notes),
        }
    }
}

// ============================================================================
// Trip data
// ============================================================================

/// Период рейса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripPeriod {
    pub departure: NaiveDate,
    pub return_date: NaiveDate,
}

impl TripPeriod {
    pub fn new(departure: NaiveDate, return_date: NaiveDate) -> Result<Self, WorkflowError> {
        if return_date < departure {
            return Err(WorkflowError::invalid_input(
                "return date must not be earlier than departure date",
            ));
        }
        Ok(Self {
            departure,
            return_date,
        })
    }

    /// Длительность рейса в сутках (включительно)
    pub fn days(&self) -> i64 {
        (self.return_date - self.departure).num_days() + 1
    }
}

impl std::fmt::Display for TripPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.departure, self.return_date)
    }
}

/// Район промысла
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    /// Название района (напр. "Laut Jawa")
    pub name: Option<String>,
}

impl Location {
    pub fn new(lat: f64, lng: f64, name: Option<String>) -> Result<Self, WorkflowError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(WorkflowError::invalid_input(
                "latitude must be between -90 and 90",
            ));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(WorkflowError::invalid_input(
                "longitude must be between -180 and 180",
            ));
        }
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        Ok(Self { lat, lng, name })
    }

    /// Подпись для таблиц: название района или координаты
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{:.3}, {:.3}", self.lat, self.lng),
        }
    }
}

/// Готовый к отправке логбук (результат черновика u501)
#[derive(Debug, Clone)]
pub struct LogbookSubmission {
    pub vessel_id: VesselId,
    pub vessel_name: String,
    pub captain: String,
    pub trip: TripPeriod,
    pub location: Location,
    pub entries: Vec<CatchEntry>,
    pub photos: Vec<PhotoAttachment>,
    pub notes: Option<String>,
}

impl LogbookSubmission {
    pub fn total_quantity(&self) -> f64 {
        total_quantity(&self.entries)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Логбук рейса на проверке (агрегат a002)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logbook {
    #[serde(flatten)]
    pub base: BaseAggregate<LogbookId>,

    pub vessel_id: VesselId,
    pub vessel_name: String,
    pub captain: String,
    pub submitted_at: DateTime<Utc>,
    pub trip: TripPeriod,
    pub location: Location,
    pub entries: Vec<CatchEntry>,
    pub photos: Vec<String>,
    pub notes: Option<String>,

    pub status: LogbookStatus,
    /// Заполнена тогда и только тогда, когда статус `Rejected`
    pub rejection_reason: Option<String>,
    /// Заполнены тогда и только тогда, когда статус `Revision`
    pub revision_notes: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl Logbook {
    /// Код логбука для UI и выгрузок (напр. "LB-0001")
    pub fn code_for(id: LogbookId) -> String {
        format!("LB-{:04}", id.0)
    }

    /// Новый логбук в статусе `Pending` из отправленного черновика
    pub fn from_submission(
        id: LogbookId,
        submission: LogbookSubmission,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        let description = format!("{} {}", submission.vessel_name, submission.trip);
        let base = BaseAggregate::with_metadata(
            id,
            Self::code_for(id),
            description,
            EntityMetadata::created_at(submitted_at),
        );
        Self {
            base,
            vessel_id: submission.vessel_id,
            vessel_name: submission.vessel_name,
            captain: submission.captain,
            submitted_at,
            trip: submission.trip,
            location: submission.location,
            entries: submission.entries,
            photos: submission.photos.iter().map(PhotoAttachment::reference).collect(),
            notes: submission.notes,
            status: LogbookStatus::Pending,
            rejection_reason: None,
            revision_notes: None,
            reviewed_at: None,
        }
    }

    /// Итог улова, всегда пересчитывается из строк
    pub fn total_quantity(&self) -> f64 {
        total_quantity(&self.entries)
    }

    /// Вес улова в кг для отчётов
    pub fn weight_kg(&self) -> f64 {
        total_weight_kg(&self.entries)
    }

    /// Поштучный улов ("ekor")
    pub fn count_total(&self) -> f64 {
        total_count(&self.entries)
    }

    /// Виды рыбы в порядке первого появления
    pub fn species(&self) -> Vec<FishSpecies> {
        let mut species = Vec::new();
        for entry in &self.entries {
            if !species.contains(&entry.species) {
                species.push(entry.species);
            }
        }
        species
    }

    pub fn is_pending(&self) -> bool {
        self.status == LogbookStatus::Pending
    }

    // ============================================================================
    // Review transitions
    // ============================================================================

    /// Утвердить логбук
    pub fn approve(&mut self, at: DateTime<Utc>) -> Result<ReviewDecision, WorkflowError> {
        let decision = ReviewDecision::Approved;
        self.apply(&decision, at)?;
        Ok(decision)
    }

    /// Отклонить логбук с обязательной причиной
    pub fn reject(&mut self, reason: &str, at: DateTime<Utc>) -> Result<ReviewDecision, WorkflowError> {
        let decision = ReviewDecision::Rejected {
            reason: reason.trim().to_string(),
        };
        self.apply(&decision, at)?;
        Ok(decision)
    }

    /// Вернуть логбук на доработку с обязательными замечаниями
    pub fn request_revision(
        &mut self,
        notes: &str,
        at: DateTime<Utc>,
    ) -> Result<ReviewDecision, WorkflowError> {
        let decision = ReviewDecision::Revision {
            notes: notes.trim().to_string(),
        };
        self.apply(&decision, at)?;
        Ok(decision)
    }

    /// Проверить, допустимо ли решение, не меняя логбук
    pub fn check_decision(&self, decision: &ReviewDecision) -> Result<(), WorkflowError> {
        let target = decision.target_status();
        if self.status.is_terminal() {
            return Err(WorkflowError::InvalidStateTransition {
                from: self.status.to_string(),
                to: target.to_string(),
            });
        }
        match decision {
            ReviewDecision::Approved => Ok(()),
            ReviewDecision::Rejected { reason } if reason.trim().is_empty() => Err(
                WorkflowError::invalid_input("reject reason must not be empty"),
            ),
            ReviewDecision::Revision { notes } if notes.trim().is_empty() => Err(
                WorkflowError::invalid_input("revision notes must not be empty"),
            ),
            _ => Ok(()),
        }
    }

    /// Применить решение; при ошибке логбук не меняется
    pub fn apply(&mut self, decision: &ReviewDecision, at: DateTime<Utc>) -> Result<(), WorkflowError> {
        self.check_decision(decision)?;

        match decision {
            ReviewDecision::Approved => {}
            ReviewDecision::Rejected { reason } => {
                self.rejection_reason = Some(reason.trim().to_string());
            }
            ReviewDecision::Revision { notes } => {
                self.revision_notes = Some(notes.trim().to_string());
            }
        }
        self.status = decision.target_status();
        self.reviewed_at = Some(at);
        self.base.metadata.touch(at);
        Ok(())
    }
}

impl AggregateRoot for Logbook {
    type Id = LogbookId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "logbook"
    }

    fn element_name() -> &'static str {
        "Logbook"
    }

    fn list_name() -> &'static str {
        "Validasi Logbook"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{CatchUnit, FishingGear};
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 17, 10, 0, 0).unwrap()
    }

    fn pending(id: i64) -> Logbook {
        let submission = LogbookSubmission {
            vessel_id: VesselId(1),
            vessel_name: "Bahari Jaya I".to_string(),
            captain: "Budi Santoso".to_string(),
            trip: TripPeriod::new(
                NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            )
            .unwrap(),
            location: Location::new(-6.175, 106.827, Some("Laut Jawa".to_string())).unwrap(),
            entries: vec![
                CatchEntry::new(
                    FishSpecies::Tuna,
                    150.0,
                    CatchUnit::Kg,
                    Some(FishingGear::PancingTonda),
                )
                .unwrap(),
                CatchEntry::new(
                    FishSpecies::Cakalang,
                    200.0,
                    CatchUnit::Kg,
                    Some(FishingGear::PancingTonda),
                )
                .unwrap(),
            ],
            photos: vec![],
            notes: None,
        };
        Logbook::from_submission(LogbookId(id), submission, at())
    }

    #[test]
    fn test_from_submission_is_pending() {
        let logbook = pending(1);
        assert_eq!(logbook.status, LogbookStatus::Pending);
        assert_eq!(logbook.code(), "LB-0001");
        assert_eq!(logbook.total_quantity(), 350.0);
        assert_eq!(logbook.species(), vec![FishSpecies::Tuna, FishSpecies::Cakalang]);
    }

    #[test]
    fn test_approve_then_reject_is_invalid_transition() {
        let mut logbook = pending(1);
        logbook.approve(at()).unwrap();
        assert_eq!(logbook.status, LogbookStatus::Approved);
        assert_eq!(logbook.reviewed_at, Some(at()));

        let err = logbook.reject("bad", at()).unwrap_err();
        assert_eq!(
            err,
            WorkflowError::InvalidStateTransition {
                from: "approved".to_string(),
                to: "rejected".to_string(),
            }
        );
        assert_eq!(logbook.status, LogbookStatus::Approved);
        assert_eq!(logbook.rejection_reason, None);
    }

    #[test]
    fn test_terminal_states_are_immutable() {
        let mut rejected = pending(1);
        rejected.reject("foto tidak jelas", at()).unwrap();
        let mut revision = pending(2);
        revision.request_revision("cek koordinat", at()).unwrap();
        let mut approved = pending(3);
        approved.approve(at()).unwrap();

        for logbook in [&mut rejected, &mut revision, &mut approved] {
            let before = logbook.clone();
            assert!(matches!(
                logbook.approve(at()),
                Err(WorkflowError::InvalidStateTransition { .. })
            ));
            assert!(matches!(
                logbook.reject("x", at()),
                Err(WorkflowError::InvalidStateTransition { .. })
            ));
            assert!(matches!(
                logbook.request_revision("y", at()),
                Err(WorkflowError::InvalidStateTransition { .. })
            ));
            assert_eq!(*logbook, before);
        }
    }

    #[test]
    fn test_reject_requires_reason() {
        let mut logbook = pending(1);
        let err = logbook.reject("", at()).unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidInput(_)));
        assert_eq!(logbook.status, LogbookStatus::Pending);

        let err = logbook.request_revision("   ", at()).unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidInput(_)));
        assert_eq!(logbook.status, LogbookStatus::Pending);
        assert_eq!(logbook.metadata().version, 0);
    }

    #[test]
    fn test_request_revision_stores_notes() {
        let mut logbook = pending(3);
        let decision = logbook.request_revision("recheck coordinates", at()).unwrap();

        assert_eq!(logbook.status, LogbookStatus::Revision);
        assert_eq!(logbook.revision_notes.as_deref(), Some("recheck coordinates"));
        assert_eq!(decision.detail(), Some("recheck coordinates"));
        assert_eq!(logbook.metadata().version, 1);
    }

    #[test]
    fn test_reject_trims_reason() {
        let mut logbook = pending(2);
        logbook.reject("  data tangkapan tidak sesuai  ", at()).unwrap();
        assert_eq!(logbook.status, LogbookStatus::Rejected);
        assert_eq!(
            logbook.rejection_reason.as_deref(),
            Some("data tangkapan tidak sesuai")
        );
        assert_eq!(logbook.revision_notes, None);
    }

    #[test]
    fn test_total_follows_entries() {
        let mut logbook = pending(1);
        logbook.entries.remove(0);
        assert_eq!(logbook.total_quantity(), 200.0);
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&LogbookStatus::Revision).unwrap();
        assert_eq!(json, "\"revision\"");
        assert_eq!("Approved".parse::<LogbookStatus>().unwrap(), LogbookStatus::Approved);
        assert!(matches!(
            "draft".parse::<LogbookStatus>(),
            Err(WorkflowError::InvalidInput(_))
        ));

        let decision = ReviewDecision::Rejected {
            reason: "bad".to_string(),
        };
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["decision"], "rejected");
        assert_eq!(json["reason"], "bad");
    }

    #[test]
    fn test_location_bounds() {
        assert!(Location::new(-91.0, 0.0, None).is_err());
        assert!(Location::new(0.0, 181.0, None).is_err());
        let loc = Location::new(-6.2, 106.85, Some("  ".to_string())).unwrap();
        assert_eq!(loc.name, None);
        assert_eq!(loc.label(), "-6.200, 106.850");
    }

    #[test]
    fn test_trip_period_order() {
        let d1 = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert!(TripPeriod::new(d2, d1).is_err());
        assert_eq!(TripPeriod::new(d1, d2).unwrap().days(), 6);
    }
}
