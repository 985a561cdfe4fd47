use super::repository::VesselRepository;
use chrono::NaiveDate;
use contracts::domain::a001_vessel::{Vessel, VesselId, VesselRegistration, VesselStatus};
use contracts::domain::common::AggregateRoot;
use contracts::shared::WorkflowError;
use serde::Serialize;

/// Счётчики карточек над таблицей судов
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VesselStatusCounts {
    pub total: usize,
    pub active: usize,
    pub maintenance: usize,
    pub inactive: usize,
    pub total_trips: u32,
}

/// Реестр судов: регистрация, поиск, статистика
#[derive(Debug, Default)]
pub struct VesselService {
    repository: VesselRepository,
}

impl VesselService {
    pub fn new(repository: VesselRepository) -> Self {
        Self { repository }
    }

    /// Регистрация нового судна
    ///
    /// При ошибке валидации реестр не меняется.
    pub async fn register(
        &self,
        registration: VesselRegistration,
        registered_on: NaiveDate,
    ) -> Result<Vessel, WorkflowError> {
        match self.repository.insert_next(registration, registered_on).await {
            Ok(vessel) => {
                tracing::info!("Vessel {} registered: {}", vessel.code(), vessel.name);
                Ok(vessel)
            }
            Err(e) => {
                tracing::warn!("Vessel registration rejected: {}", e);
                Err(e)
            }
        }
    }

    pub async fn get_by_id(&self, id: VesselId) -> Result<Vessel, WorkflowError> {
        self.repository
            .get_by_id(id)
            .await
            .ok_or_else(|| WorkflowError::not_found("vessel", id))
    }

    pub async fn list_all(&self) -> Vec<Vessel> {
        self.repository.list_all().await
    }

    /// Поиск по названию, капитану или владельцу
    pub async fn search(&self, term: &str) -> Vec<Vessel> {
        self.repository
            .list_all()
            .await
            .into_iter()
            .filter(|v| v.matches_search(term))
            .collect()
    }

    pub async fn status_counts(&self) -> VesselStatusCounts {
        let vessels = self.repository.list_all().await;
        let mut counts = VesselStatusCounts {
            total: vessels.len(),
            ..Default::default()
        };
        for vessel in &vessels {
            match vessel.status {
                VesselStatus::Active => counts.active += 1,
                VesselStatus::Maintenance => counts.maintenance += 1,
                VesselStatus::Inactive => counts.inactive += 1,
            }
            counts.total_trips += vessel.total_trips;
        }
        counts
    }
}
