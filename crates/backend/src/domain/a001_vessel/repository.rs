use chrono::NaiveDate;
use contracts::domain::a001_vessel::{Vessel, VesselId, VesselRegistration};
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::shared::WorkflowError;
use tokio::sync::RwLock;

/// Реестр судов в памяти процесса
#[derive(Debug, Default)]
pub struct VesselRepository {
    vessels: RwLock<Vec<Vessel>>,
}

impl VesselRepository {
    pub fn new(vessels: Vec<Vessel>) -> Self {
        Self {
            vessels: RwLock::new(vessels),
        }
    }

    /// Все суда в порядке регистрации
    pub async fn list_all(&self) -> Vec<Vessel> {
        self.vessels.read().await.clone()
    }

    pub async fn get_by_id(&self, id: VesselId) -> Option<Vessel> {
        self.vessels
            .read()
            .await
            .iter()
            .find(|v| v.id() == id)
            .cloned()
    }

    /// Зарегистрировать судно под следующим свободным id (max + 1)
    pub async fn insert_next(
        &self,
        registration: VesselRegistration,
        registered_on: NaiveDate,
    ) -> Result<Vessel, WorkflowError> {
        let mut vessels = self.vessels.write().await;
        let id = vessels
            .iter()
            .map(|v| v.id())
            .max()
            .map(|id| id.next())
            .unwrap_or(VesselId(1));
        let vessel = Vessel::register(id, registration, registered_on)?;
        vessels.push(vessel.clone());
        Ok(vessel)
    }
}
