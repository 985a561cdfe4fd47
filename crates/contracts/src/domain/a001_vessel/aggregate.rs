use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::WorkflowError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// ID типа для судна
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VesselId(pub i64);

impl AggregateId for VesselId {
    fn value(&self) -> i64 {
        self.0
    }
    fn from_value(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for VesselId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Эксплуатационный статус судна
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VesselStatus {
    Active,
    Maintenance,
    Inactive,
}

impl VesselStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VesselStatus::Active => "active",
            VesselStatus::Maintenance => "maintenance",
            VesselStatus::Inactive => "inactive",
        }
    }

    /// Подпись для UI
    pub fn display_name(&self) -> &'static str {
        match self {
            VesselStatus::Active => "Aktif",
            VesselStatus::Maintenance => "Perawatan",
            VesselStatus::Inactive => "Tidak Aktif",
        }
    }
}

impl std::fmt::Display for VesselStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Судно (агрегат a001)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vessel {
    #[serde(flatten)]
    pub base: BaseAggregate<VesselId>,

    /// Название судна (напр. "Bahari Jaya I")
    pub name: String,

    /// Класс валовой вместимости (напр. "25 GT")
    pub tonnage_class: String,

    /// Владелец
    pub owner: String,

    /// Капитан
    pub captain: String,

    /// Порт приписки
    pub home_port: String,

    pub status: VesselStatus,

    /// Дата последнего рейса
    pub last_trip: NaiveDate,

    /// Количество рейсов нарастающим итогом
    pub total_trips: u32,
}

impl Vessel {
    /// Код судна для UI и выгрузок (напр. "KP-001")
    pub fn code_for(id: VesselId) -> String {
        format!("KP-{:03}", id.0)
    }

    /// Создать судно из формы регистрации
    ///
    /// Новое судно всегда активно, без рейсов; дата последнего рейса равна
    /// дате регистрации.
    pub fn register(
        id: VesselId,
        registration: VesselRegistration,
        registered_on: NaiveDate,
    ) -> Result<Self, WorkflowError> {
        let registration = registration.normalized();
        registration.validate()?;

        let base = BaseAggregate::new(id, Self::code_for(id), registration.name.clone());
        Ok(Self {
            base,
            name: registration.name,
            tonnage_class: registration.tonnage_class,
            owner: registration.owner,
            captain: registration.captain,
            home_port: registration.home_port,
            status: VesselStatus::Active,
            last_trip: registered_on,
            total_trips: 0,
        })
    }

    pub fn is_active(&self) -> bool {
        self.status == VesselStatus::Active
    }

    /// Совпадение строки поиска с названием, капитаном или владельцем (без учёта регистра)
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term)
            || self.captain.to_lowercase().contains(&term)
            || self.owner.to_lowercase().contains(&term)
    }
}

impl AggregateRoot for Vessel {
    type Id = VesselId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "vessel"
    }

    fn element_name() -> &'static str {
        "Kapal"
    }

    fn list_name() -> &'static str {
        "Data Kapal & Nelayan"
    }
}

/// Форма регистрации судна
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VesselRegistration {
    pub name: String,
    pub tonnage_class: String,
    pub owner: String,
    pub captain: String,
    pub home_port: String,
}

impl VesselRegistration {
    /// Убрать пробелы по краям всех полей
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            tonnage_class: self.tonnage_class.trim().to_string(),
            owner: self.owner.trim().to_string(),
            captain: self.captain.trim().to_string(),
            home_port: self.home_port.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), WorkflowError> {
        let fields = [
            ("vessel name", &self.name),
            ("tonnage class", &self.tonnage_class),
            ("owner", &self.owner),
            ("captain", &self.captain),
            ("home port", &self.home_port),
        ];
        for (label, value) in fields {
            if value.trim().is_empty() {
                return Err(WorkflowError::invalid_input(format!(
                    "{} is required",
                    label
                )));
            }
        }
        Ok(())
    }
}
