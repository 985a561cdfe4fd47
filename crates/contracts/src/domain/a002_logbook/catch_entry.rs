use crate::enums::{CatchUnit, FishSpecies, FishingGear};
use crate::shared::WorkflowError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID строки улова
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatchEntryId(pub Uuid);

impl CatchEntryId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for CatchEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Строка улова: вид, количество, единица, орудие лова
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchEntry {
    pub id: CatchEntryId,
    pub species: FishSpecies,
    pub quantity: f64,
    pub unit: CatchUnit,
    pub gear: Option<FishingGear>,
}

impl CatchEntry {
    /// Создать строку улова; количество должно быть конечным положительным числом
    pub fn new(
        species: FishSpecies,
        quantity: f64,
        unit: CatchUnit,
        gear: Option<FishingGear>,
    ) -> Result<Self, WorkflowError> {
        Self::validate_quantity(quantity)?;
        Ok(Self {
            id: CatchEntryId::new_v4(),
            species,
            quantity,
            unit,
            gear,
        })
    }

    /// Разобрать количество из текста поля ввода
    pub fn parse_quantity(raw: &str) -> Result<f64, WorkflowError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(WorkflowError::invalid_input("catch quantity is required"));
        }
        let value: f64 = raw.replace(',', ".").parse().map_err(|_| {
            WorkflowError::invalid_input(format!("catch quantity '{}' is not a number", raw))
        })?;
        Self::validate_quantity(value)?;
        Ok(value)
    }

    /// Вес строки в кг; `None` для поштучного учёта
    pub fn weight_kg(&self) -> Option<f64> {
        self.unit.to_kg(self.quantity)
    }

    fn validate_quantity(quantity: f64) -> Result<(), WorkflowError> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(WorkflowError::invalid_input(
                "catch quantity must be a finite positive number",
            ));
        }
        Ok(())
    }
}

/// Сумма количеств по строкам
///
/// Единственный источник итога улова: ни черновик, ни логбук не хранят итог отдельно.
pub fn total_quantity(entries: &[CatchEntry]) -> f64 {
    entries.iter().map(|e| e.quantity).sum()
}

/// Вес улова в кг: тонны переводятся, поштучные строки не учитываются
pub fn total_weight_kg(entries: &[CatchEntry]) -> f64 {
    entries.iter().filter_map(CatchEntry::weight_kg).sum()
}

/// Сумма поштучных строк ("ekor")
pub fn total_count(entries: &[CatchEntry]) -> f64 {
    entries
        .iter()
        .filter(|e| e.unit == CatchUnit::Count)
        .map(|e| e.quantity)
        .sum()
}
