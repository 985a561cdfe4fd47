use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Базовый агрегат с обязательными полями для всех агрегатов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Уникальный идентификатор записи
    pub id: Id,
    /// Бизнес-код записи (например, "KP-001", "LB-0003")
    pub code: String,
    /// Описание/название записи
    pub description: String,
    /// Метаданные жизненного цикла
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self::with_metadata(id, code, description, EntityMetadata::new())
    }

    /// Создать агрегат с существующими метаданными (фикстуры, импорт из шлюза)
    pub fn with_metadata(id: Id, code: String, description: String, metadata: EntityMetadata) -> Self {
        Self {
            id,
            code,
            description,
            metadata,
        }
    }
}
