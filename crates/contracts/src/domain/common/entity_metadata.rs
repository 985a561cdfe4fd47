use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Метаданные экземпляра агрегата (lifecycle tracking)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Дата создания записи
    pub created_at: DateTime<Utc>,
    /// Дата последнего изменения
    pub updated_at: DateTime<Utc>,
    /// Номер изменения, растёт при каждом переходе состояния
    pub version: i32,
}

impl EntityMetadata {
    /// Создать новые метаданные для нового агрегата
    pub fn new() -> Self {
        Self::created_at(Utc::now())
    }

    /// Метаданные с заданным моментом создания (фикстуры, тесты)
    pub fn created_at(at: DateTime<Utc>) -> Self {
        Self {
            created_at: at,
            updated_at: at,
            version: 0,
        }
    }

    /// Зафиксировать изменение
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
        self.version += 1;
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
