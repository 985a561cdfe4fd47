use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для числовых идентификаторов агрегатов (VesselId, LogbookId)
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Ord + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Числовое значение идентификатора
    fn value(&self) -> i64;

    /// Создать идентификатор из числа
    fn from_value(value: i64) -> Self;

    /// Следующий свободный идентификатор после данного
    fn next(&self) -> Self {
        Self::from_value(self.value() + 1)
    }
}
