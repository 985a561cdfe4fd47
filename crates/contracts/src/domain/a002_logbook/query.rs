use super::aggregate::{Logbook, LogbookStatus};
use serde::{Deserialize, Serialize};

/// Фильтр списка логбуков на экране проверки
///
/// Чистая операция чтения: оба условия независимы, порядок применения не важен.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogbookListQuery {
    /// Подстрока названия судна или имени капитана, без учёта регистра
    #[serde(default)]
    pub search: Option<String>,
    /// `None`: все статусы
    #[serde(default)]
    pub status: Option<LogbookStatus>,
}

impl LogbookListQuery {
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_status(mut self, status: LogbookStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, logbook: &Logbook) -> bool {
        matches_search(logbook, self.search.as_deref().unwrap_or(""))
            && self.status.map_or(true, |s| matches_status(logbook, s))
    }
}

pub fn matches_search(logbook: &Logbook, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty()
        || logbook.vessel_name.to_lowercase().contains(&term)
        || logbook.captain.to_lowercase().contains(&term)
}

pub fn matches_status(logbook: &Logbook, status: LogbookStatus) -> bool {
    logbook.status == status
}

/// Отфильтровать логбуки, сохраняя исходный порядок
pub fn filter_logbooks<'a>(logbooks: &'a [Logbook], query: &LogbookListQuery) -> Vec<&'a Logbook> {
    logbooks.iter().filter(|l| query.matches(l)).collect()
}
