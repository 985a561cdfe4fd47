use contracts::domain::a002_logbook::{Logbook, LogbookId};
use contracts::domain::common::AggregateRoot;
use tokio::sync::RwLock;

/// Логбуки, известные экрану проверки, в порядке поступления
#[derive(Debug, Default)]
pub struct LogbookRepository {
    logbooks: RwLock<Vec<Logbook>>,
}

impl LogbookRepository {
    pub fn new(logbooks: Vec<Logbook>) -> Self {
        Self {
            logbooks: RwLock::new(logbooks),
        }
    }

    pub async fn list_all(&self) -> Vec<Logbook> {
        self.logbooks.read().await.clone()
    }

    pub async fn get_by_id(&self, id: LogbookId) -> Option<Logbook> {
        self.logbooks
            .read()
            .await
            .iter()
            .find(|l| l.id() == id)
            .cloned()
    }

    /// Заменить сохранённую версию; `false`, если логбука нет
    pub async fn update(&self, logbook: Logbook) -> bool {
        let mut logbooks = self.logbooks.write().await;
        match logbooks.iter_mut().find(|l| l.id() == logbook.id()) {
            Some(slot) => {
                *slot = logbook;
                true
            }
            None => false,
        }
    }

    /// Добавить логбуки с ещё неизвестными id; возвращает число добавленных
    pub async fn insert_missing(&self, incoming: Vec<Logbook>) -> usize {
        let mut logbooks = self.logbooks.write().await;
        let mut inserted = 0;
        for logbook in incoming {
            if logbooks.iter().all(|l| l.id() != logbook.id()) {
                logbooks.push(logbook);
                inserted += 1;
            }
        }
        inserted
    }
}
