pub mod draft;
pub mod form;

pub use draft::{DraftStatus, LogbookDraft};
pub use form::{CatchEntryForm, TripForm};

use crate::usecases::common::UseCaseMetadata;

pub struct LogbookEntry;

impl UseCaseMetadata for LogbookEntry {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "logbook_entry"
    }

    fn display_name() -> &'static str {
        "Input Logbook"
    }

    fn description() -> &'static str {
        "Ввод улова за рейс оператором судна и отправка логбука на проверку в DKP"
    }
}
