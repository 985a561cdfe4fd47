pub mod aggregate;
pub mod catch_entry;
pub mod photo;
pub mod query;

pub use aggregate::{
    Location, Logbook, LogbookId, LogbookStatus, LogbookSubmission, ReviewDecision, TripPeriod,
};
pub use catch_entry::{total_count, total_quantity, total_weight_kg, CatchEntry, CatchEntryId};
pub use photo::PhotoAttachment;
pub use query::{filter_logbooks, LogbookListQuery};
