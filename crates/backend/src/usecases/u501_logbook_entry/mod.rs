pub mod draft_store;
pub mod executor;

pub use draft_store::DraftStore;
pub use executor::LogbookEntryExecutor;
