pub mod common;
pub mod u501_logbook_entry;
