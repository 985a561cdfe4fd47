pub mod a001_vessel;
pub mod a002_logbook;
pub mod common;
