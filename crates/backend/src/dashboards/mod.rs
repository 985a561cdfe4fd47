pub mod d400_catch_report;
pub mod d401_overview;
