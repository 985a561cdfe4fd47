pub mod service;

pub use service::{build_overview, OverviewService};
