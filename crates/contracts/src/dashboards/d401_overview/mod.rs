pub mod dto;

pub use dto::{OverviewRequest, OverviewResponse};
