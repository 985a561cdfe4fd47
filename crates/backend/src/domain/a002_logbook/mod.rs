pub mod repository;
pub mod service;

pub use repository::LogbookRepository;
pub use service::{LogbookReviewService, LogbookStatusCounts};
