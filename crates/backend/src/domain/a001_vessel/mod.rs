pub mod repository;
pub mod service;

pub use repository::VesselRepository;
pub use service::{VesselService, VesselStatusCounts};
