pub mod aggregate;

pub use aggregate::{Vessel, VesselId, VesselRegistration, VesselStatus};
