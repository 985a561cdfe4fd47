pub mod error;

pub use error::WorkflowError;
