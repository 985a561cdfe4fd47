pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
pub mod usecases;
