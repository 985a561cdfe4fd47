pub mod catch_unit;
pub mod fish_species;
pub mod fishing_gear;

pub use catch_unit::CatchUnit;
pub use fish_species::FishSpecies;
pub use fishing_gear::FishingGear;
