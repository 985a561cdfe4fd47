use crate::domain::a002_logbook::{CatchEntry, Location, TripPeriod};
use crate::enums::{CatchUnit, FishSpecies, FishingGear};
use crate::shared::WorkflowError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Поля "Informasi Trip" и "Lokasi Tangkapan" в том виде, как их ввёл оператор
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripForm {
    /// YYYY-MM-DD
    pub departure_date: String,
    /// YYYY-MM-DD
    pub return_date: String,
    /// Например "-6.175392"
    pub latitude: String,
    /// Например "106.827153"
    pub longitude: String,
    /// Название района промысла, необязательно
    pub fishing_ground: String,
}

impl TripForm {
    pub fn parse_trip(&self) -> Result<TripPeriod, WorkflowError> {
        let departure = parse_date("departure date", &self.departure_date)?;
        let return_date = parse_date("return date", &self.return_date)?;
        TripPeriod::new(departure, return_date)
    }

    pub fn parse_location(&self) -> Result<Location, WorkflowError> {
        let lat = parse_coordinate("latitude", &self.latitude)?;
        let lng = parse_coordinate("longitude", &self.longitude)?;
        Location::new(lat, lng, Some(self.fishing_ground.clone()))
    }
}

fn parse_date(label: &str, raw: &str) -> Result<NaiveDate, WorkflowError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(WorkflowError::invalid_input(format!("{} is required", label)));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        WorkflowError::invalid_input(format!("{} '{}' must be YYYY-MM-DD", label, raw))
    })
}

fn parse_coordinate(label: &str, raw: &str) -> Result<f64, WorkflowError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(WorkflowError::invalid_input(format!("{} is required", label)));
    }
    raw.replace(',', ".")
        .parse::<f64>()
        .map_err(|_| WorkflowError::invalid_input(format!("{} '{}' is not a number", label, raw)))
}

/// Поля "Detail Hasil Tangkapan" до нажатия "Tambah ke Daftar"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatchEntryForm {
    pub species: Option<FishSpecies>,
    /// Количество как текст поля ввода
    pub quantity: String,
    pub unit: CatchUnit,
    pub gear: Option<FishingGear>,
}

impl CatchEntryForm {
    /// Кнопка добавления активна только при заполненных виде и количестве
    pub fn is_complete(&self) -> bool {
        self.species.is_some() && !self.quantity.trim().is_empty()
    }

    pub fn to_entry(&self) -> Result<CatchEntry, WorkflowError> {
        let species = self
            .species
            .ok_or_else(|| WorkflowError::invalid_input("fish species is required"))?;
        let quantity = CatchEntry::parse_quantity(&self.quantity)?;
        CatchEntry::new(species, quantity, self.unit, self.gear)
    }

    /// Очистить вид, количество и орудие; единица измерения сохраняется
    pub fn clear_item_fields(&mut self) {
        self.species = None;
        self.quantity.clear();
        self.gear = None;
    }
}
