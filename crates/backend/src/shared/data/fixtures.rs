//! Начальные данные: суда и логбуки рейсов марта 2024

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use contracts::domain::a001_vessel::{Vessel, VesselId, VesselRegistration, VesselStatus};
use contracts::domain::a002_logbook::{
    CatchEntry, Location, Logbook, LogbookId, LogbookSubmission, TripPeriod,
};
use contracts::enums::{CatchUnit, FishSpecies, FishingGear};
use contracts::shared::WorkflowError;

fn date(raw: &str) -> Result<NaiveDate, WorkflowError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| WorkflowError::invalid_input(format!("bad fixture date '{}': {}", raw, e)))
}

fn timestamp(raw: &str) -> Result<DateTime<Utc>, WorkflowError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
        .map(|dt| dt.and_utc())
        .map_err(|e| WorkflowError::invalid_input(format!("bad fixture timestamp '{}': {}", raw, e)))
}

struct VesselSeed {
    id: i64,
    name: &'static str,
    tonnage_class: &'static str,
    owner: &'static str,
    captain: &'static str,
    home_port: &'static str,
    status: VesselStatus,
    last_trip: &'static str,
    total_trips: u32,
}

const VESSELS: &[VesselSeed] = &[
    VesselSeed {
        id: 1,
        name: "Bahari Jaya I",
        tonnage_class: "25 GT",
        owner: "CV. Bahari Sejahtera",
        captain: "Budi Santoso",
        home_port: "Muara Baru",
        status: VesselStatus::Active,
        last_trip: "2024-03-15",
        total_trips: 24,
    },
    VesselSeed {
        id: 2,
        name: "Nelayan Maju",
        tonnage_class: "18 GT",
        owner: "Koperasi Nelayan Maju",
        captain: "Slamet Riadi",
        home_port: "Tanjung Priok",
        status: VesselStatus::Active,
        last_trip: "2024-03-14",
        total_trips: 31,
    },
    VesselSeed {
        id: 3,
        name: "Samudra Indah",
        tonnage_class: "32 GT",
        owner: "PT. Samudra Indah",
        captain: "Agus Wijaya",
        home_port: "Paotere",
        status: VesselStatus::Maintenance,
        last_trip: "2024-03-10",
        total_trips: 18,
    },
    VesselSeed {
        id: 4,
        name: "Harapan Jaya",
        tonnage_class: "22 GT",
        owner: "Yayasan Nelayan Harapan",
        captain: "Dedi Kurniawan",
        home_port: "Muara Baru",
        status: VesselStatus::Active,
        last_trip: "2024-03-16",
        total_trips: 27,
    },
];

/// Реестр судов
pub fn vessels() -> Result<Vec<Vessel>, WorkflowError> {
    VESSELS
        .iter()
        .map(|seed| {
            let registration = VesselRegistration {
                name: seed.name.into(),
                tonnage_class: seed.tonnage_class.into(),
                owner: seed.owner.into(),
                captain: seed.captain.into(),
                home_port: seed.home_port.into(),
            };
            let last_trip = date(seed.last_trip)?;
            let mut vessel = Vessel::register(VesselId(seed.id), registration, last_trip)?;
            vessel.status = seed.status;
            vessel.total_trips = seed.total_trips;
            Ok(vessel)
        })
        .collect()
}

struct LogbookSeed {
    id: i64,
    vessel_id: i64,
    vessel_name: &'static str,
    captain: &'static str,
    submitted_at: &'static str,
    departure: &'static str,
    return_date: &'static str,
    location: (f64, f64, &'static str),
    catches: &'static [(FishSpecies, f64, FishingGear)],
    photos: &'static [&'static str],
    notes: &'static str,
    approved_at: Option<&'static str>,
}

const LOGBOOKS: &[LogbookSeed] = &[
    LogbookSeed {
        id: 1,
        vessel_id: 1,
        vessel_name: "Bahari Jaya I",
        captain: "Budi Santoso",
        submitted_at: "2024-03-16 09:30",
        departure: "2024-03-10",
        return_date: "2024-03-15",
        location: (-6.175, 106.827, "Laut Jawa"),
        catches: &[
            (FishSpecies::Tuna, 150.0, FishingGear::PancingTonda),
            (FishSpecies::Cakalang, 200.0, FishingGear::PancingTonda),
        ],
        photos: &[
            "https://images.unsplash.com/photo-1544943910-4c1dc44aab44?w=300",
            "https://images.unsplash.com/photo-1535591273668-578e31182c4f?w=300",
        ],
        notes: "Cuaca baik, angin tenang. Hasil tangkapan memuaskan.",
        approved_at: None,
    },
    LogbookSeed {
        id: 2,
        vessel_id: 3,
        vessel_name: "Samudra Indah",
        captain: "Agus Wijaya",
        submitted_at: "2024-03-16 14:15",
        departure: "2024-03-12",
        return_date: "2024-03-16",
        location: (-5.124, 119.456, "Laut Banda"),
        catches: &[(FishSpecies::Tenggiri, 180.0, FishingGear::JaringInsang)],
        photos: &["https://images.unsplash.com/photo-1544943910-4c1dc44aab44?w=300"],
        notes: "Trip singkat karena cuaca mulai buruk.",
        approved_at: None,
    },
    LogbookSeed {
        id: 3,
        vessel_id: 4,
        vessel_name: "Harapan Jaya",
        captain: "Dedi Kurniawan",
        submitted_at: "2024-03-17 08:45",
        departure: "2024-03-14",
        return_date: "2024-03-16",
        location: (-6.200, 106.850, "Teluk Jakarta"),
        catches: &[
            (FishSpecies::Kembung, 80.0, FishingGear::PukatCincin),
            (FishSpecies::Selar, 60.0, FishingGear::PukatCincin),
        ],
        photos: &[],
        notes: "Hasil tangkapan menurun dibanding trip sebelumnya.",
        approved_at: None,
    },
    LogbookSeed {
        id: 4,
        vessel_id: 2,
        vessel_name: "Nelayan Maju",
        captain: "Slamet Riadi",
        submitted_at: "2024-03-14 18:20",
        departure: "2024-03-09",
        return_date: "2024-03-14",
        location: (-5.920, 105.870, "Selat Sunda"),
        catches: &[
            (FishSpecies::Tongkol, 1800.0, FishingGear::PukatCincin),
            (FishSpecies::Kembung, 1400.0, FishingGear::PukatCincin),
        ],
        photos: &[],
        notes: "",
        approved_at: Some("2024-03-15 10:00"),
    },
    LogbookSeed {
        id: 5,
        vessel_id: 1,
        vessel_name: "Bahari Jaya I",
        captain: "Budi Santoso",
        submitted_at: "2024-01-26 07:40",
        departure: "2024-01-20",
        return_date: "2024-01-25",
        location: (-6.010, 106.700, "Laut Jawa"),
        catches: &[
            (FishSpecies::Tuna, 120.0, FishingGear::RawaiTuna),
            (FishSpecies::Cakalang, 40.0, FishingGear::PancingTonda),
        ],
        photos: &[],
        notes: "",
        approved_at: Some("2024-01-27 11:15"),
    },
    LogbookSeed {
        id: 6,
        vessel_id: 3,
        vessel_name: "Samudra Indah",
        captain: "Agus Wijaya",
        submitted_at: "2024-02-08 16:05",
        departure: "2024-02-03",
        return_date: "2024-02-07",
        location: (-5.300, 119.300, "Laut Banda"),
        catches: &[
            (FishSpecies::Tenggiri, 90.0, FishingGear::JaringInsang),
            (FishSpecies::Kakap, 30.0, FishingGear::PancingUlur),
        ],
        photos: &[],
        notes: "",
        approved_at: Some("2024-02-09 09:00"),
    },
];

fn build_logbook(seed: &LogbookSeed) -> Result<Logbook, WorkflowError> {
    let entries = seed
        .catches
        .iter()
        .map(|&(species, quantity, gear)| {
            CatchEntry::new(species, quantity, CatchUnit::Kg, Some(gear))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let (lat, lng, name) = seed.location;
    let submission = LogbookSubmission {
        vessel_id: VesselId(seed.vessel_id),
        vessel_name: seed.vessel_name.into(),
        captain: seed.captain.into(),
        trip: TripPeriod::new(date(seed.departure)?, date(seed.return_date)?)?,
        location: Location::new(lat, lng, Some(name.into()))?,
        entries,
        photos: Vec::new(),
        notes: Some(seed.notes.to_string()).filter(|n| !n.is_empty()),
    };

    let mut logbook =
        Logbook::from_submission(LogbookId(seed.id), submission, timestamp(seed.submitted_at)?);
    logbook.photos = seed.photos.iter().map(|p| p.to_string()).collect();
    if let Some(at) = seed.approved_at {
        logbook.approve(timestamp(at)?)?;
    }
    Ok(logbook)
}

/// Все логбуки: три ожидают проверки, остальные утверждены
pub fn logbooks() -> Result<Vec<Logbook>, WorkflowError> {
    LOGBOOKS.iter().map(build_logbook).collect()
}

/// Очередь проверки
pub fn pending_logbooks() -> Result<Vec<Logbook>, WorkflowError> {
    Ok(logbooks()?.into_iter().filter(|l| l.is_pending()).collect())
}

/// Готовый к отправке логбук судна Bahari Jaya I
pub fn sample_submission() -> Result<LogbookSubmission, WorkflowError> {
    Ok(LogbookSubmission {
        vessel_id: VesselId(1),
        vessel_name: "Bahari Jaya I".into(),
        captain: "Budi Santoso".into(),
        trip: TripPeriod::new(date("2024-03-20")?, date("2024-03-24")?)?,
        location: Location::new(-6.175, 106.827, Some("Laut Jawa".into()))?,
        entries: vec![CatchEntry::new(
            FishSpecies::Tuna,
            210.0,
            CatchUnit::Kg,
            Some(FishingGear::PancingTonda),
        )?],
        photos: Vec::new(),
        notes: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_logbook::LogbookStatus;

    #[test]
    fn test_fixtures_build() {
        let vessels = vessels().unwrap();
        assert_eq!(vessels.len(), 4);
        assert_eq!(vessels[2].status, VesselStatus::Maintenance);

        let logbooks = logbooks().unwrap();
        assert_eq!(logbooks.len(), 6);
        assert_eq!(logbooks[0].total_quantity(), 350.0);
        assert_eq!(logbooks[0].photos.len(), 2);
        assert_eq!(logbooks[3].status, LogbookStatus::Approved);
        assert_eq!(pending_logbooks().unwrap().len(), 3);
    }
}
