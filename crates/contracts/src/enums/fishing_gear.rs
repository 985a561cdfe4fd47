use serde::{Deserialize, Serialize};

/// Орудия лова
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FishingGear {
    PancingTonda,
    JaringInsang,
    PukatCincin,
    RawaiTuna,
    JaringLingkar,
    Bubu,
    PancingUlur,
    Payang,
}

impl FishingGear {
    pub fn code(&self) -> &'static str {
        match self {
            FishingGear::PancingTonda => "pancing_tonda",
            FishingGear::JaringInsang => "jaring_insang",
            FishingGear::PukatCincin => "pukat_cincin",
            FishingGear::RawaiTuna => "rawai_tuna",
            FishingGear::JaringLingkar => "jaring_lingkar",
            FishingGear::Bubu => "bubu",
            FishingGear::PancingUlur => "pancing_ulur",
            FishingGear::Payang => "payang",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FishingGear::PancingTonda => "Pancing Tonda",
            FishingGear::JaringInsang => "Jaring Insang",
            FishingGear::PukatCincin => "Pukat Cincin",
            FishingGear::RawaiTuna => "Rawai Tuna",
            FishingGear::JaringLingkar => "Jaring Lingkar",
            FishingGear::Bubu => "Bubu",
            FishingGear::PancingUlur => "Pancing Ulur",
            FishingGear::Payang => "Payang",
        }
    }

    pub fn all() -> Vec<FishingGear> {
        vec![
            FishingGear::PancingTonda,
            FishingGear::JaringInsang,
            FishingGear::PukatCincin,
            FishingGear::RawaiTuna,
            FishingGear::JaringLingkar,
            FishingGear::Bubu,
            FishingGear::PancingUlur,
            FishingGear::Payang,
        ]
    }

    /// Парсинг из кода или отображаемого названия ("Pancing Tonda")
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().to_lowercase().replace(' ', "_");
        Self::all().into_iter().find(|g| g.code() == normalized)
    }
}

impl std::fmt::Display for FishingGear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
