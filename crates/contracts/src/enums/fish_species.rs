use serde::{Deserialize, Serialize};

/// Виды рыбы, принимаемые в логбуке
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FishSpecies {
    Tuna,
    Cakalang,
    Tongkol,
    Kembung,
    Tenggiri,
    Kakap,
    Barakuda,
    Layur,
    Selar,
    Teri,
}

impl FishSpecies {
    /// Получить код вида
    pub fn code(&self) -> &'static str {
        match self {
            FishSpecies::Tuna => "tuna",
            FishSpecies::Cakalang => "cakalang",
            FishSpecies::Tongkol => "tongkol",
            FishSpecies::Kembung => "kembung",
            FishSpecies::Tenggiri => "tenggiri",
            FishSpecies::Kakap => "kakap",
            FishSpecies::Barakuda => "barakuda",
            FishSpecies::Layur => "layur",
            FishSpecies::Selar => "selar",
            FishSpecies::Teri => "teri",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            FishSpecies::Tuna => "Tuna",
            FishSpecies::Cakalang => "Cakalang",
            FishSpecies::Tongkol => "Tongkol",
            FishSpecies::Kembung => "Kembung",
            FishSpecies::Tenggiri => "Tenggiri",
            FishSpecies::Kakap => "Kakap",
            FishSpecies::Barakuda => "Barakuda",
            FishSpecies::Layur => "Layur",
            FishSpecies::Selar => "Selar",
            FishSpecies::Teri => "Teri",
        }
    }

    /// Получить все виды в порядке формы ввода
    pub fn all() -> Vec<FishSpecies> {
        vec![
            FishSpecies::Tuna,
            FishSpecies::Cakalang,
            FishSpecies::Tongkol,
            FishSpecies::Kembung,
            FishSpecies::Tenggiri,
            FishSpecies::Kakap,
            FishSpecies::Barakuda,
            FishSpecies::Layur,
            FishSpecies::Selar,
            FishSpecies::Teri,
        ]
    }

    /// Парсинг из строки (код или название, без учёта регистра)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

impl std::fmt::Display for FishSpecies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_ignores_case() {
        assert_eq!(FishSpecies::from_code("Tuna"), Some(FishSpecies::Tuna));
        assert_eq!(FishSpecies::from_code(" cakalang "), Some(FishSpecies::Cakalang));
        assert_eq!(FishSpecies::from_code("salmon"), None);
    }

    #[test]
    fn test_all_codes_round_trip() {
        for species in FishSpecies::all() {
            assert_eq!(FishSpecies::from_code(species.code()), Some(species));
        }
        assert_eq!(FishSpecies::all().len(), 10);
    }
}
