use serde::{Deserialize, Serialize};

/// Единица измерения улова
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatchUnit {
    #[default]
    Kg,
    Ton,
    /// Поштучный учёт ("ekor")
    Count,
}

impl CatchUnit {
    pub fn code(&self) -> &'static str {
        match self {
            CatchUnit::Kg => "kg",
            CatchUnit::Ton => "ton",
            CatchUnit::Count => "count",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "kg" => Some(CatchUnit::Kg),
            "ton" => Some(CatchUnit::Ton),
            "count" | "ekor" => Some(CatchUnit::Count),
            _ => None,
        }
    }

    /// Количество в килограммах; поштучный учёт в вес не переводится
    pub fn to_kg(&self, quantity: f64) -> Option<f64> {
        match self {
            CatchUnit::Kg => Some(quantity),
            CatchUnit::Ton => Some(quantity * 1000.0),
            CatchUnit::Count => None,
        }
    }
}

impl std::fmt::Display for CatchUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_kg() {
        assert_eq!(CatchUnit::Kg.to_kg(150.0), Some(150.0));
        assert_eq!(CatchUnit::Ton.to_kg(2.0), Some(2000.0));
        assert_eq!(CatchUnit::Count.to_kg(30.0), None);
        assert_eq!(CatchUnit::from_code("ekor"), Some(CatchUnit::Count));
    }
}
