use crate::GreenSortError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Resin families covered by the education content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlasticType {
    Pet,
    Hdpe,
    Ldpe,
    Pp,
    Ps,
}

impl PlasticType {
    pub fn code(&self) -> &'static str {
        match self {
            PlasticType::Pet => "PET",
            PlasticType::Hdpe => "HDPE",
            PlasticType::Ldpe => "LDPE",
            PlasticType::Pp => "PP",
            PlasticType::Ps => "PS",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            PlasticType::Pet => "Polyethylene Terephthalate",
            PlasticType::Hdpe => "High-Density Polyethylene",
            PlasticType::Ldpe => "Low-Density Polyethylene",
            PlasticType::Pp => "Polypropylene",
            PlasticType::Ps => "Polystyrene",
        }
    }

    /// "PET (Polyethylene Terephthalate)"
    pub fn title(&self) -> String {
        format!("{} ({})", self.code(), self.full_name())
    }

    pub fn all() -> &'static [PlasticType] {
        &[
            PlasticType::Pet,
            PlasticType::Hdpe,
            PlasticType::Ldpe,
            PlasticType::Pp,
            PlasticType::Ps,
        ]
    }
}

impl fmt::Display for PlasticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PlasticType {
    type Err = GreenSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PlasticType::all()
            .iter()
            .copied()
            .find(|p| p.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GreenSortError::UnknownPlastic(s.to_string()))
    }
}
