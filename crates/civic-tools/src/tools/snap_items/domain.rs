use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Beverages,
    Snacks,
    Candy,
    Dairy,
    Frozen,
    Supplements,
    Staples,
    Baby,
}

impl ItemCategory {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Beverages,
            Self::Snacks,
            Self::Candy,
            Self::Dairy,
            Self::Frozen,
            Self::Supplements,
            Self::Staples,
            Self::Baby,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Beverages => "Beverages",
            Self::Snacks => "Snacks",
            Self::Candy => "Candy",
            Self::Dairy => "Dairy",
            Self::Frozen => "Frozen",
            Self::Supplements => "Supplements",
            Self::Staples => "Staples",
            Self::Baby => "Baby",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    Eligible,
    NotEligible,
    CheckLabel,
}

impl ItemStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Eligible, Self::NotEligible, Self::CheckLabel]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Eligible => "Eligible",
            Self::NotEligible => "Not Eligible",
            Self::CheckLabel => "Check Label",
        }
    }
}

/// One grocery item in the eligibility catalog. The catalog is seed data,
/// read-only at runtime; `id` values are stable and unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnapItem {
    pub id: u32,
    pub name: &'static str,
    pub category: ItemCategory,
    pub status: ItemStatus,
    pub reason: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'static str>,
}
