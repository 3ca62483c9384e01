use serde::{Deserialize, Serialize};

/// The data-subject request kinds granted by the Indiana Consumer Data
/// Protection Act (ICDPA, IC 24-15), effective 2026 and enforced by the
/// Indiana Attorney General.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataRight {
    Access,
    #[default]
    Delete,
    Correct,
    Portability,
    OptOut,
}

impl DataRight {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Access,
            Self::Delete,
            Self::Correct,
            Self::Portability,
            Self::OptOut,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Delete => "delete",
            Self::Correct => "correct",
            Self::Portability => "portability",
            Self::OptOut => "opt-out",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Access => "Right to Access",
            Self::Delete => "Right to Delete",
            Self::Correct => "Right to Correct",
            Self::Portability => "Right to Data Portability",
            Self::OptOut => "Right to Opt-Out",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Access => {
                "Request a copy of the personal data a company has collected about you, including categories, specific pieces, and how it is used."
            }
            Self::Delete => {
                "Request that a company delete all personal data they have collected about you, subject to certain legal exceptions."
            }
            Self::Correct => {
                "Request that a company correct inaccurate personal data they hold about you."
            }
            Self::Portability => {
                "Request a copy of your personal data in a portable, machine-readable format so you can transfer it to another service."
            }
            Self::OptOut => {
                "Direct a company to stop selling, sharing, or using your personal data for targeted advertising or profiling."
            }
        }
    }

    /// Suggested download name for a generated request letter.
    pub fn request_filename(self) -> String {
        format!("icdpa-{}-request.txt", self.id())
    }
}

/// Categories of personal data a request can be scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataCategory {
    PurchaseHistory,
    BrowsingData,
    LocationData,
    EmailContact,
    SocialDemographic,
    Biometric,
    Financial,
    Health,
    Other,
}

impl DataCategory {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::PurchaseHistory,
            Self::BrowsingData,
            Self::LocationData,
            Self::EmailContact,
            Self::SocialDemographic,
            Self::Biometric,
            Self::Financial,
            Self::Health,
            Self::Other,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::PurchaseHistory => "purchase_history",
            Self::BrowsingData => "browsing_data",
            Self::LocationData => "location_data",
            Self::EmailContact => "email_contact",
            Self::SocialDemographic => "social_demographic",
            Self::Biometric => "biometric",
            Self::Financial => "financial",
            Self::Health => "health",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PurchaseHistory => "Purchase History",
            Self::BrowsingData => "Browsing Data",
            Self::LocationData => "Location Data",
            Self::EmailContact => "Email / Contact Info",
            Self::SocialDemographic => "Social / Demographic Data",
            Self::Biometric => "Biometric Data",
            Self::Financial => "Financial Information",
            Self::Health => "Health / Medical Data",
            Self::Other => "Other (describe in reference field)",
        }
    }
}

/// Input collected for letter generation.
///
/// Lives in memory only for the duration of one generation call: the form is
/// never logged, stored, or re-serialized, which is why this type derives
/// `Deserialize` but not `Serialize`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LetterForm {
    pub your_name: String,
    pub your_address: String,
    pub your_email: String,
    pub company_name: String,
    pub company_address: String,
    pub right: DataRight,
    pub categories: Vec<DataCategory>,
    pub account_reference: String,
}
