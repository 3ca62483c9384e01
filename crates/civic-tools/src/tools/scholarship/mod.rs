mod counties;

use serde::Serialize;

/// Coarse funding band for a school corporation. Descriptive metadata for
/// display; award math always uses the corporation's own `per_pupil` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FundingTier {
    High,
    MidHigh,
    Mid,
    Rural,
}

impl FundingTier {
    pub const fn ordered() -> [Self; 4] {
        [Self::High, Self::MidHigh, Self::Mid, Self::Rural]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High-funding suburban",
            Self::MidHigh => "Urban",
            Self::Mid => "Mid-size/suburban",
            Self::Rural => "Rural",
        }
    }

    /// Approximate 2026-27 per-pupil benchmark for the tier.
    pub const fn benchmark_per_pupil(self) -> u32 {
        match self {
            Self::High => 8200,
            Self::MidHigh => 7800,
            Self::Mid => 7400,
            Self::Rural => 6800,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchoolCorporation {
    pub name: &'static str,
    pub tier: FundingTier,
    pub per_pupil: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct County {
    pub name: &'static str,
    pub corporations: &'static [SchoolCorporation],
}

/// Scholarship award share of per-pupil funding. HEA 1001-2025 schedules
/// income-limit removal beginning June 29, 2026; awards are approximately 90%
/// of the district's per-pupil public funding amount.
pub const SCHOLARSHIP_PCT: f64 = 0.9;

/// Statewide award range for context display.
pub const AWARD_RANGE_MIN: u32 = 6100;
pub const AWARD_RANGE_MAX: u32 = 7400;

/// All 92 Indiana counties with their school corporations, in display order.
pub fn counties() -> &'static [County] {
    counties::COUNTIES
}

/// The school corporations for a county; the empty slice when the county is
/// unknown, never an error.
pub fn county_corporations(county_name: &str) -> &'static [SchoolCorporation] {
    counties::COUNTIES
        .iter()
        .find(|county| county.name == county_name)
        .map(|county| county.corporations)
        .unwrap_or(&[])
}

pub fn find_corporation(
    county_name: &str,
    corporation_name: &str,
) -> Option<&'static SchoolCorporation> {
    county_corporations(county_name)
        .iter()
        .find(|corporation| corporation.name == corporation_name)
}

/// Estimated annual award: 90% of per-pupil funding, rounded to the dollar.
pub fn estimated_award(per_pupil: u32) -> u32 {
    (per_pupil as f64 * SCHOLARSHIP_PCT).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn award_is_ninety_percent_rounded() {
        assert_eq!(estimated_award(7400), 6660);
        assert_eq!(estimated_award(8200), 7380);
        assert_eq!(estimated_award(0), 0);
    }

    #[test]
    fn hierarchy_covers_all_ninety_two_counties() {
        assert_eq!(counties().len(), 92);
        for county in counties() {
            assert!(
                !county.corporations.is_empty(),
                "county {} has no corporations",
                county.name
            );
        }
    }

    #[test]
    fn unknown_county_yields_empty_slice() {
        assert!(county_corporations("Cook").is_empty());
    }

    #[test]
    fn known_county_lookup_returns_its_corporations() {
        let units = county_corporations("Hamilton");
        assert_eq!(units.len(), 5);
        assert!(units.iter().any(|unit| unit.name == "Carmel Clay Schools"));

        let carmel = find_corporation("Hamilton", "Carmel Clay Schools")
            .expect("corporation is in the table");
        assert_eq!(carmel.tier, FundingTier::High);
        assert_eq!(carmel.per_pupil, 8200);
    }

    #[test]
    fn tier_benchmarks_match_tabled_amounts() {
        for county in counties() {
            for corporation in county.corporations {
                assert_eq!(
                    corporation.per_pupil,
                    corporation.tier.benchmark_per_pupil(),
                    "{} diverges from its tier benchmark",
                    corporation.name
                );
            }
        }
    }
}
