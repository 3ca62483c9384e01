mod data;

use serde::Serialize;

/// One state's minimum wage trajectory, with the display color the charting
/// layer uses for its line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StateWageSchedule {
    pub state: &'static str,
    pub color: &'static str,
    pub points: &'static [WagePoint],
}

/// Rates effective at the start of `year`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WagePoint {
    pub year: i32,
    pub date: &'static str,
    pub standard: f64,
    pub tipped: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

/// All tabulated schedules in display order.
pub fn schedules() -> &'static [StateWageSchedule] {
    data::SCHEDULES
}

pub fn schedule_for(state: &str) -> Option<&'static StateWageSchedule> {
    data::SCHEDULES
        .iter()
        .find(|schedule| schedule.state.eq_ignore_ascii_case(state))
}

/// The rates in effect for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrentRate {
    pub standard: f64,
    pub tipped: f64,
    pub year: i32,
}

/// Resolves the most recent data point at or before `as_of_year`. When the
/// target year predates every point, the earliest point is returned rather
/// than nothing. Callers supply the year; this function never reads a clock.
pub fn current_rate(schedule: &StateWageSchedule, as_of_year: i32) -> CurrentRate {
    let mut sorted: Vec<&WagePoint> = schedule.points.iter().collect();
    sorted.sort_by(|a, b| b.year.cmp(&a.year));

    let point = sorted
        .iter()
        .find(|point| point.year <= as_of_year)
        .or_else(|| sorted.last())
        .expect("wage schedules are never empty");

    CurrentRate {
        standard: point.standard,
        tipped: point.tipped,
        year: point.year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse_schedule() -> StateWageSchedule {
        static POINTS: &[WagePoint] = &[
            WagePoint {
                year: 2023,
                date: "Jan 2023",
                standard: 10.0,
                tipped: 5.0,
                note: None,
            },
            WagePoint {
                year: 2024,
                date: "Jan 2024",
                standard: 11.0,
                tipped: 5.5,
                note: None,
            },
            WagePoint {
                year: 2026,
                date: "Jan 2026",
                standard: 12.0,
                tipped: 6.0,
                note: None,
            },
        ];
        StateWageSchedule {
            state: "Testonia",
            color: "#000000",
            points: POINTS,
        }
    }

    #[test]
    fn resolves_most_recent_point_at_or_before_target() {
        let rate = current_rate(&sparse_schedule(), 2025);
        assert_eq!(rate.year, 2024);
        assert_eq!(rate.standard, 11.0);
    }

    #[test]
    fn exact_year_match_is_used_directly() {
        let rate = current_rate(&sparse_schedule(), 2026);
        assert_eq!(rate.year, 2026);
    }

    #[test]
    fn target_before_all_points_falls_back_to_earliest() {
        let rate = current_rate(&sparse_schedule(), 2020);
        assert_eq!(rate.year, 2023);
        assert_eq!(rate.tipped, 5.0);
    }

    #[test]
    fn tabulated_schedules_have_unique_years() {
        for schedule in schedules() {
            let mut years: Vec<i32> = schedule.points.iter().map(|point| point.year).collect();
            let before = years.len();
            years.sort_unstable();
            years.dedup();
            assert_eq!(before, years.len(), "duplicate year in {}", schedule.state);
        }
    }

    #[test]
    fn lookup_by_state_is_case_insensitive() {
        assert!(schedule_for("michigan").is_some());
        assert!(schedule_for("Wyoming").is_none());
    }
}
