mod tables;

pub use tables::{
    max_monthly_benefit, poverty_line, CHILDCARE_LIMIT_PCT, CHILDCARE_SUBSIDY_VALUE,
    SNAP_GROSS_LIMIT_PCT,
};

use serde::Serialize;
use std::io;
use tables::CLIFF_WARNING_RANGE;

/// Simplified SNAP benefit at a given monthly income.
///
/// The full SNAP formula applies several deductions; this model keeps the
/// flat 20% earned-income deduction and the 30% net-income reduction rate,
/// with a hard cutoff at 130% of FPL. The result is an approximation for
/// visualization, not a determination.
pub fn snap_benefit(monthly_income: f64, household_size: u8) -> f64 {
    let gross_limit = poverty_line(household_size) * SNAP_GROSS_LIMIT_PCT;
    if monthly_income > gross_limit {
        return 0.0;
    }

    let net_income = monthly_income * 0.8;
    let reduction = net_income * 0.3;
    (max_monthly_benefit(household_size) - reduction).max(0.0)
}

/// Childcare subsidy at a given monthly income. Binary cliff: the full
/// subsidy at or below 200% of FPL, zero above.
pub fn childcare_benefit(monthly_income: f64, household_size: u8) -> f64 {
    let childcare_limit = poverty_line(household_size) * CHILDCARE_LIMIT_PCT;
    if monthly_income <= childcare_limit {
        CHILDCARE_SUBSIDY_VALUE
    } else {
        0.0
    }
}

/// One sample of the combined benefit curve, suitable for charting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenefitPoint {
    pub income: u32,
    pub snap: u32,
    pub childcare: u32,
    pub total: u32,
}

/// Samples the benefit curve over `0..=max_income` in `step` increments,
/// yielding `max_income / step + 1` points. A zero step is clamped to 1.
pub fn benefit_points(household_size: u8, max_income: u32, step: u32) -> Vec<BenefitPoint> {
    let step = step.max(1);
    let mut points = Vec::with_capacity((max_income / step + 1) as usize);
    let mut income = 0u32;

    loop {
        let snap = snap_benefit(income as f64, household_size).round() as u32;
        let childcare = childcare_benefit(income as f64, household_size) as u32;
        points.push(BenefitPoint {
            income,
            snap,
            childcare,
            total: snap + childcare,
        });

        income = match income.checked_add(step) {
            Some(next) if next <= max_income => next,
            _ => break,
        };
    }

    points
}

/// The two benefit-loss thresholds the calculator warns about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitCliff {
    Snap,
    ChildcareSubsidy,
}

impl BenefitCliff {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Snap => "SNAP",
            Self::ChildcareSubsidy => "Childcare subsidy",
        }
    }
}

/// An upcoming benefit-loss threshold within warning range of an income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CliffWarning {
    pub cliff: BenefitCliff,
    pub cliff_income: u32,
    pub loss_amount: u32,
}

/// Finds a cliff within $200 of the current income, counting an income
/// exactly at a threshold as still below it. The SNAP threshold takes
/// priority; the childcare threshold is only considered when the SNAP check
/// did not match.
pub fn nearby_cliff(monthly_income: f64, household_size: u8) -> Option<CliffWarning> {
    let fpl = poverty_line(household_size);
    let snap_cliff = fpl * SNAP_GROSS_LIMIT_PCT;
    let childcare_cliff = fpl * CHILDCARE_LIMIT_PCT;

    if (monthly_income - snap_cliff).abs() <= CLIFF_WARNING_RANGE && monthly_income <= snap_cliff {
        return Some(CliffWarning {
            cliff: BenefitCliff::Snap,
            cliff_income: snap_cliff.round() as u32,
            loss_amount: snap_benefit(monthly_income, household_size).round() as u32,
        });
    }

    if (monthly_income - childcare_cliff).abs() <= CLIFF_WARNING_RANGE
        && monthly_income <= childcare_cliff
    {
        return Some(CliffWarning {
            cliff: BenefitCliff::ChildcareSubsidy,
            cliff_income: childcare_cliff.round() as u32,
            loss_amount: CHILDCARE_SUBSIDY_VALUE as u32,
        });
    }

    None
}

#[derive(Debug, thiserror::Error)]
pub enum PointsExportError {
    #[error("failed to serialize benefit points: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush benefit points: {0}")]
    Io(#[from] io::Error),
}

/// Writes a point series as CSV (`income,snap,childcare,total`) to the sink.
/// The caller owns the sink; this function performs no other I/O.
pub fn write_points_csv<W: io::Write>(
    points: &[BenefitPoint],
    writer: W,
) -> Result<(), PointsExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in points {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_benefit_is_zero_above_gross_limit() {
        for size in 1..=8u8 {
            let limit = poverty_line(size) * SNAP_GROSS_LIMIT_PCT;
            assert_eq!(snap_benefit(limit + 1.0, size), 0.0);
            assert!(snap_benefit(limit, size) >= 0.0);
        }
    }

    #[test]
    fn snap_benefit_never_increases_with_income() {
        for size in 1..=8u8 {
            let mut previous = snap_benefit(0.0, size);
            let mut income = 0.0;
            while income <= 6000.0 {
                let current = snap_benefit(income, size);
                assert!(
                    current <= previous,
                    "benefit rose from {previous} to {current} at income {income} for size {size}"
                );
                previous = current;
                income += 50.0;
            }
        }
    }

    #[test]
    fn childcare_benefit_is_a_step_function() {
        for size in 1..=8u8 {
            let limit = poverty_line(size) * CHILDCARE_LIMIT_PCT;
            assert_eq!(childcare_benefit(limit, size), CHILDCARE_SUBSIDY_VALUE);
            assert_eq!(childcare_benefit(limit - 1.0, size), CHILDCARE_SUBSIDY_VALUE);
            assert_eq!(childcare_benefit(limit + 1.0, size), 0.0);
        }
    }

    #[test]
    fn point_series_covers_income_range_inclusive() {
        let points = benefit_points(3, 6000, 100);
        assert_eq!(points.len(), 61);
        for (index, point) in points.iter().enumerate() {
            assert_eq!(point.income, index as u32 * 100);
            assert_eq!(point.total, point.snap + point.childcare);
        }
    }

    #[test]
    fn zero_step_is_clamped() {
        let points = benefit_points(3, 3, 0);
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn snap_cliff_takes_priority_within_warning_range() {
        // Size 3: FPL 2631, SNAP cliff at 3420.3.
        let warning = nearby_cliff(3320.0, 3).expect("within $200 of the SNAP cliff");
        assert_eq!(warning.cliff, BenefitCliff::Snap);
        assert_eq!(warning.cliff_income, 3420);
        assert_eq!(
            warning.loss_amount,
            snap_benefit(3320.0, 3).round() as u32
        );
    }

    #[test]
    fn childcare_cliff_reported_when_snap_check_misses() {
        // Size 3: childcare cliff at 5262; 5100 is out of SNAP range.
        let warning = nearby_cliff(5100.0, 3).expect("within $200 of the childcare cliff");
        assert_eq!(warning.cliff, BenefitCliff::ChildcareSubsidy);
        assert_eq!(warning.cliff_income, 5262);
        assert_eq!(warning.loss_amount, 800);
    }

    #[test]
    fn income_exactly_at_threshold_still_warns() {
        let snap_cliff = poverty_line(3) * SNAP_GROSS_LIMIT_PCT;
        let warning = nearby_cliff(snap_cliff, 3).expect("threshold income counts as at-or-below");
        assert_eq!(warning.cliff, BenefitCliff::Snap);
    }

    #[test]
    fn no_warning_far_from_either_cliff() {
        assert!(nearby_cliff(1000.0, 3).is_none());
        assert!(nearby_cliff(6000.0, 3).is_none());
    }

    #[test]
    fn points_csv_has_header_and_rows() {
        let points = benefit_points(3, 200, 100);
        let mut buffer = Vec::new();
        write_points_csv(&points, &mut buffer).expect("in-memory write succeeds");
        let text = String::from_utf8(buffer).expect("csv is utf-8");
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("income,snap,childcare,total"));
        assert_eq!(lines.count(), 3);
    }
}
