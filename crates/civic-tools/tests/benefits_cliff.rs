use civic_tools::tools::benefits::{
    benefit_points, childcare_benefit, nearby_cliff, poverty_line, snap_benefit, BenefitCliff,
    CHILDCARE_LIMIT_PCT, SNAP_GROSS_LIMIT_PCT,
};

#[test]
fn benefit_curve_steps_down_and_cuts_off() {
    for size in 1..=8u8 {
        let cutoff = poverty_line(size) * SNAP_GROSS_LIMIT_PCT;

        let mut previous = snap_benefit(0.0, size);
        let mut income = 0.0;
        while income < cutoff {
            let current = snap_benefit(income, size);
            assert!(current <= previous);
            previous = current;
            income += 25.0;
        }

        assert_eq!(snap_benefit(cutoff + 0.01, size), 0.0);
    }
}

#[test]
fn childcare_subsidy_has_no_intermediate_values() {
    for size in 1..=8u8 {
        let limit = poverty_line(size) * CHILDCARE_LIMIT_PCT;
        let mut income = 0.0;
        while income <= limit + 1000.0 {
            let benefit = childcare_benefit(income, size);
            assert!(benefit == 800.0 || benefit == 0.0);
            income += 100.0;
        }
    }
}

#[test]
fn standard_chart_range_yields_sixty_one_points() {
    let points = benefit_points(3, 6000, 100);
    assert_eq!(points.len(), 61);
    assert_eq!(points.first().map(|point| point.income), Some(0));
    assert_eq!(points.last().map(|point| point.income), Some(6000));
    for pair in points.windows(2) {
        assert_eq!(pair[1].income - pair[0].income, 100);
    }
}

#[test]
fn snap_cliff_outranks_childcare_cliff_for_size_three() {
    // FPL for a 3-person household is 2631; the SNAP cliff sits at 3420.3.
    let warning = nearby_cliff(3320.0, 3).expect("income is inside the warning band");
    assert_eq!(warning.cliff, BenefitCliff::Snap);
    assert_eq!(warning.cliff_income, 3420);
    assert!(warning.loss_amount > 0);
}

#[test]
fn childcare_cliff_applies_only_outside_snap_band() {
    // 5100 is far from the SNAP cliff but within $200 of 5262.
    let warning = nearby_cliff(5100.0, 3).expect("income is inside the warning band");
    assert_eq!(warning.cliff, BenefitCliff::ChildcareSubsidy);
    assert_eq!(warning.cliff_income, 5262);
    assert_eq!(warning.loss_amount, 800);
}

#[test]
fn oversized_household_uses_largest_tabulated_row() {
    assert_eq!(poverty_line(12), poverty_line(8));
    assert_eq!(snap_benefit(1000.0, 12), snap_benefit(1000.0, 8));
    assert_eq!(
        childcare_benefit(4000.0, 12),
        childcare_benefit(4000.0, 8)
    );
}
