use super::{StateWageSchedule, WagePoint};

// Midwest minimum wage data 2023-2031.
// Sources: Michigan LEO, Illinois DOL, Ohio BWC. Values after confirmed
// agency announcements are estimates. Michigan tip-credit percentages after
// 2026 follow FAQ guidance and use projected CPI-adjusted standard rates;
// Illinois values after 2026 assume no new statutory change; Ohio values are
// updated annually per CPI each January.
pub(crate) static SCHEDULES: &[StateWageSchedule] = &[
    StateWageSchedule {
        state: "Michigan",
        color: "#1a56db",
        points: &[
            WagePoint {
                year: 2023,
                date: "Jan 2023",
                standard: 10.10,
                tipped: 3.84,
                note: Some("Tipped wage is ~38% of standard"),
            },
            WagePoint {
                year: 2024,
                date: "Jan 2024",
                standard: 10.33,
                tipped: 3.93,
                note: Some("Annual CPI adjustment"),
            },
            WagePoint {
                year: 2025,
                date: "Jan 2025",
                standard: 12.48,
                tipped: 4.74,
                note: Some("Improved Workforce Opportunity Wage Act increase"),
            },
            WagePoint {
                year: 2026,
                date: "Jan 2026",
                standard: 13.73,
                tipped: 5.49,
                note: Some("Confirmed by Michigan LEO release (Dec 2025)"),
            },
            WagePoint {
                year: 2027,
                date: "Jan 2027",
                standard: 15.00,
                tipped: 6.15,
                note: Some("Confirmed standard wage; tipped uses 41% schedule"),
            },
            WagePoint {
                year: 2028,
                date: "Jan 2028",
                standard: 15.30,
                tipped: 6.43,
                note: Some("Estimated CPI adjustment with 42% tipped schedule"),
            },
            WagePoint {
                year: 2029,
                date: "Jan 2029",
                standard: 15.60,
                tipped: 6.71,
                note: Some("Estimated CPI adjustment with 43% tipped schedule"),
            },
            WagePoint {
                year: 2030,
                date: "Jan 2030",
                standard: 15.90,
                tipped: 7.00,
                note: Some("Estimated CPI adjustment with 44% tipped schedule"),
            },
            WagePoint {
                year: 2031,
                date: "Jan 2031",
                standard: 16.20,
                tipped: 7.29,
                note: Some("Estimated CPI adjustment with 45% tipped schedule"),
            },
        ],
    },
    StateWageSchedule {
        state: "Illinois",
        color: "#c81e1e",
        points: &[
            WagePoint {
                year: 2023,
                date: "Jan 2023",
                standard: 13.00,
                tipped: 7.80,
                note: Some("Tipped wage is 60% of standard"),
            },
            WagePoint {
                year: 2024,
                date: "Jan 2024",
                standard: 14.00,
                tipped: 8.40,
                note: Some("Annual scheduled increase"),
            },
            WagePoint {
                year: 2025,
                date: "Jan 2025",
                standard: 15.00,
                tipped: 9.00,
                note: Some("$15 floor reached statewide"),
            },
            WagePoint {
                year: 2026,
                date: "Jan 2026",
                standard: 15.00,
                tipped: 9.00,
                note: Some("Current Illinois statewide rate as of Jan 2026"),
            },
            WagePoint {
                year: 2027,
                date: "Jan 2027",
                standard: 15.00,
                tipped: 9.00,
                note: Some("Assumes no statutory change"),
            },
            WagePoint {
                year: 2028,
                date: "Jan 2028",
                standard: 15.00,
                tipped: 9.00,
                note: Some("Assumes no statutory change"),
            },
            WagePoint {
                year: 2029,
                date: "Jan 2029",
                standard: 15.00,
                tipped: 9.00,
                note: Some("Assumes no statutory change"),
            },
            WagePoint {
                year: 2030,
                date: "Jan 2030",
                standard: 15.00,
                tipped: 9.00,
                note: Some("Assumes no statutory change"),
            },
            WagePoint {
                year: 2031,
                date: "Jan 2031",
                standard: 15.00,
                tipped: 9.00,
                note: Some("Assumes no statutory change"),
            },
        ],
    },
    StateWageSchedule {
        state: "Ohio",
        color: "#057a55",
        points: &[
            WagePoint {
                year: 2023,
                date: "Jan 2023",
                standard: 10.10,
                tipped: 5.05,
                note: Some("Tipped wage is 50% of standard"),
            },
            WagePoint {
                year: 2024,
                date: "Jan 2024",
                standard: 10.45,
                tipped: 5.23,
                note: Some("CPI adjustment per Ohio Constitution"),
            },
            WagePoint {
                year: 2025,
                date: "Jan 2025",
                standard: 10.70,
                tipped: 5.35,
                note: Some("CPI adjustment"),
            },
            WagePoint {
                year: 2026,
                date: "Jan 2026",
                standard: 11.00,
                tipped: 5.50,
                note: Some("Confirmed by Ohio annual minimum wage posting"),
            },
            WagePoint {
                year: 2027,
                date: "Jan 2027",
                standard: 11.10,
                tipped: 5.55,
                note: Some("Estimated CPI adjustment"),
            },
            WagePoint {
                year: 2028,
                date: "Jan 2028",
                standard: 11.40,
                tipped: 5.70,
                note: Some("Estimated CPI adjustment"),
            },
            WagePoint {
                year: 2029,
                date: "Jan 2029",
                standard: 11.70,
                tipped: 5.85,
                note: Some("Estimated CPI adjustment"),
            },
            WagePoint {
                year: 2030,
                date: "Jan 2030",
                standard: 12.00,
                tipped: 6.00,
                note: Some("Estimated CPI adjustment"),
            },
            WagePoint {
                year: 2031,
                date: "Jan 2031",
                standard: 12.30,
                tipped: 6.15,
                note: Some("Estimated CPI adjustment"),
            },
        ],
    },
];
