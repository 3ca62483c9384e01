use chrono::{Local, NaiveDate};
use civic_tools::error::AppError;
use civic_tools::tools::benefits::{
    benefit_points, childcare_benefit, nearby_cliff, poverty_line, snap_benefit, write_points_csv,
};
use civic_tools::tools::data_rights::{generate_letter, DataCategory, DataRight, LetterForm};
use clap::Args;
use std::io;

#[derive(Args, Debug)]
pub(crate) struct BenefitsReportArgs {
    /// Monthly gross household income in dollars
    #[arg(long)]
    pub(crate) monthly_income: f64,
    /// Household size (tabulated sizes are 1-8)
    #[arg(long, default_value_t = 3)]
    pub(crate) household_size: u8,
    /// Print the full chart series
    #[arg(long)]
    pub(crate) points: bool,
    /// Emit the chart series as CSV on stdout instead of a summary
    #[arg(long)]
    pub(crate) csv: bool,
}

pub(crate) fn run_benefits_report(args: BenefitsReportArgs) -> Result<(), AppError> {
    let BenefitsReportArgs {
        monthly_income,
        household_size,
        points,
        csv,
    } = args;

    if csv {
        let series = benefit_points(household_size, 6000, 50);
        write_points_csv(&series, io::stdout().lock())?;
        return Ok(());
    }

    let snap = snap_benefit(monthly_income, household_size).round() as u32;
    let childcare = childcare_benefit(monthly_income, household_size) as u32;

    println!("Benefits cliff summary");
    println!(
        "Household of {household_size} at ${monthly_income:.0}/mo (FPL ${:.0}/mo)",
        poverty_line(household_size)
    );
    println!("- Estimated SNAP: ${snap}/mo");
    println!("- Estimated childcare subsidy: ${childcare}/mo");
    println!("- Combined support: ${}/mo", snap + childcare);

    match nearby_cliff(monthly_income, household_size) {
        Some(warning) => println!(
            "\nCliff warning: the {} benefit ends at ${}/mo income, with roughly ${}/mo at stake",
            warning.cliff.label(),
            warning.cliff_income,
            warning.loss_amount
        ),
        None => println!("\nNo benefit cliff within $200 of this income"),
    }

    if points {
        println!("\nIncome -> SNAP + childcare = total");
        for point in benefit_points(household_size, 6000, 50) {
            println!(
                "- ${:>5} -> ${:>4} + ${:>3} = ${:>4}",
                point.income, point.snap, point.childcare, point.total
            );
        }
    }

    Ok(())
}

#[derive(Args, Debug)]
pub(crate) struct LetterArgs {
    /// Which right to exercise: access, delete, correct, portability, opt-out
    #[arg(long, value_parser = parse_right, default_value = "delete")]
    pub(crate) right: DataRight,
    /// Requester full name
    #[arg(long, default_value = "")]
    pub(crate) name: String,
    /// Requester Indiana mailing address
    #[arg(long, default_value = "")]
    pub(crate) address: String,
    /// Requester email address
    #[arg(long, default_value = "")]
    pub(crate) email: String,
    /// Target company name
    #[arg(long, default_value = "")]
    pub(crate) company: String,
    /// Optional company mailing address
    #[arg(long, default_value = "")]
    pub(crate) company_address: String,
    /// Data categories to include (repeatable), e.g. purchase_history
    #[arg(long = "category", value_parser = parse_category)]
    pub(crate) categories: Vec<DataCategory>,
    /// Optional account or reference line
    #[arg(long, default_value = "")]
    pub(crate) reference: String,
    /// Generation date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_letter(args: LetterArgs) -> Result<(), AppError> {
    let LetterArgs {
        right,
        name,
        address,
        email,
        company,
        company_address,
        categories,
        reference,
        today,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let form = LetterForm {
        your_name: name,
        your_address: address,
        your_email: email,
        company_name: company,
        company_address,
        right,
        categories,
        account_reference: reference,
    };

    println!("{}", generate_letter(&form, today));
    Ok(())
}

fn parse_right(raw: &str) -> Result<DataRight, String> {
    let wanted = raw.trim().to_ascii_lowercase();
    DataRight::ordered()
        .into_iter()
        .find(|right| wanted == right.id())
        .ok_or_else(|| {
            format!("unknown right '{raw}' (expected access, delete, correct, portability, or opt-out)")
        })
}

fn parse_category(raw: &str) -> Result<DataCategory, String> {
    let wanted = raw.trim().to_ascii_lowercase();
    DataCategory::ordered()
        .into_iter()
        .find(|category| wanted == category.id())
        .ok_or_else(|| format!("unknown data category '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_parser_accepts_every_catalog_id() {
        for right in DataRight::ordered() {
            assert_eq!(parse_right(right.id()), Ok(right));
        }
        assert!(parse_right("erasure").is_err());
    }

    #[test]
    fn category_parser_accepts_every_catalog_id() {
        for category in DataCategory::ordered() {
            assert_eq!(parse_category(category.id()), Ok(category));
        }
        assert!(parse_category("telemetry").is_err());
    }
}
