use chrono::NaiveDate;
use civic_tools::tools::data_rights::{generate_letter, DataCategory, DataRight, LetterForm};

fn generation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid generation date")
}

fn filled_form(right: DataRight) -> LetterForm {
    LetterForm {
        your_name: "Jane Smith".to_string(),
        your_address: "123 Main St, Indianapolis, IN 46201".to_string(),
        your_email: "jane@example.com".to_string(),
        company_name: "Acme Corp".to_string(),
        company_address: String::new(),
        right,
        categories: vec![DataCategory::PurchaseHistory, DataCategory::BrowsingData],
        account_reference: String::new(),
    }
}

#[test]
fn delete_letter_carries_the_statutory_framing() {
    let letter = generate_letter(&filled_form(DataRight::Delete), generation_date());

    assert!(letter.contains("Right to Delete"));
    assert!(letter.contains("Jane Smith"));
    assert!(letter.contains("Acme Corp"));
    assert!(letter.contains("respond to this request within 45 days of receipt"));
    assert!(letter.contains("- Purchase History"));
    assert!(letter.contains("- Browsing Data"));
}

#[test]
fn empty_form_renders_placeholders_but_keeps_the_deadline_clause() {
    let letter = generate_letter(&LetterForm::default(), generation_date());

    assert!(letter.contains("[Your Name]"));
    assert!(letter.contains("[Your Address]"));
    assert!(letter.contains("[Your Email]"));
    assert!(letter.contains("[Company Name]"));
    assert!(letter.contains("respond to this request within 45 days of receipt"));
    assert!(letter.contains("- All personal data held about me"));
}

#[test]
fn identical_inputs_produce_byte_identical_letters() {
    let form = filled_form(DataRight::Portability);
    let first = generate_letter(&form, generation_date());
    let second = generate_letter(&form, generation_date());
    assert_eq!(first, second);
}

#[test]
fn each_right_gets_its_own_subject_line() {
    let subjects = [
        (DataRight::Access, "Right to Access Request"),
        (DataRight::Delete, "Right to Delete Request"),
        (DataRight::Correct, "Right to Correct Request"),
        (DataRight::Portability, "Right to Data Portability Request"),
        (
            DataRight::OptOut,
            "Opt-Out of Data Sale / Targeted Advertising",
        ),
    ];

    for (right, expected) in subjects {
        let letter = generate_letter(&filled_form(right), generation_date());
        assert!(
            letter.contains(expected),
            "{} letter missing subject fragment '{expected}'",
            right.id()
        );
        assert!(letter.contains("Sincerely,"));
    }
}

#[test]
fn download_filenames_follow_the_right_id() {
    assert_eq!(
        DataRight::OptOut.request_filename(),
        "icdpa-opt-out-request.txt"
    );
    assert_eq!(
        DataRight::Access.request_filename(),
        "icdpa-access-request.txt"
    );
}
