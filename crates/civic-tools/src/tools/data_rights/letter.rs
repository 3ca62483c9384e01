use super::domain::{DataRight, LetterForm};
use chrono::NaiveDate;

/// Resolved placeholder values shared by every letter body. Required fields
/// fall back to bracketed tokens so a partially filled form still renders a
/// complete preview; optional fields simply drop their lines.
struct TemplateParams {
    date_line: String,
    your_name: String,
    your_address: String,
    your_email: String,
    company_name: String,
    company_address: String,
    categories_block: String,
    account_reference: String,
}

impl TemplateParams {
    fn resolve(form: &LetterForm, today: NaiveDate) -> Self {
        let categories_block = if form.categories.is_empty() {
            "- All personal data held about me".to_string()
        } else {
            form.categories
                .iter()
                .map(|category| format!("- {}", category.label()))
                .collect::<Vec<_>>()
                .join("\n")
        };

        Self {
            date_line: today.format("%B %-d, %Y").to_string(),
            your_name: or_placeholder(&form.your_name, "[Your Name]"),
            your_address: or_placeholder(&form.your_address, "[Your Address]"),
            your_email: or_placeholder(&form.your_email, "[Your Email]"),
            company_name: or_placeholder(&form.company_name, "[Company Name]"),
            company_address: form.company_address.clone(),
            categories_block,
            account_reference: form.account_reference.clone(),
        }
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Renders the request letter for the form's selected right.
///
/// Deterministic: the generation date is an explicit parameter, so identical
/// inputs always produce byte-identical text. The function performs no I/O;
/// clipboard copy and file download belong to the caller.
pub fn generate_letter(form: &LetterForm, today: NaiveDate) -> String {
    let params = TemplateParams::resolve(form, today);
    match form.right {
        DataRight::Access => access_letter(&params),
        DataRight::Delete => delete_letter(&params),
        DataRight::Correct => correct_letter(&params),
        DataRight::Portability => portability_letter(&params),
        DataRight::OptOut => opt_out_letter(&params),
    }
}

fn header(p: &TemplateParams) -> String {
    let company_addr_line = if p.company_address.is_empty() {
        String::new()
    } else {
        format!("\n{}", p.company_address)
    };
    let ref_line = if p.account_reference.is_empty() {
        String::new()
    } else {
        format!("\nRe: Account / Reference: {}", p.account_reference)
    };

    format!(
        "{date}\n\
         \n\
         {name}\n\
         {address}\n\
         Email: {email}\n\
         \n\
         {company}{company_addr_line}\n\
         {ref_line}",
        date = p.date_line,
        name = p.your_name,
        address = p.your_address,
        email = p.your_email,
        company = p.company_name,
    )
}

fn footer(p: &TemplateParams) -> String {
    format!(
        "If you have any questions or need clarification, please contact me at {email}.\n\
         \n\
         Please be advised that under IC 24-15, you are required to respond to this request within 45 days of receipt. A single 45-day extension is permitted with written notice.\n\
         \n\
         Failure to comply may result in a complaint filed with the Indiana Attorney General's Office, which enforces the Indiana Consumer Data Protection Act.\n\
         \n\
         Sincerely,\n\
         \n\
         {name}",
        email = p.your_email,
        name = p.your_name,
    )
}

fn access_letter(p: &TemplateParams) -> String {
    format!(
        "{header}\n\
         \n\
         Subject: Indiana Consumer Data Protection Act — Right to Access Request (IC 24-15)\n\
         \n\
         Dear Privacy Officer or Data Controller at {company},\n\
         \n\
         Pursuant to the Indiana Consumer Data Protection Act (IC 24-15), which became effective in 2026, I am exercising my Right to Access as an Indiana resident.\n\
         \n\
         I hereby request that {company} provide me with:\n\
         \n\
         1. Confirmation of whether you are processing my personal data;\n\
         2. A complete list of the categories of personal data you have collected about me;\n\
         3. Specific pieces of personal data you hold about me;\n\
         4. The purposes for which my personal data is being processed;\n\
         5. The categories of third parties with whom my personal data has been shared;\n\
         6. The source of my personal data if not collected directly from me.\n\
         \n\
         I am specifically requesting information about the following types of data:\n\
         {categories}\n\
         \n\
         This request covers all personal data collected, processed, or stored by {company} and any processors acting on your behalf.\n\
         \n\
         {footer}",
        header = header(p),
        company = p.company_name,
        categories = p.categories_block,
        footer = footer(p),
    )
}

fn delete_letter(p: &TemplateParams) -> String {
    format!(
        "{header}\n\
         \n\
         Subject: Indiana Consumer Data Protection Act — Right to Delete Request (IC 24-15)\n\
         \n\
         Dear Privacy Officer or Data Controller at {company},\n\
         \n\
         Pursuant to the Indiana Consumer Data Protection Act (IC 24-15), which became effective in 2026, I am exercising my Right to Delete as an Indiana resident.\n\
         \n\
         I hereby request that {company} promptly delete all personal data that you have collected about me, including but not limited to:\n\
         \n\
         {categories}\n\
         \n\
         This deletion request covers:\n\
         - All personal data held in your primary systems;\n\
         - All backups or archived copies, to the extent technically feasible;\n\
         - All personal data shared with third-party processors acting on your behalf.\n\
         \n\
         I understand that certain legal exceptions may apply (e.g., data required to complete a transaction, legal compliance obligations). If any data cannot be deleted, please specify the legal basis for retaining it.\n\
         \n\
         After completing the deletion, please provide written confirmation that my data has been deleted and identify any data that could not be deleted along with the reason.\n\
         \n\
         {footer}",
        header = header(p),
        company = p.company_name,
        categories = p.categories_block,
        footer = footer(p),
    )
}

fn correct_letter(p: &TemplateParams) -> String {
    format!(
        "{header}\n\
         \n\
         Subject: Indiana Consumer Data Protection Act — Right to Correct Request (IC 24-15)\n\
         \n\
         Dear Privacy Officer or Data Controller at {company},\n\
         \n\
         Pursuant to the Indiana Consumer Data Protection Act (IC 24-15), which became effective in 2026, I am exercising my Right to Correct inaccurate personal data as an Indiana resident.\n\
         \n\
         I believe that {company} holds inaccurate personal data about me. I am requesting that you investigate and correct the following:\n\
         \n\
         Categories of data I believe may be inaccurate:\n\
         {categories}\n\
         \n\
         Please take the following steps:\n\
         1. Review all personal data you hold about me in the categories listed above;\n\
         2. Correct any inaccuracies you identify;\n\
         3. Notify any third parties to whom you have disclosed this data of the corrections made, to the extent required by law.\n\
         \n\
         Please provide written confirmation of the corrections made once the process is complete.\n\
         \n\
         {footer}",
        header = header(p),
        company = p.company_name,
        categories = p.categories_block,
        footer = footer(p),
    )
}

fn portability_letter(p: &TemplateParams) -> String {
    format!(
        "{header}\n\
         \n\
         Subject: Indiana Consumer Data Protection Act — Right to Data Portability Request (IC 24-15)\n\
         \n\
         Dear Privacy Officer or Data Controller at {company},\n\
         \n\
         Pursuant to the Indiana Consumer Data Protection Act (IC 24-15), which became effective in 2026, I am exercising my Right to Data Portability as an Indiana resident.\n\
         \n\
         I hereby request a copy of all personal data you hold about me in a portable, machine-readable format (such as CSV or JSON). Specifically, I am requesting data in the following categories:\n\
         \n\
         {categories}\n\
         \n\
         Please provide this data in a structured, commonly used, and machine-readable format that allows me to transmit it to another controller.\n\
         \n\
         This request includes all personal data you have collected about me and that you have processed based on my consent or pursuant to a contract with me.\n\
         \n\
         {footer}",
        header = header(p),
        company = p.company_name,
        categories = p.categories_block,
        footer = footer(p),
    )
}

fn opt_out_letter(p: &TemplateParams) -> String {
    format!(
        "{header}\n\
         \n\
         Subject: Indiana Consumer Data Protection Act — Opt-Out of Data Sale / Targeted Advertising (IC 24-15)\n\
         \n\
         Dear Privacy Officer or Data Controller at {company},\n\
         \n\
         Pursuant to the Indiana Consumer Data Protection Act (IC 24-15), which became effective in 2026, I am exercising my Right to Opt-Out as an Indiana resident.\n\
         \n\
         I hereby direct {company} to immediately cease:\n\
         \n\
         1. The sale of my personal data to any third parties;\n\
         2. The use of my personal data for targeted advertising;\n\
         3. The use of my personal data for profiling that produces legal or similarly significant effects on me.\n\
         \n\
         This opt-out covers all personal data you hold about me, including but not limited to:\n\
         {categories}\n\
         \n\
         Please confirm in writing that you have honored this opt-out request and have notified all third parties with whom my data has been shared for the above purposes to honor this request as well.\n\
         \n\
         {footer}",
        header = header(p),
        company = p.company_name,
        categories = p.categories_block,
        footer = footer(p),
    )
}
