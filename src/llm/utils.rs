use crate::llm::prompts::NO_TRANSACTIONS;
use crate::schema::{TransactionRecord, UserProfile};

/// Collapses line breaks and column separators so a description always
/// stays inside its own row.
fn single_line(description: &str) -> String {
    description
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "/")
}

/// One line per record: `description | amount | category`.
pub fn format_transactions(transactions: &[TransactionRecord]) -> String {
    if transactions.is_empty() {
        return NO_TRANSACTIONS.to_string();
    }

    let mut table = String::from("Description | Amount | Income/Expense\n");
    for record in transactions {
        table.push_str(&format!(
            "{} | {:.2} | {}\n",
            single_line(&record.description),
            record.amount,
            record.category
        ));
    }
    table
}

pub fn format_profile(profile: &UserProfile) -> String {
    format!(
        "Age: {}\nLifestyle: {}\nHobbies: {}",
        profile.age, profile.lifestyle, profile.hobbies
    )
}
