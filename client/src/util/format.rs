//! Display formatting for amounts and names.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group digits in threes with commas, e.g. `28650` -> `"28,650"`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar amount with a `$` prefix and grouping.
#[must_use]
pub fn format_currency(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

/// First letter of each whitespace-separated word, uppercased.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter(|ch| ch.is_alphanumeric())
        .flat_map(char::to_uppercase)
        .collect()
}
