//! Swiss number and date formatting shared by the narrative and the letter.
use chrono::{Datelike, NaiveDate};

const MONTHS_DE: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni",
    "Juli", "August", "September", "Oktober", "November", "Dezember",
];

/// Two decimals, with "-0.00" folded into "0.00".
fn fixed2(value: f64) -> String {
    let s = format!("{:.2}", value);
    if s == "-0.00" { "0.00".to_string() } else { s }
}

/// Groups the integer digits with the Swiss apostrophe: 1234567.5 -> "1'234'567.50".
pub fn group_thousands(value: f64) -> String {
    let fixed = fixed2(value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('\'');
        }
        grouped.push(ch);
    }
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// "CHF 2'400.00"
pub fn chf(value: f64) -> String {
    format!("CHF {}", group_thousands(value))
}

/// "5.82%"
pub fn percent(value: f64) -> String {
    format!("{}%", fixed2(value))
}

/// "+5.82%" / "-1.52%", as used in the breakdown.
pub fn signed_percent(value: f64) -> String {
    let s = fixed2(value);
    if s.starts_with('-') { format!("{}%", s) } else { format!("+{}%", s) }
}

/// "5.82 %", the typographic form used in formal letters.
pub fn letter_percent(value: f64) -> String {
    format!("{} %", fixed2(value))
}

/// "16. Oktober 2026"
pub fn swiss_long_date(date: NaiveDate) -> String {
    format!("{}. {} {}", date.day(), MONTHS_DE[date.month0() as usize], date.year())
}
