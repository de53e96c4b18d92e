//! Contact record

use serde::{Deserialize, Serialize};

/// A single directory record
///
/// Identity is the (first, last) pair compared case-insensitively; the phone
/// number takes no part in equality. Fields are stored exactly as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    first: String,
    last: String,
    phone: String,
}

impl Entry {
    pub fn new(first: impl Into<String>, last: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
            phone: phone.into(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Both names are non-empty once surrounding whitespace is trimmed
    pub fn is_valid(&self) -> bool {
        !self.first.trim().is_empty() && !self.last.trim().is_empty()
    }

    /// Case-insensitive match against a (first, last) key
    pub fn matches_name(&self, first: &str, last: &str) -> bool {
        eq_ignore_case(&self.first, first) && eq_ignore_case(&self.last, last)
    }

    /// Lower-cased "first last", used only for ordering listings
    pub fn display_key(&self) -> String {
        format!("{} {}", self.first, self.last).to_lowercase()
    }

    pub(crate) fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.matches_name(&other.first, &other.last)
    }
}

impl Eq for Entry {}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} - {}", self.first, self.last, self.phone)
    }
}

/// Per-character comparison under simple (one-to-one) case mappings
///
/// Two characters match when equal, when their uppercase forms are equal, or
/// when the lowercase forms of those are equal. This pairs final and medial
/// sigma as well as dotted capital I with i.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            if x == y {
                return true;
            }
            let (ux, uy) = (simple_upper(x), simple_upper(y));
            ux == uy || simple_lower(ux) == simple_lower(uy)
        })
}

/// Uppercase when it is a single character, the character itself otherwise
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Lowercase base character; only dotted capital I lowers to more than one
fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
