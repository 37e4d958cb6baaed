//! Initials for avatar fallbacks.

/// Initials of a display name: first letter of the first and last words.
///
/// - `"Jane Doe"` → `"JD"`
/// - `"Jane Q. Public"` → `"JP"`
/// - `"Cher"` → `"C"`
/// - `""` or whitespace only → `""`
pub fn name_initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };

    let mut initials: String = leading_upper(first);
    if let Some(last) = words.last() {
        initials.push_str(&leading_upper(last));
    }
    initials
}

fn leading_upper(word: &str) -> String {
    word.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
