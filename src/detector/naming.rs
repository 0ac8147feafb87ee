//! Slug and display name derivation for project directories.

/// Whitespace as the slug rule understands it (ASCII only).
fn is_separator_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Derive a domain-safe slug from a directory name.
///
/// Runs of underscores and whitespace collapse to a single hyphen, then the
/// result is lowercased. Existing hyphens are kept as they are.
///
/// ```
/// use devdock_dashboard::detector::slugify;
///
/// assert_eq!(slugify("My Cool_App"), "my-cool-app");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_run = false;

    for c in name.chars() {
        if c == '_' || is_separator_space(c) {
            if !in_run {
                slug.push('-');
                in_run = true;
            }
        } else {
            slug.push(c.to_ascii_lowercase());
            in_run = false;
        }
    }

    slug
}

/// Derive a human-readable name from a directory name.
///
/// Hyphens and underscores become spaces and the first letter of every word
/// is uppercased. The remaining letters are left untouched.
pub fn display_name(name: &str) -> String {
    let mut display = String::with_capacity(name.len());
    let mut word_start = true;

    for c in name.chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };

        if is_separator_space(c) {
            display.push(c);
            word_start = true;
        } else if word_start {
            display.push(c.to_ascii_uppercase());
            word_start = false;
        } else {
            display.push(c);
        }
    }

    display
}
