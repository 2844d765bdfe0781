//! URL slug derivation shared by categories, subcategories and services.

/// Derive a URL-safe slug from a display name.
///
/// Lowercases the trimmed input, turns whitespace runs into `-`, drops every
/// other character outside `[a-z0-9-]`, collapses dash runs and strips dashes
/// at both ends. The result may be empty when the name has no ASCII alphanumerics.
pub fn slugify(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.trim().to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
        } else if (c == '-' || c.is_whitespace()) && !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn spaces_become_single_dash() {
        assert_eq!(slugify("Document Drafting"), "document-drafting");
        assert_eq!(slugify("  Property   Services "), "property-services");
    }

    #[test]
    fn punctuation_is_stripped_and_dashes_collapsed() {
        assert_eq!(slugify("Lawyer's Notice"), "lawyers-notice");
        assert_eq!(slugify("Leave & License Agreement"), "leave-license-agreement");
        assert_eq!(slugify("Notice(s)/Replies"), "noticesreplies");
        assert_eq!(slugify("Sub-lease Agreement"), "sub-lease-agreement");
        assert_eq!(slugify("--Power of Attorney!--"), "power-of-attorney");
    }

    #[test]
    fn digits_are_kept() {
        assert_eq!(slugify("Form 16 Filing"), "form-16-filing");
    }

    #[test]
    fn non_alphanumeric_name_yields_empty_slug() {
        assert_eq!(slugify("!!! ???"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(slugify("Café Consultation"), "caf-consultation");
    }
}
