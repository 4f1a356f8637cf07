// ── Slug and name-normalization utilities ──
//
// Pure functions. Slugs are derived client-side from display names and
// deduplicated against whatever scope the caller supplies (global for
// devices, per-device for brands, per-brand for models).

/// Lowercase, hyphen-separated slug derived from a display name.
///
/// Non-alphanumeric runs collapse into a single `-`; leading and
/// trailing separators are trimmed.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Derive a slug from `name` that is unique within `taken`
/// (case-insensitive), appending `-2`, `-3`, … until it is.
pub fn unique_slug<I, S>(name: &str, taken: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let taken: std::collections::HashSet<String> = taken
        .into_iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect();

    let base = slugify(name);
    if !taken.contains(&base) {
        return base;
    }

    let mut n: u32 = 2;
    loop {
        let candidate = format!("{base}-{n}");
        if !taken.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Case- and whitespace-insensitive name comparison, used for every
/// duplicate-sibling check.
pub fn eq_normalized(a: &str, b: &str) -> bool {
    normalized(a) == normalized(b)
}

fn normalized(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basics() {
        assert_eq!(slugify("Apple"), "apple");
        assert_eq!(slugify("iPad Air"), "ipad-air");
        assert_eq!(slugify("  Galaxy  S24 Ultra  "), "galaxy-s24-ultra");
        assert_eq!(slugify("C++ / Rust!"), "c-rust");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn unique_slug_without_collision() {
        assert_eq!(unique_slug("Apple", Vec::<&str>::new()), "apple");
    }

    #[test]
    fn unique_slug_appends_monotonic_suffix() {
        assert_eq!(unique_slug("Apple", ["apple"]), "apple-2");
        assert_eq!(unique_slug("Apple", ["apple", "apple-2"]), "apple-3");
        assert_eq!(
            unique_slug("Apple", ["apple", "apple-2", "apple-3"]),
            "apple-4"
        );
    }

    #[test]
    fn unique_slug_is_case_insensitive() {
        assert_eq!(unique_slug("Apple", ["APPLE"]), "apple-2");
    }

    #[test]
    fn unique_slug_skips_over_holes() {
        // apple-2 is free even though apple-3 is taken — the suffix is
        // monotonic from 2, so the first free candidate wins.
        assert_eq!(unique_slug("Apple", ["apple", "apple-3"]), "apple-2");
    }

    #[test]
    fn eq_normalized_ignores_case_and_whitespace() {
        assert!(eq_normalized("iPad Air", "ipad air"));
        assert!(eq_normalized("  iPad   Air ", "iPad Air"));
        assert!(!eq_normalized("iPad Air", "iPad Air 2"));
    }
}
