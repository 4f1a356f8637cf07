// ── Icon guessing for new device types ──
//
// Ordered keyword table; first rule whose keyword occurs in the
// lowercased name wins, with a generic fallback. The order is part of
// the contract — "pc" must not shadow "phone" and so on.

/// Icon used when no keyword matches.
pub const FALLBACK_ICON: &str = "package";

/// `(keywords, icon)` rules, checked in order.
const ICON_RULES: &[(&[&str], &str)] = &[
    (&["mobile", "phone", "tablet"], "smartphone"),
    (&["laptop", "notebook"], "laptop"),
    (&["desktop", "pc"], "monitor"),
    (&["tv", "television"], "tv"),
];

/// Guess an icon for a device-type name from free-text keywords.
pub fn guess_icon(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    for &(keywords, icon) in ICON_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return icon;
        }
    }
    FALLBACK_ICON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_rules_in_order() {
        assert_eq!(guess_icon("Mobile Phones"), "smartphone");
        assert_eq!(guess_icon("Tablet"), "smartphone");
        assert_eq!(guess_icon("Gaming Laptop"), "laptop");
        assert_eq!(guess_icon("Notebook"), "laptop");
        assert_eq!(guess_icon("Desktop PC"), "monitor");
        assert_eq!(guess_icon("Smart TV"), "tv");
        assert_eq!(guess_icon("Television"), "tv");
    }

    #[test]
    fn earlier_rule_wins_on_overlap() {
        // "phone" (rule 1) beats "tv" (rule 4) when both occur.
        assert_eq!(guess_icon("Phone TV Combo"), "smartphone");
    }

    #[test]
    fn falls_back_to_package() {
        assert_eq!(guess_icon("Drone"), FALLBACK_ICON);
        assert_eq!(guess_icon(""), FALLBACK_ICON);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(guess_icon("LAPTOP"), "laptop");
    }
}
