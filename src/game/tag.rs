//! Decision-option tags and their happiness deltas.
//!
//! Every scenario option carries a category tag that determines how the
//! decision moves reported national happiness. The table is fixed:
//!
//! | tag        | delta |
//! |------------|-------|
//! | delusion   | +13   |
//! | purge      | +11   |
//! | corruption | +7    |
//! | reform     | −5    |
//! | (other)    | 0     |
//!
//! Propaganda pays; honest reform hurts the numbers.

/// Category of a decision option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Fabricated good news. Largest short-term happiness gain.
    Delusion,
    /// Removal of inconvenient people.
    Purge,
    /// Buying loyalty.
    Corruption,
    /// Actual policy work. Reported happiness drops.
    Reform,
}

impl Tag {
    /// Parse a tag string from scenario data.
    ///
    /// Returns `None` for unrecognized strings; those fall through to a
    /// zero delta rather than any default mapping.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "delusion" => Some(Tag::Delusion),
            "purge" => Some(Tag::Purge),
            "corruption" => Some(Tag::Corruption),
            "reform" => Some(Tag::Reform),
            _ => None,
        }
    }

    /// Happiness delta applied by a decision with this tag.
    #[must_use]
    pub const fn delta(self) -> i32 {
        match self {
            Tag::Delusion => 13,
            Tag::Purge => 11,
            Tag::Corruption => 7,
            Tag::Reform => -5,
        }
    }
}

/// Resolve the delta for an option's raw tag field.
///
/// A missing tag column (`None`) defaults to [`Tag::Reform`]. A tag that is
/// present but unrecognized keeps its literal value and maps to 0. The two
/// cases are deliberately distinct.
#[must_use]
pub fn delta_for(tag: Option<&str>) -> i32 {
    match tag {
        None => Tag::Reform.delta(),
        Some(s) => Tag::parse(s).map_or(0, Tag::delta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert_eq!(Tag::parse("delusion"), Some(Tag::Delusion));
        assert_eq!(Tag::parse("purge"), Some(Tag::Purge));
        assert_eq!(Tag::parse("corruption"), Some(Tag::Corruption));
        assert_eq!(Tag::parse("reform"), Some(Tag::Reform));
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(Tag::parse("jubilee"), None);
        assert_eq!(Tag::parse(""), None);
        assert_eq!(Tag::parse("Reform"), None);
    }

    #[test]
    fn test_delta_table() {
        assert_eq!(Tag::Delusion.delta(), 13);
        assert_eq!(Tag::Purge.delta(), 11);
        assert_eq!(Tag::Corruption.delta(), 7);
        assert_eq!(Tag::Reform.delta(), -5);
    }

    #[test]
    fn test_missing_tag_defaults_to_reform() {
        assert_eq!(delta_for(None), -5);
    }

    #[test]
    fn test_unrecognized_tag_falls_through_to_zero() {
        assert_eq!(delta_for(Some("jubilee")), 0);
        assert_eq!(delta_for(Some("")), 0);
    }

    #[test]
    fn test_recognized_tag_resolves() {
        assert_eq!(delta_for(Some("delusion")), 13);
        assert_eq!(delta_for(Some("reform")), -5);
    }
}
