//! Field extraction helpers: pull one labeled value out of free-form text.

use once_cell::sync::OnceCell;
use regex::Regex;

use crate::runner::is_unavailable;

/// A named pattern whose first capture group is the value of interest.
/// The regex is compiled on first use and shared afterwards.
pub struct Field {
    pub label: &'static str,
    pattern: &'static str,
    compiled: OnceCell<Option<Regex>>,
}

impl Field {
    pub const fn new(label: &'static str, pattern: &'static str) -> Self {
        Self {
            label,
            pattern,
            compiled: OnceCell::new(),
        }
    }

    pub fn regex(&self) -> Option<&Regex> {
        self.compiled
            .get_or_init(|| Regex::new(self.pattern).ok())
            .as_ref()
    }

    /// First match's first capture group, trimmed.
    pub fn text<'t>(&self, haystack: &'t str) -> Option<&'t str> {
        if is_unavailable(haystack) {
            return None;
        }
        let caps = self.regex()?.captures(haystack)?;
        let v = caps.get(1)?.as_str().trim();
        (!v.is_empty()).then_some(v)
    }

    pub fn number(&self, haystack: &str) -> Option<f64> {
        self.text(haystack)?.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    pub fn integer(&self, haystack: &str) -> Option<u64> {
        self.text(haystack)?.parse::<u64>().ok()
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        !is_unavailable(haystack) && self.regex().is_some_and(|re| re.is_match(haystack))
    }
}

/// A numeric field plus the value a collector substitutes when it is missing.
pub struct NumericField {
    pub field: Field,
    pub default: f64,
}

impl NumericField {
    pub const fn new(label: &'static str, pattern: &'static str, default: f64) -> Self {
        Self {
            field: Field::new(label, pattern),
            default,
        }
    }

    pub fn read(&self, haystack: &str) -> f64 {
        self.field.number(haystack).unwrap_or(self.default)
    }
}

/// Round and clamp a percentage into 0..=100.
pub fn clamp_percent(v: f64) -> u8 {
    if !v.is_finite() {
        return 0;
    }
    v.round().clamp(0.0, 100.0) as u8
}

/// Cut `s` to at most `max` characters, ending in "..." when shortened.
pub fn truncate_ellipsis(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max <= 3 {
        return ".".repeat(max);
    }
    let kept: String = s.chars().take(max - 3).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    static USER: Field = Field::new("user", r"([\d.]+)%\s*user");
    static BROKEN: Field = Field::new("broken", r"(unclosed");

    #[test]
    fn text_returns_first_capture() {
        assert_eq!(USER.text("CPU usage: 3.5% user, 9.1% user"), Some("3.5"));
        assert_eq!(USER.number("CPU usage: 3.5% user"), Some(3.5));
    }

    #[test]
    fn missing_or_unparseable_is_absent_not_zero() {
        assert_eq!(USER.number("nothing here"), None);
        assert_eq!(USER.number(crate::runner::UNAVAILABLE), None);
        let dots = Field::new("dots", r"v=(\S+)");
        assert_eq!(dots.number("v=..."), None);
    }

    #[test]
    fn invalid_pattern_never_panics() {
        assert!(BROKEN.regex().is_none());
        assert_eq!(BROKEN.text("unclosed"), None);
        assert!(!BROKEN.is_match("unclosed"));
    }

    #[test]
    fn numeric_field_falls_back_to_default() {
        let idle = NumericField::new("idle", r"([\d.]+)%\s*idle", 100.0);
        assert_eq!(idle.read("0.5% user"), 100.0);
        assert_eq!(idle.read("42.0% idle"), 42.0);
    }

    #[test]
    fn clamp_percent_bounds() {
        assert_eq!(clamp_percent(-4.0), 0);
        assert_eq!(clamp_percent(100.6), 100);
        assert_eq!(clamp_percent(49.5), 50);
        assert_eq!(clamp_percent(f64::NAN), 0);
    }

    #[test]
    fn truncate_keeps_short_and_cuts_long() {
        assert_eq!(truncate_ellipsis("short", 30), "short");
        let long = "a".repeat(40);
        let cut = truncate_ellipsis(&long, 30);
        assert_eq!(cut.chars().count(), 30);
        assert!(cut.ends_with("..."));
    }
}
