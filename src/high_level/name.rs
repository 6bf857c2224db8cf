use derive_more::{DebugCustom, Display};
use serde::Serialize;

/// Identifier that is safe as an XML attribute value and as a console-side
/// name token.
///
/// A SafeName is never empty, only contains `[A-Za-z0-9_]` and never starts
/// with a digit. The only way to get one is [`sanitize`] (or one of the
/// constructors built on it), so the invariant holds for every value.
#[derive(
    PartialOrd, PartialEq, Eq, Ord, Clone, Hash, Display, DebugCustom, Serialize,
)]
#[debug(fmt = "{_0:?}")]
pub struct SafeName(String);

impl SafeName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prepend `prefix` verbatim. `prefix` has to be safe on its own, which
    /// holds for the fixed prefixes used by the builder.
    pub(crate) fn prefixed(&self, prefix: &str) -> SafeName {
        SafeName(format!("{prefix}{}", self.0))
    }
}

impl AsRef<str> for SafeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SafeName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SafeName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<SafeName> for String {
    fn from(value: SafeName) -> Self {
        value.0
    }
}

/// Literal substitutions applied before anything gets stripped.
const SUBSTITUTIONS: [(char, &str); 7] = [
    ('°', "deg"),
    ('%', "pct"),
    ('/', "_"),
    ('.', "_"),
    (':', "_"),
    (';', "_"),
    ('-', "_"),
];

/// Turn arbitrary text into a [`SafeName`].
///
/// Degree and percent signs become `deg` and `pct`. Slashes, periods, colons,
/// semicolons and hyphens become underscores. Every other character outside
/// ASCII `[A-Za-z0-9_ ]` is dropped, runs of spaces and underscores collapse
/// into a single underscore and leading or trailing underscores are trimmed.
///
/// If nothing is left, `fallback` is used instead. If the result starts with a
/// digit, it is prefixed with `fallback` and an underscore. `fallback` is
/// sanitized as well, with `"Ch"` as the last resort.
pub fn sanitize(text: &str, fallback: &str) -> SafeName {
    let cleaned = clean(text);
    match cleaned.chars().next() {
        None => sanitize_fallback(fallback),
        Some(c) if c.is_ascii_digit() => {
            SafeName(format!("{}_{cleaned}", sanitize_fallback(fallback)))
        }
        Some(_) => SafeName(cleaned),
    }
}

fn sanitize_fallback(fallback: &str) -> SafeName {
    let cleaned = clean(fallback);
    match cleaned.chars().next() {
        None => SafeName("Ch".to_owned()),
        Some(c) if c.is_ascii_digit() => SafeName(format!("Ch_{cleaned}")),
        Some(_) => SafeName(cleaned),
    }
}

fn clean(text: &str) -> String {
    let mut substituted = String::with_capacity(text.len());
    for c in text.trim().chars() {
        match SUBSTITUTIONS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => substituted.push_str(to),
            None => substituted.push(c),
        }
    }

    let mut out = String::with_capacity(substituted.len());
    let mut pending_separator = false;
    for c in substituted.chars() {
        if c == ' ' || c == '_' {
            pending_separator = true;
        } else if c.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            pending_separator = false;
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutions() {
        assert_eq!(sanitize("Pan 540°", "Ch"), "Pan_540deg");
        assert_eq!(sanitize("Dimmer 100%", "Ch"), "Dimmer_100pct");
        assert_eq!(sanitize("R/G/B", "Ch"), "R_G_B");
        assert_eq!(sanitize("v1.2: a;b", "Ch"), "v1_2_a_b");
        assert_eq!(sanitize("Strobe - Fast", "Ch"), "Strobe_Fast");
    }

    #[test]
    fn strips_and_collapses() {
        assert_eq!(sanitize("  Gobo   Wheel  ", "Ch"), "Gobo_Wheel");
        assert_eq!(sanitize("__a__b__", "Ch"), "a_b");
        assert_eq!(sanitize("Colour (Wheel) #2!", "Ch"), "Colour_Wheel_2");
        assert_eq!(sanitize("Färbe", "Ch"), "Frbe");
    }

    #[test]
    fn fallback() {
        assert_eq!(sanitize("", "Mode"), "Mode");
        assert_eq!(sanitize("!!!", "Fixture"), "Fixture");
        assert_eq!(sanitize("3 Cell Bar", "Fixture"), "Fixture_3_Cell_Bar");
        assert_eq!(sanitize("", ""), "Ch");
        assert_eq!(sanitize("1", "2"), "Ch_2_1");
    }

    #[test]
    fn idempotent() {
        for input in [
            "",
            "Dimmer Fine",
            "3 Cell Bar",
            "  _x_  ",
            "°%/.:;-",
            "Gobo-Wheel / Rotation",
            "xyz123CustomThing",
        ] {
            let once = sanitize(input, "Ch");
            let twice = sanitize(once.as_str(), "Ch");
            assert_eq!(once, twice, "input {input:?}");
        }
    }

    #[test]
    fn only_safe_chars() {
        for input in ["a<b>&c\"d'", "1st", "   ", "ünïcödé", "tab\there"] {
            let s = sanitize(input, "Ch");
            assert!(!s.as_str().is_empty());
            assert!(!s.as_str().starts_with(|c: char| c.is_ascii_digit()));
            assert!(s
                .as_str()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_'));
        }
    }

    #[test]
    fn display_and_debug() {
        let name = sanitize("yay", "Ch");
        assert_eq!("yay", format!("{name}"));
        assert_eq!("\"yay\"", format!("{name:?}"));
    }
}
