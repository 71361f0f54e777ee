//! Postcode types: validated input postcodes and prefix-tier decomposition.

use std::fmt;

/// Error returned when parsing an invalid or unsupported postcode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid postcode: {reason}")]
pub struct InvalidPostcode {
    reason: &'static str,
}

impl InvalidPostcode {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }

    /// Returns the reason this postcode was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// A validated full UK postcode in canonical form.
///
/// Canonical form is uppercase with a single space between the outward and
/// inward codes (e.g. `"SW1A 1AA"`). Only postcodes the court finder serves
/// are accepted: Scotland, Northern Ireland, the Isle of Man and the Channel
/// Islands are rejected as unsupported rather than malformed.
///
/// # Examples
///
/// ```
/// use court_server::domain::Postcode;
///
/// let pc = Postcode::parse("sw1a  1aa").unwrap();
/// assert_eq!(pc.as_str(), "SW1A 1AA");
///
/// // Outward-only input is rejected; the address lookup needs a full postcode
/// assert!(Postcode::parse("SW1A").is_err());
///
/// // Scottish postcodes are out of jurisdiction
/// assert!(Postcode::parse("EH1 1AA").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Postcode(String);

/// Postcode area prefixes served by Scottish courts.
const SCOTLAND_AREAS: [&str; 15] = [
    "ZE", "KW", "IV", "HS", "PH", "AB", "DD", "PA", "FK", "KY", "KA", "DG", "EH", "ML", "TD",
];

/// Crown dependency areas (Isle of Man, Jersey, Guernsey).
const CROWN_DEPENDENCY_AREAS: [&str; 3] = ["IM", "JE", "GY"];

impl Postcode {
    /// Parse and validate a full UK postcode.
    ///
    /// Normalizes case and whitespace, checks the outward/inward grammar,
    /// and rejects regions outside the England-and-Wales jurisdiction.
    pub fn parse(raw: &str) -> Result<Self, InvalidPostcode> {
        let normalized = normalize(raw);

        if normalized.is_empty() {
            return Err(InvalidPostcode::new("postcode must not be blank"));
        }

        // The special GIR 0AA postcode (Girobank) is always valid.
        if normalized == "GIR 0AA" {
            return Ok(Self(normalized));
        }

        let Some((outward, inward)) = normalized.split_once(' ') else {
            return Err(InvalidPostcode::new(
                "postcode must contain a space between outward and inward codes",
            ));
        };

        if !valid_outward(outward) || !valid_inward(inward) {
            return Err(InvalidPostcode::new("not a valid UK postcode"));
        }

        if is_scotland(outward) {
            return Err(InvalidPostcode::new("Scotland is not supported"));
        }

        if outward.starts_with("BT") {
            return Err(InvalidPostcode::new("Northern Ireland is not supported"));
        }

        if CROWN_DEPENDENCY_AREAS
            .iter()
            .any(|area| outward.starts_with(area))
        {
            return Err(InvalidPostcode::new("postcode region is not supported"));
        }

        Ok(Self(normalized))
    }

    /// Returns the postcode in canonical form (`"SW1A 1AA"`).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Postcode({})", self.0)
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Uppercase, trim, and collapse internal whitespace to single spaces.
fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Validate the outward code (area + district), e.g. "SW1A", "PL12", "N1".
///
/// Accepted shapes: `A9`, `A99`, `A9X`, `AA9`, `AA99`, `AA9X`, where the
/// second area letter may not be `I` (never allocated by Royal Mail).
fn valid_outward(s: &str) -> bool {
    let b = s.as_bytes();
    if !(2..=4).contains(&b.len()) || !b[0].is_ascii_uppercase() {
        return false;
    }

    match b.len() {
        // A9
        2 => b[1].is_ascii_digit(),
        // A99 | A9X | AA9
        3 => {
            if b[1].is_ascii_digit() {
                b[2].is_ascii_digit() || b[2].is_ascii_uppercase()
            } else {
                valid_second_area_letter(b[1]) && b[2].is_ascii_digit()
            }
        }
        // AA99 | AA9X
        4 => {
            valid_second_area_letter(b[1])
                && b[2].is_ascii_digit()
                && (b[3].is_ascii_digit() || b[3].is_ascii_uppercase())
        }
        _ => false,
    }
}

/// Second area letters exclude `I` to avoid confusion with `1`.
fn valid_second_area_letter(b: u8) -> bool {
    b.is_ascii_uppercase() && b != b'I'
}

/// Validate the inward code: a digit followed by two letters, e.g. "1AA".
fn valid_inward(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 3 && b[0].is_ascii_digit() && b[1].is_ascii_uppercase() && b[2].is_ascii_uppercase()
}

/// A "G" followed by a digit is Glasgow; "GL"/"GU" etc. are not.
fn is_scotland(outward: &str) -> bool {
    if SCOTLAND_AREAS.iter().any(|area| outward.starts_with(area)) {
        return true;
    }
    let b = outward.as_bytes();
    b.len() >= 2 && b[0] == b'G' && b[1].is_ascii_digit()
}

/// Nested prefix tiers of a postcode, used for tiered catchment matching.
///
/// Each tier is a strict-or-equal prefix of the one above it, derived from
/// the normalized (uppercase, space-stripped) postcode:
///
/// - `minus_unit`: the postcode with its two-letter unit removed ("SW1A1")
/// - `out_code`: the outward code ("SW1A")
/// - `area_code`: the leading letters ("SW")
///
/// Decomposition is total: it accepts partial, malformed, or empty input
/// and never fails, since tiers are only ever used as `LIKE`-style prefixes.
#[derive(Clone, PartialEq, Eq)]
pub struct PostcodeLadder {
    minus_unit: String,
    out_code: String,
    area_code: String,
}

impl PostcodeLadder {
    /// Decompose a raw postcode string into prefix tiers.
    ///
    /// The input is trimmed, uppercased, and stripped of all spaces. A
    /// postcode "has a unit" when its last two characters are both letters;
    /// the unit and the digit preceding it are peeled off to form the tiers.
    pub fn decompose(raw: &str) -> Self {
        let full: String = raw
            .trim()
            .chars()
            .filter(|c| *c != ' ')
            .collect::<String>()
            .to_uppercase();
        let chars: Vec<char> = full.chars().collect();

        let has_unit = chars.len() >= 2
            && chars[chars.len() - 1].is_ascii_alphabetic()
            && chars[chars.len() - 2].is_ascii_alphabetic();

        let (minus_unit, out_code) = if has_unit {
            (
                chars[..chars.len() - 2].iter().collect(),
                chars[..chars.len().saturating_sub(3)].iter().collect(),
            )
        } else {
            let out_code = match chars.last() {
                Some(c) if c.is_ascii_digit() => chars[..chars.len() - 1].iter().collect(),
                _ => full.clone(),
            };
            (full.clone(), out_code)
        };

        Self {
            minus_unit,
            out_code,
            area_code: area_prefix(&full),
        }
    }

    /// The postcode without its unit, no spaces (e.g. "SW1A1").
    pub fn minus_unit(&self) -> &str {
        &self.minus_unit
    }

    /// The outward code, no spaces (e.g. "SW1A").
    pub fn out_code(&self) -> &str {
        &self.out_code
    }

    /// The leading area letters (e.g. "SW").
    pub fn area_code(&self) -> &str {
        &self.area_code
    }
}

impl fmt::Debug for PostcodeLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostcodeLadder")
            .field("minus_unit", &self.minus_unit)
            .field("out_code", &self.out_code)
            .field("area_code", &self.area_code)
            .finish()
    }
}

/// The leading run of non-digit characters; a string with no such prefix
/// (empty, or starting with a digit) yields the whole string.
fn area_prefix(s: &str) -> String {
    let end = s
        .char_indices()
        .find(|(_, c)| c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    if end == 0 {
        s.to_string()
    } else {
        s[..end].to_string()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for postcode-shaped strings: a valid outward code, optional
    /// spacing, and an inward code, in random case.
    fn postcode_shaped() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Z][A-HJ-Y]?[0-9][0-9A-Z]? ?[0-9][A-Za-z]{2}").unwrap()
    }

    proptest! {
        /// Tiers nest: area_code ⊑ out_code ⊑ minus_unit ⊑ normalized input.
        #[test]
        fn ladder_tiers_nest(s in postcode_shaped()) {
            let ladder = PostcodeLadder::decompose(&s);
            let normalized: String = s
                .trim()
                .chars()
                .filter(|c| *c != ' ')
                .collect::<String>()
                .to_uppercase();

            prop_assert!(ladder.out_code().starts_with(ladder.area_code()));
            prop_assert!(ladder.minus_unit().starts_with(ladder.out_code()));
            prop_assert!(normalized.starts_with(ladder.minus_unit()));
        }

        /// Decomposition is idempotent over its own minus-unit tier.
        #[test]
        fn ladder_minus_unit_is_stable(s in postcode_shaped()) {
            let first = PostcodeLadder::decompose(&s);
            let again = PostcodeLadder::decompose(first.minus_unit());
            prop_assert_eq!(again.out_code(), first.out_code());
            prop_assert_eq!(again.area_code(), first.area_code());
        }

        /// Decomposition never panics, whatever the input.
        #[test]
        fn ladder_total(s in ".*") {
            let _ = PostcodeLadder::decompose(&s);
        }

        /// Parsed postcodes round-trip through their canonical form.
        #[test]
        fn parse_canonical_roundtrip(s in "[A-Z][A-HJ-Y]?[0-9][0-9A-Z]? [0-9][A-Z]{2}") {
            if let Ok(pc) = Postcode::parse(&s) {
                let again = Postcode::parse(pc.as_str()).unwrap();
                prop_assert_eq!(pc, again);
            }
        }
    }
}
