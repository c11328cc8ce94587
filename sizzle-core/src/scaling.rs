//! Serving-size scaling for recipe text.
//!
//! Rewrites numeric quantities embedded in free-text ingredient and
//! instruction lines in proportion to a serving ratio, leaving every other
//! byte of the line untouched.
//!
//! Two modes match the two call sites:
//! - ingredient lines are scaled only at the very start of the line
//!   ("2 cups flour" → "4 cups flour")
//! - instruction lines are scanned in full for number-then-unit pairs
//!   ("Add 2 tbsp oil and 1 cup flour" → "Add 4 tbsp oil and 2 cup flour")
//!
//! The unit word is kept exactly as written, even when the scaled amount
//! would change its plurality ("1 cup" doubled stays "2 cup").

use std::sync::LazyLock;

/// Lowest and highest serving counts the serving picker accepts.
pub const MIN_SERVINGS: u32 = 1;
pub const MAX_SERVINGS: u32 = 99;

/// Units recognized when scaling quantities inside instruction text
/// (lowercase for matching). Sorted by length at runtime (longest first)
/// so "cups" matches before "cup" and the whole written unit is preserved.
static UNITS_SORTED: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut units = UNITS_RAW.to_vec();
    units.sort_by(|a, b| b.len().cmp(&a.len()));
    units
});

const UNITS_RAW: &[&str] = &[
    "cup",
    "cups",
    "tablespoon",
    "tablespoons",
    "tbsp",
    "teaspoon",
    "teaspoons",
    "tsp",
    "pound",
    "pounds",
    "lb",
    "ounce",
    "ounces",
    "oz",
    "gram",
    "grams",
    "g",
    "ml",
];

/// A numeric literal matched at the start of a string slice.
#[derive(Debug, Clone, Copy, PartialEq)]
struct NumberMatch {
    /// Parsed value of the matched text.
    value: f64,
    /// Byte length of the matched text.
    len: usize,
}

/// A number-then-unit occurrence matched at the start of a string slice.
#[derive(Debug, Clone, Copy, PartialEq)]
struct QuantityMatch {
    /// Parsed numeric value.
    value: f64,
    /// Byte offset where the unit text begins.
    unit_start: usize,
    /// Byte offset one past the end of the unit text.
    end: usize,
}

/// Ratio of a desired serving count to a recipe's baseline serving count.
///
/// A zero baseline is a malformed recipe; it is treated as unscaled rather
/// than dividing by zero.
pub fn scale_factor(target_servings: u32, baseline_servings: u32) -> f64 {
    if baseline_servings == 0 {
        return 1.0;
    }
    f64::from(target_servings) / f64::from(baseline_servings)
}

/// Clamp a requested serving count to the supported window.
pub fn clamp_servings(requested: u32) -> u32 {
    requested.clamp(MIN_SERVINGS, MAX_SERVINGS)
}

/// Scale the quantity at the start of an ingredient line.
///
/// Looks only at the start of the line for an integer or decimal amount
/// ("2", "1.5", ".5"). When found, the amount and any whitespace after it
/// are replaced by the scaled amount and a single space; the rest of the
/// line is returned byte for byte. Lines with no leading amount (e.g.
/// "Salt and pepper to taste") pass through unchanged.
pub fn scale_ingredient_line(line: &str, scale: f64) -> String {
    let Some(number) = match_number(line) else {
        return line.to_string();
    };
    let rest = line[number.len..].trim_start();
    format!("{} {}", format_scaled(number.value * scale), rest)
}

/// Scale every number-then-unit occurrence inside an instruction line.
///
/// The line is scanned left to right; each "<number><optional ws><unit>"
/// occurrence is independently replaced by the scaled amount, a single
/// space, and the unit exactly as written. Text between matches is
/// untouched, and bare numbers with no recognized unit ("bake for 12-15
/// minutes") are left alone.
pub fn scale_instruction_line(line: &str, scale: f64) -> String {
    let mut out = String::with_capacity(line.len());
    let mut i = 0;

    while i < line.len() {
        if let Some(quantity) = match_quantity(&line[i..]) {
            out.push_str(&format_scaled(quantity.value * scale));
            out.push(' ');
            out.push_str(&line[i + quantity.unit_start..i + quantity.end]);
            i += quantity.end;
        } else {
            // No match starting here; emit one char and try the next position
            let ch_len = line[i..]
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(1);
            out.push_str(&line[i..i + ch_len]);
            i += ch_len;
        }
    }

    out
}

/// Match an integer or decimal literal at the start of a string.
///
/// Accepts "2", "1.5", and ".5"; the match must end on a digit, so "5."
/// matches only the "5". Unparseable text is a non-match, never an error.
fn match_number(s: &str) -> Option<NumberMatch> {
    let bytes = s.as_bytes();

    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    // Optional fractional part; only consumed when digits follow the dot
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > end + 1 {
            end = frac_end;
        }
    }

    if end == 0 || !bytes[end - 1].is_ascii_digit() {
        return None;
    }

    let value: f64 = s[..end].parse().ok()?;
    Some(NumberMatch { value, len: end })
}

/// Match a number followed by optional whitespace and a recognized unit.
fn match_quantity(s: &str) -> Option<QuantityMatch> {
    let number = match_number(s)?;
    let after = &s[number.len..];
    let ws_len = after.len() - after.trim_start().len();
    let unit_start = number.len + ws_len;
    let unit_len = match_unit(&s[unit_start..])?;

    Some(QuantityMatch {
        value: number.value,
        unit_start,
        end: unit_start + unit_len,
    })
}

/// Match a recognized unit at the start of a string, case-insensitively.
/// Returns the byte length of the matched unit text.
fn match_unit(s: &str) -> Option<usize> {
    UNITS_SORTED.iter().find_map(|unit| {
        s.get(..unit.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(unit))
            .map(|_| unit.len())
    })
}

/// Format a scaled quantity for display.
///
/// Rounds to 2 decimal places using standard rounding (not banker's), then
/// strips trailing zeros and any trailing decimal point: 4.00 → "4",
/// 4.50 → "4.5", 4.333 → "4.33". Locale-independent and deterministic.
fn format_scaled(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let formatted = format!("{rounded:.2}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
