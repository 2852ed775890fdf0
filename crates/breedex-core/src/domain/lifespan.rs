//! Lifespan parsing and aggregation.
//!
//! Lifespans arrive as free text ("10 - 14", "12 years", "14 - 16 years").
//! Parsing never fails: unparseable text is worth `0.0`.

use super::breed::BreedRecord;

const YEARS_SUFFIX: &str = "years";

/// Parse a free-text lifespan into a number of years.
///
/// Rules, in order:
/// 1. Trim and strip a trailing `years` token.
/// 2. A `-` separates a range of exactly two integers; the value is their mean.
/// 3. Otherwise the whole text must be an integer.
/// 4. Anything else yields `0.0`.
#[allow(clippy::cast_precision_loss)]
pub fn parse_lifespan(text: &str) -> f64 {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_suffix(YEARS_SUFFIX).unwrap_or(trimmed).trim();

    if trimmed.contains('-') {
        let parts: Vec<&str> = trimmed.split('-').collect();
        if let [low, high] = parts.as_slice() {
            if let (Ok(low), Ok(high)) = (low.trim().parse::<i64>(), high.trim().parse::<i64>()) {
                return (low as f64 + high as f64) / 2.0;
            }
        }
        return 0.0;
    }

    trimmed.parse::<i64>().map_or(0.0, |years| years as f64)
}

/// Average lifespan across a set of texts.
///
/// Unparseable entries contribute `0.0` but still count toward the divisor.
/// An empty input averages to `0.0`.
pub fn average_of<'a, I>(texts: I) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    let (sum, count) = texts
        .into_iter()
        .fold((0.0_f64, 0_u32), |(sum, count), text| {
            (sum + parse_lifespan(text), count + 1)
        });

    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

/// Average lifespan across breed records.
pub fn average_lifespan(records: &[BreedRecord]) -> f64 {
    average_of(records.iter().map(|r| r.life_span.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Species;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < f64::EPSILON
    }

    #[test]
    fn test_parse_range() {
        assert!(approx(parse_lifespan("10 - 14"), 12.0));
        assert!(approx(parse_lifespan("12-15"), 13.5));
    }

    #[test]
    fn test_parse_with_years_suffix() {
        assert!(approx(parse_lifespan("12 years"), 12.0));
        assert!(approx(parse_lifespan(" 10 - 12 years "), 11.0));
    }

    #[test]
    fn test_parse_plain_integer() {
        assert!(approx(parse_lifespan("9"), 9.0));
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        assert!(approx(parse_lifespan("abc"), 0.0));
        assert!(approx(parse_lifespan(""), 0.0));
        assert!(approx(parse_lifespan("10 - ?"), 0.0));
        assert!(approx(parse_lifespan("8 - 10 - 12"), 0.0));
        assert!(approx(parse_lifespan("twelve years"), 0.0));
    }

    #[test]
    fn test_average_mixed_formats() {
        let avg = average_of(["10 - 14", "12 years", "9"]);
        assert!(approx(avg, 11.0));
    }

    #[test]
    fn test_average_empty_is_zero() {
        assert!(approx(average_of(std::iter::empty::<&str>()), 0.0));
    }

    #[test]
    fn test_invalid_entry_still_counts_toward_divisor() {
        assert!(approx(average_of(["abc"]), 0.0));
        // 12 / 2, not 12 / 1
        assert!(approx(average_of(["12", "unknown"]), 6.0));
    }

    #[test]
    fn test_average_lifespan_over_records() {
        let mut a = BreedRecord::new(Species::Dog, "1", "Affenpinscher");
        a.life_span = "10 - 12 years".to_string();
        let mut b = BreedRecord::new(Species::Dog, "2", "Afghan Hound");
        b.life_span = "14 years".to_string();

        assert!(approx(average_lifespan(&[a, b]), 12.5));
    }
}
