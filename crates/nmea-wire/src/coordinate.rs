use crate::error::SentenceError;
use crate::fields::Fields;

/// Convert a raw `DDMM.MMMM` (or `DMM.MMMM`, `DDDMM.MMMM`) value to
/// decimal degrees.
///
/// The whole degrees are the value divided by 100 and truncated toward
/// zero; the remaining fraction holds the minutes scaled by 1/100.
///
/// ```text
///   3723.46587704 / 100 = 37.2346587704
///   37 + 0.2346587704 × 100 / 60 = 37.391097950...
/// ```
#[must_use]
pub fn degrees_minutes_to_decimal(raw: f64) -> f64 {
    let scaled = raw / 100.0;
    let degrees = scaled.trunc();
    degrees + (scaled - degrees) * 100.0 / 60.0
}

/// Read a coordinate and its hemisphere letter from `fields`.
///
/// `value_index` holds the degrees-minutes number and
/// `value_index + 1` the hemisphere. The result is negated when the
/// hemisphere equals `negative` (`"S"` for latitude, `"W"` for
/// longitude); any other letter, including an empty field, is taken as
/// positive.
///
/// # Errors
///
/// Returns [`SentenceError::InvalidNumber`] if the value is not numeric.
pub fn parse_coordinate(
    fields: &Fields<'_>,
    value_index: usize,
    field: &'static str,
    negative: &str,
) -> Result<f64, SentenceError> {
    let degrees = degrees_minutes_to_decimal(fields.number(value_index, field)?);
    if fields.get(value_index + 1) == Some(negative) {
        Ok(-degrees)
    } else {
        Ok(degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn converts_two_digit_degrees() {
        assert!(approx(degrees_minutes_to_decimal(3723.465_877_04), 37.391_098));
        assert!(approx(degrees_minutes_to_decimal(4916.45), 49.274_167));
    }

    #[test]
    fn converts_three_digit_degrees() {
        assert!(approx(degrees_minutes_to_decimal(12202.269_578_64), 122.037_826));
    }

    #[test]
    fn converts_single_digit_degrees() {
        assert!(approx(degrees_minutes_to_decimal(530.0), 5.5));
    }

    #[test]
    fn zero_stays_zero() {
        assert_eq!(degrees_minutes_to_decimal(0.0), 0.0);
    }

    #[test]
    fn hemisphere_sign() {
        let fields = Fields::split(",4916.45,S,12311.12,E");
        assert!(approx(parse_coordinate(&fields, 0, "lat", "S").unwrap(), -49.274_167));
        assert!(approx(parse_coordinate(&fields, 2, "lon", "W").unwrap(), 123.185_333));
    }

    #[test]
    fn missing_hemisphere_is_positive() {
        let fields = Fields::split(",4916.45,,12311.12");
        assert!(parse_coordinate(&fields, 0, "lat", "S").unwrap() > 0.0);
        assert!(parse_coordinate(&fields, 2, "lon", "W").unwrap() > 0.0);
    }
}
