//! Typed views of the two decoded sentence layouts.
//!
//! Field indices below count from the first data field (the comma
//! after the sentence ID is skipped by [`Fields::split`]).
//!
//! ```text
//!   GGA  0:time 1:lat 2:N/S 3:lon 4:E/W 5:quality ...
//!   RMC  0:time 1:status 2:lat 3:N/S 4:lon 5:E/W 6:speed 7:course ...
//! ```

use std::f64::consts::PI;

use crate::coordinate::parse_coordinate;
use crate::error::SentenceError;
use crate::fields::Fields;
use crate::header::SentenceKind;

const COURSE_INDEX: usize = 7;

/// Position carried by a `GGA` sentence, in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GgaFix {
    pub latitude: f64,
    pub longitude: f64,
}

impl GgaFix {
    /// # Errors
    ///
    /// - [`SentenceError::TooFewFields`] if there are 5 fields or fewer.
    /// - [`SentenceError::InvalidNumber`] if latitude or longitude is not
    ///   numeric.
    pub fn parse(fields: &Fields<'_>) -> Result<Self, SentenceError> {
        require_fields(SentenceKind::Fix, fields)?;
        Ok(Self {
            latitude: parse_coordinate(fields, 1, "latitude", "S")?,
            longitude: parse_coordinate(fields, 3, "longitude", "W")?,
        })
    }
}

/// Position and course carried by an `RMC` sentence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RmcData {
    pub latitude: f64,
    pub longitude: f64,
    /// Course over ground in degrees, as transmitted.
    pub course_degrees: f64,
}

impl RmcData {
    /// # Errors
    ///
    /// - [`SentenceError::TooFewFields`] if there are 8 fields or fewer.
    /// - [`SentenceError::InvalidNumber`] if latitude, longitude or
    ///   course is not numeric, or the course does not fit an `f32`
    ///   heading.
    pub fn parse(fields: &Fields<'_>) -> Result<Self, SentenceError> {
        require_fields(SentenceKind::RecommendedMinimum, fields)?;
        let data = Self {
            latitude: parse_coordinate(fields, 2, "latitude", "S")?,
            longitude: parse_coordinate(fields, 4, "longitude", "W")?,
            course_degrees: fields.number(COURSE_INDEX, "course")?,
        };
        if !data.heading_radians().is_finite() {
            return Err(SentenceError::InvalidNumber {
                field: "course",
                index: COURSE_INDEX,
                value: fields.get(COURSE_INDEX).unwrap_or_default().to_string(),
            });
        }
        Ok(data)
    }

    /// Course over ground in radians.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn heading_radians(&self) -> f32 {
        (self.course_degrees / 180.0 * PI) as f32
    }
}

fn require_fields(kind: SentenceKind, fields: &Fields<'_>) -> Result<(), SentenceError> {
    let needed = kind.min_fields();
    if fields.len() > needed {
        Ok(())
    } else {
        Err(SentenceError::TooFewFields {
            kind,
            needed,
            found: fields.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GGA: &str =
        ",172814.0,3723.46587704,N,12202.26957864,W,2,6,1.2,18.893,M,-25.669,M,2.0,0031*4F";
    const RMC: &str = ",225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68";

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn gga_position() {
        let fix = GgaFix::parse(&Fields::split(GGA)).unwrap();
        assert!(approx(fix.latitude, 37.391_098));
        assert!(approx(fix.longitude, -122.037_826));
    }

    #[test]
    fn gga_southern_eastern() {
        let flipped = GGA.replace(",N,", ",S,").replace(",W,", ",E,");
        let fix = GgaFix::parse(&Fields::split(&flipped)).unwrap();
        assert!(approx(fix.latitude, -37.391_098));
        assert!(approx(fix.longitude, 122.037_826));
    }

    #[test]
    fn gga_too_few_fields() {
        let err = GgaFix::parse(&Fields::split(",1,2,N,3,W")).unwrap_err();
        assert_eq!(
            err,
            SentenceError::TooFewFields {
                kind: SentenceKind::Fix,
                needed: 5,
                found: 5
            }
        );
    }

    #[test]
    fn gga_without_fix_is_rejected() {
        let err = GgaFix::parse(&Fields::split(",123519,,,,,0,00,,,M,,M,,*47")).unwrap_err();
        assert!(matches!(
            err,
            SentenceError::InvalidNumber {
                field: "latitude",
                ..
            }
        ));
    }

    #[test]
    fn rmc_position_and_course() {
        let rmc = RmcData::parse(&Fields::split(RMC)).unwrap();
        assert!(approx(rmc.latitude, 49.274_167));
        assert!(approx(rmc.longitude, -123.185_333));
        assert!(approx(rmc.course_degrees, 54.7));
        assert!((rmc.heading_radians() - 0.954_69).abs() < 1e-4);
    }

    #[test]
    fn rmc_too_few_fields() {
        assert!(matches!(
            RmcData::parse(&Fields::split(",225446,A,4916.45,N,12311.12,W,000.5,054.7")),
            Err(SentenceError::TooFewFields { found: 8, .. })
        ));
    }

    #[test]
    fn rmc_course_beyond_f32_is_rejected() {
        let huge = RMC.replace("054.7", "1e41");
        assert!(matches!(
            RmcData::parse(&Fields::split(&huge)),
            Err(SentenceError::InvalidNumber { field: "course", index: 7, .. })
        ));
    }

    #[test]
    fn rmc_bad_course() {
        let bad = RMC.replace("054.7", "north");
        assert!(matches!(
            RmcData::parse(&Fields::split(&bad)),
            Err(SentenceError::InvalidNumber { field: "course", index: 7, .. })
        ));
    }
}
