//! Jathagam (birth chart) calculation.
//!
//! Computes a basic sidereal chart from birth date, time (UT) and
//! geographic coordinates: weekday, tithi, moon/sun rasi, nakshatra with
//! pada, and the lagna. Planetary positions use truncated mean-element
//! series, which is sufficient for sign- and nakshatra-level results.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Sidereal zodiac signs, Mesha through Meena.
const RASIS: [&str; 12] = [
    "Mesha",
    "Vrishabha",
    "Mithuna",
    "Karka",
    "Simha",
    "Kanya",
    "Tula",
    "Vrischika",
    "Dhanus",
    "Makara",
    "Kumbha",
    "Meena",
];

/// The 27 nakshatras, Ashwini through Revati.
const NAKSHATRAS: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishta",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

/// Weekday lords, Sunday through Saturday.
const VAARAS: [&str; 7] = [
    "Ravi", "Soma", "Mangala", "Budha", "Guru", "Shukra", "Shani",
];

/// Calculation failure variants.
#[derive(Debug, thiserror::Error)]
pub enum JathagamError {
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("invalid time of day {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
    #[error("latitude {0} out of range -90..90")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} out of range -180..180")]
    LongitudeOutOfRange(f64),
}

/// Computed chart. Serialized verbatim as the service response.
#[derive(Debug, Clone, Serialize)]
pub struct Jathagam {
    pub julian_day: f64,
    pub ayanamsa: f64,
    /// Sidereal longitudes in degrees, 0..360.
    pub sun_longitude: f64,
    pub moon_longitude: f64,
    pub lagna_longitude: f64,
    pub vaara: String,
    pub tithi: u8,
    /// Chandra rasi (moon sign) — the rasi of the chart.
    pub rasi: String,
    pub sun_rasi: String,
    pub lagna: String,
    pub nakshatra: String,
    pub nakshatra_pada: u8,
}

fn normalize_degrees(value: f64) -> f64 {
    let v = value % 360.0;
    if v < 0.0 { v + 360.0 } else { v }
}

/// Julian day for a Gregorian date + UT time of day.
fn julian_day(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> f64 {
    let (y, m) = if month <= 2 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    let day_fraction = (f64::from(hour) + f64::from(minute) / 60.0) / 24.0;
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + f64::from(day) + b
        - 1524.5
        + day_fraction
}

/// Tropical solar longitude (mean elements + equation of center).
fn sun_tropical_longitude(t: f64) -> f64 {
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35999.05029 * t).to_radians();
    let c = (1.914602 - 0.004817 * t) * m.sin()
        + 0.019993 * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    normalize_degrees(l0 + c)
}

/// Tropical lunar longitude (principal periodic terms only).
fn moon_tropical_longitude(t: f64) -> f64 {
    let lp = 218.3164477 + 481267.88123421 * t;
    let d = (297.8501921 + 445267.1114034 * t).to_radians();
    let m = (357.5291092 + 35999.0502909 * t).to_radians();
    let mp = (134.9633964 + 477198.8675055 * t).to_radians();
    let f = (93.2720950 + 483202.0175233 * t).to_radians();
    let longitude = lp
        + 6.288774 * mp.sin()
        + 1.274027 * (2.0 * d - mp).sin()
        + 0.658314 * (2.0 * d).sin()
        + 0.213618 * (2.0 * mp).sin()
        - 0.185116 * m.sin()
        - 0.114332 * (2.0 * f).sin();
    normalize_degrees(longitude)
}

/// Lahiri ayanamsa, linear approximation around J2000.
fn ayanamsa(t: f64) -> f64 {
    23.85 + 1.397 * t
}

/// Tropical ascendant from local sidereal time, obliquity and latitude.
fn ascendant_tropical(jd: f64, t: f64, lat: f64, lon: f64) -> f64 {
    let gmst =
        normalize_degrees(280.46061837 + 360.98564736629 * (jd - 2451545.0) + 0.000387933 * t * t);
    let ramc = normalize_degrees(gmst + lon).to_radians();
    let eps = (23.4392911 - 0.0130042 * t).to_radians();
    let asc = f64::atan2(
        ramc.cos(),
        -(ramc.sin() * eps.cos() + lat.to_radians().tan() * eps.sin()),
    );
    normalize_degrees(asc.to_degrees())
}

fn rasi_of(longitude: f64) -> String {
    RASIS[(longitude / 30.0) as usize % 12].to_owned()
}

/// Compute the chart for the given birth details. Time is taken as UT;
/// longitude is positive east.
pub fn calculate_jathagam(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    lat: f64,
    lon: f64,
) -> Result<Jathagam, JathagamError> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(JathagamError::InvalidDate { year, month, day })?;
    if hour > 23 || minute > 59 {
        return Err(JathagamError::InvalidTime { hour, minute });
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(JathagamError::LatitudeOutOfRange(lat));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(JathagamError::LongitudeOutOfRange(lon));
    }

    let jd = julian_day(year, month, day, hour, minute);
    let t = (jd - 2451545.0) / 36525.0;
    let ayan = ayanamsa(t);

    let sun = normalize_degrees(sun_tropical_longitude(t) - ayan);
    let moon = normalize_degrees(moon_tropical_longitude(t) - ayan);
    let lagna = normalize_degrees(ascendant_tropical(jd, t, lat, lon) - ayan);

    let tithi = (normalize_degrees(moon - sun) / 12.0) as u8 + 1;
    let nakshatra_index = (moon * 27.0 / 360.0) as usize % 27;
    let pada = (moon * 108.0 / 360.0) as u8 % 4 + 1;
    let vaara = VAARAS[date.weekday().num_days_from_sunday() as usize];

    Ok(Jathagam {
        julian_day: jd,
        ayanamsa: ayan,
        sun_longitude: sun,
        moon_longitude: moon,
        lagna_longitude: lagna,
        vaara: vaara.to_owned(),
        tithi,
        rasi: rasi_of(moon),
        sun_rasi: rasi_of(sun),
        lagna: rasi_of(lagna),
        nakshatra: NAKSHATRAS[nakshatra_index].to_owned(),
        nakshatra_pada: pada,
    })
}
