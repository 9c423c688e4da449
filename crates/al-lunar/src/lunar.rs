//! Lunar date resolution.
//!
//! A lunar month starts on the civil day (UTC+7) of a new moon. Month 11 is
//! always the month containing the winter solstice; when two consecutive
//! month-11 new moons are 13 lunations apart, the first month in between
//! that contains no major solar term (no change of 30° sector) is the leap
//! month and repeats the number of the month before it.

use al_astro::moon::{lunation_before, lunation_nearest};
use al_astro::{new_moon_day, sun_longitude_sector};
use al_core::errors::{Error, Result};
use al_core::settings::{jdn_in_range, MAX_YEAR, MIN_YEAR, TIME_ZONE};
use al_core::{ensure, Jdn, Year};
use al_time::julian::{jdn_from_ymd, ymd_from_jdn};
use al_time::{from_jdn, to_jdn, SolarDate};
use tracing::{debug, trace};

/// Civil day of new moon `k = 0` (1900-01-01).
const LUNATION_ORIGIN: Jdn = 2_415_021;

/// Largest offset from month 11 at which a leap month can sit.
const MAX_LEAP_OFFSET: i32 = 13;

/// First lunar year accepted by [`lunar_to_solar`]: 1900-01-01 falls in
/// month 12 of lunar 1899.
pub const MIN_LUNAR_YEAR: Year = MIN_YEAR - 1;

/// A date in the Vietnamese lunar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LunarDate {
    /// Day of the lunar month (1–30).
    pub day: u8,
    /// Lunar month number (1–12).
    pub month: u8,
    /// Lunar year.
    pub year: Year,
    /// `true` for the leap (nhuận) month of the year.
    pub leap: bool,
    /// Day number of the corresponding solar date.
    pub jd: Jdn,
}

impl LunarDate {
    /// Day number on which this lunar month starts.
    pub fn month_start(&self) -> Jdn {
        self.jd - self.day as Jdn + 1
    }

    /// Number of days in this lunar month (29 or 30).
    pub fn month_length(&self) -> u8 {
        let start = self.month_start();
        let next = new_moon_day(lunation_nearest(start) + 1, TIME_ZONE);
        (next - start) as u8
    }

    /// The solar date this lunar date falls on.
    pub fn to_solar(&self) -> Result<SolarDate> {
        from_jdn(self.jd)
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.year)?;
        if self.leap {
            f.write_str(" (nhuận)")?;
        }
        Ok(())
    }
}

/// One month of a lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LunarMonth {
    /// Month number (1–12).
    pub month: u8,
    /// `true` for the leap month.
    pub leap: bool,
    /// Day number of the first day.
    pub start: Jdn,
    /// Number of days (29 or 30).
    pub length: u8,
}

// ── Month anchors ─────────────────────────────────────────────────────────────

/// Day number on which month 11 begins around the end of solar `year`.
///
/// Takes the new moon preceding 31 December; if the sun has already passed
/// 270° by then, month 11 started one lunation earlier.
pub fn month_11_start(year: Year) -> Jdn {
    let off = jdn_from_ymd(31, 12, year) - LUNATION_ORIGIN;
    let k = (off as f64 / al_astro::SYNODIC_MONTH).floor() as i32;
    let nm = new_moon_day(k, TIME_ZONE);
    if sun_longitude_sector(nm, TIME_ZONE) >= 9 {
        new_moon_day(k - 1, TIME_ZONE)
    } else {
        nm
    }
}

/// Offset from month 11 (starting on `a11`) of the leap month in a
/// 13-month year.
///
/// # Errors
/// [`Error::ScanExhausted`] if no month without a major term is found.
pub fn leap_month_offset(a11: Jdn) -> Result<i32> {
    let k = lunation_nearest(a11);
    let mut last = sun_longitude_sector(new_moon_day(k + 1, TIME_ZONE), TIME_ZONE);
    for offset in 1..=MAX_LEAP_OFFSET {
        let arc = sun_longitude_sector(new_moon_day(k + offset + 1, TIME_ZONE), TIME_ZONE);
        if arc == last {
            trace!(a11, offset, "leap month located");
            return Ok(offset);
        }
        last = arc;
    }
    Err(Error::ScanExhausted {
        limit: MAX_LEAP_OFFSET as u32,
    })
}

/// Number of the leap month sitting `leap_offset` lunations after month 11.
fn leap_month_number(leap_offset: i32) -> u8 {
    ((leap_offset + 9).rem_euclid(12) + 1) as u8
}

/// `true` if the lunar span starting at `a11` and ending at `b11` holds 13
/// lunations.
fn has_leap_month(a11: Jdn, b11: Jdn) -> bool {
    b11 - a11 > 365
}

// ── Solar → lunar ─────────────────────────────────────────────────────────────

/// Lunar date of the Gregorian `day`/`month`/`year`.
///
/// # Errors
/// [`Error::OutOfRange`] outside 1900–2100, [`Error::InvalidArgument`] for
/// an impossible solar date.
///
/// # Example
/// ```
/// use al_lunar::lunar::solar_to_lunar;
///
/// let tet = solar_to_lunar(10, 2, 2024).unwrap();
/// assert_eq!((tet.day, tet.month, tet.year, tet.leap), (1, 1, 2024, false));
/// ```
pub fn solar_to_lunar(day: u8, month: u8, year: Year) -> Result<LunarDate> {
    resolve(to_jdn(day, month, year)?)
}

/// Lunar date of the civil day `jdn`.
///
/// # Errors
/// [`Error::OutOfRange`] if `jdn` is outside 1900-01-01..=2100-12-31.
pub fn lunar_from_jdn(jdn: Jdn) -> Result<LunarDate> {
    ensure!(
        jdn_in_range(jdn),
        Error::OutOfRange(format!("day number {jdn} outside [{MIN_YEAR}, {MAX_YEAR}]"))
    );
    resolve(jdn)
}

fn resolve(day_number: Jdn) -> Result<LunarDate> {
    // The true new moon can trail the mean one by more than a day, so the
    // estimate may still be ahead of `day_number` after one step back.
    let mut k = lunation_before(day_number) + 1;
    let mut month_start = new_moon_day(k, TIME_ZONE);
    let mut steps = 0;
    while month_start > day_number {
        ensure!(steps < 2, Error::ScanExhausted { limit: 2 });
        k -= 1;
        month_start = new_moon_day(k, TIME_ZONE);
        steps += 1;
    }

    let (_, _, year) = ymd_from_jdn(day_number);
    let mut a11 = month_11_start(year);
    let mut b11 = a11;
    let mut lunar_year = if a11 >= month_start {
        a11 = month_11_start(year - 1);
        year
    } else {
        b11 = month_11_start(year + 1);
        year + 1
    };

    let lunar_day = day_number - month_start + 1;
    let diff = (month_start - a11).div_euclid(29);
    let mut leap = false;
    let mut lunar_month = diff + 11;
    if has_leap_month(a11, b11) {
        let leap_diff = leap_month_offset(a11)?;
        if diff >= leap_diff {
            lunar_month = diff + 10;
            leap = diff == leap_diff;
        }
    }
    if lunar_month > 12 {
        lunar_month -= 12;
    }
    if lunar_month >= 11 && diff < 4 {
        lunar_year -= 1;
    }

    Ok(LunarDate {
        day: lunar_day as u8,
        month: lunar_month as u8,
        year: lunar_year,
        leap,
        jd: day_number,
    })
}

// ── Lunar → solar ─────────────────────────────────────────────────────────────

/// First day and length of lunar month `month` (leap or not) of `year`.
fn month_bounds(month: u8, year: Year, leap: bool) -> Result<(Jdn, Jdn)> {
    let (a11, b11) = if month < 11 {
        (month_11_start(year - 1), month_11_start(year))
    } else {
        (month_11_start(year), month_11_start(year + 1))
    };
    let k = lunation_nearest(a11);
    let mut off = (month as i32 - 11).rem_euclid(12);
    if has_leap_month(a11, b11) {
        let leap_off = leap_month_offset(a11)?;
        if leap && month != leap_month_number(leap_off) {
            debug!(month, year, "rejected leap month request");
            return Err(Error::InvalidLeapMonth { month, year });
        }
        if leap || off >= leap_off {
            off += 1;
        }
    } else if leap {
        debug!(month, year, "rejected leap month in a 12-month year");
        return Err(Error::InvalidLeapMonth { month, year });
    }
    let start = new_moon_day(k + off, TIME_ZONE);
    let next = new_moon_day(k + off + 1, TIME_ZONE);
    Ok((start, next - start))
}

/// Gregorian date of lunar `day`/`month`/`year`, in the leap month when
/// `leap` is set.
///
/// # Errors
/// * [`Error::InvalidLunarField`]: day outside 1–30 (or beyond the end of a
///   29-day month), month outside 1–12.
/// * [`Error::InvalidLeapMonth`]: `leap` is set but the year's leap month
///   is a different one, or the year has none.
/// * [`Error::OutOfRange`]: lunar year outside 1899–2100, or the result
///   leaves the solar range.
///
/// # Example
/// ```
/// use al_core::Error;
/// use al_lunar::lunar::lunar_to_solar;
///
/// let tet = lunar_to_solar(1, 1, 2024, false).unwrap();
/// assert_eq!((tet.day(), tet.month(), tet.year()), (10, 2, 2024));
/// assert!(matches!(
///     lunar_to_solar(1, 1, 2024, true),
///     Err(Error::InvalidLeapMonth { month: 1, year: 2024 })
/// ));
/// ```
pub fn lunar_to_solar(day: u8, month: u8, year: Year, leap: bool) -> Result<SolarDate> {
    ensure!(
        (1..=12).contains(&month),
        Error::InvalidLunarField(format!("month {month} out of range [1, 12]"))
    );
    ensure!(
        (1..=30).contains(&day),
        Error::InvalidLunarField(format!("day {day} out of range [1, 30]"))
    );
    ensure!(
        (MIN_LUNAR_YEAR..=MAX_YEAR).contains(&year),
        Error::OutOfRange(format!(
            "lunar year {year} outside [{MIN_LUNAR_YEAR}, {MAX_YEAR}]"
        ))
    );
    let (start, length) = month_bounds(month, year, leap)?;
    ensure!(
        day as Jdn <= length,
        Error::InvalidLunarField(format!(
            "day {day} beyond the {length}-day month {month}/{year}"
        ))
    );
    from_jdn(start + day as Jdn - 1)
}

// ── Year queries ──────────────────────────────────────────────────────────────

/// Leap month of lunar `year`, if it has one.
///
/// # Example
/// ```
/// use al_lunar::lunar::leap_month;
///
/// assert_eq!(leap_month(2023).unwrap(), Some(2));
/// assert_eq!(leap_month(2024).unwrap(), None);
/// ```
pub fn leap_month(year: Year) -> Result<Option<u8>> {
    ensure!(
        (MIN_LUNAR_YEAR..=MAX_YEAR).contains(&year),
        Error::OutOfRange(format!(
            "lunar year {year} outside [{MIN_LUNAR_YEAR}, {MAX_YEAR}]"
        ))
    );
    // Months 1–10 of `year` share a span with months 11–12 of `year - 1`.
    let spans = [
        (month_11_start(year - 1), month_11_start(year), false),
        (month_11_start(year), month_11_start(year + 1), true),
    ];
    for (a11, b11, late) in spans {
        if has_leap_month(a11, b11) {
            let month = leap_month_number(leap_month_offset(a11)?);
            if (month >= 11) == late {
                return Ok(Some(month));
            }
        }
    }
    Ok(None)
}

/// Every month of lunar `year` in order, leap month included.
pub fn lunar_year_months(year: Year) -> Result<Vec<LunarMonth>> {
    ensure!(
        (MIN_YEAR..=MAX_YEAR).contains(&year),
        Error::OutOfRange(format!("lunar year {year} outside [{MIN_YEAR}, {MAX_YEAR}]"))
    );
    let (first, _) = month_bounds(1, year, false)?;
    let (end, _) = month_bounds(1, year + 1, false)?;
    let mut months = Vec::with_capacity(13);
    let mut start = first;
    while start < end && months.len() < 13 {
        let next = new_moon_day(lunation_nearest(start) + 1, TIME_ZONE);
        let date = resolve(start)?;
        months.push(LunarMonth {
            month: date.month,
            leap: date.leap,
            start,
            length: (next - start) as u8,
        });
        start = next;
    }
    Ok(months)
}
