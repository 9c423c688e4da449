//! Everything the calendar knows about one solar date.
//!
//! [`DateInfo`] is the aggregate a day view or month grid reads: the lunar
//! date, the can-chi of year, month and day, the solar term in force, the
//! day's trực and its twelve double hours.

use al_core::errors::Result;
use al_core::{Jdn, Year};
use al_lunar::solar_term::{term_boundary, TermDirection};
use al_lunar::{
    day_can_chi, day_quality, good_hours, hour_can_chi, lunar_from_jdn, month_can_chi,
    year_can_chi, DayQuality, HourSlot, LunarDate, SolarTermRecord, StemBranch,
};
use al_time::{SolarDate, Weekday};
use tracing::trace;

/// Can-chi pairs of the year, month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CanChi {
    /// Pair of the lunar year.
    pub year: StemBranch,
    /// Pair of the lunar month.
    pub month: StemBranch,
    /// Pair of the day.
    pub day: StemBranch,
}

/// Derived calendar attributes of a single solar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DateInfo {
    /// Julian Day Number.
    pub jd: Jdn,
    /// The queried solar date.
    pub solar: SolarDate,
    /// Day of the week.
    pub weekday: Weekday,
    /// Lunar date.
    pub lunar: LunarDate,
    /// Can-chi of year, month and day.
    pub can_chi: CanChi,
    /// The twelve double hours with their hoàng đạo flags.
    pub good_hours: [HourSlot; 12],
    /// Solar term in force, with the day it began.
    pub solar_term: SolarTermRecord,
    /// The following solar term and the day it begins.
    pub next_solar_term: SolarTermRecord,
    /// Trực, rating and guidance.
    pub day_quality: DayQuality,
}

impl DateInfo {
    /// Compute every attribute of `date`.
    pub fn for_date(date: SolarDate) -> Result<Self> {
        let jd = date.jdn();
        trace!(jd, %date, "computing date info");
        let lunar = lunar_from_jdn(jd)?;
        let day = day_can_chi(jd);
        Ok(DateInfo {
            jd,
            solar: date,
            weekday: date.weekday(),
            lunar,
            can_chi: CanChi {
                year: year_can_chi(lunar.year),
                month: month_can_chi(lunar.year, lunar.month),
                day,
            },
            good_hours: good_hours(jd),
            solar_term: term_boundary(jd, TermDirection::Current)?,
            next_solar_term: term_boundary(jd, TermDirection::Next)?,
            day_quality: day_quality(day.branch, lunar.month),
        })
    }

    /// Can-chi of the double hour containing `hour` (0–23) on this day.
    pub fn hour_can_chi(&self, hour: u8) -> Result<StemBranch> {
        hour_can_chi(self.jd, hour)
    }

    /// Whether the double hour containing `hour` (0–23) is hoàng đạo.
    pub fn is_good_hour(&self, hour: u8) -> Result<bool> {
        let branch = al_lunar::can_chi::hour_branch(hour)?;
        Ok(self.good_hours[branch.index()].good)
    }

    /// Name of the solar term in force.
    pub fn term_name(&self) -> &'static str {
        self.solar_term.name
    }
}

/// Attributes of the Gregorian date `day`/`month`/`year`.
///
/// # Errors
/// [`Error::OutOfRange`](al_core::Error::OutOfRange) outside 1900–2100,
/// [`Error::InvalidArgument`](al_core::Error::InvalidArgument) for an
/// impossible date.
///
/// # Example
/// ```
/// let info = amlich::date_info(10, 2, 2024).unwrap();
/// assert_eq!(info.lunar.to_string(), "01/01/2024");
/// assert_eq!(info.can_chi.year.to_string(), "Giáp Thìn");
/// assert_eq!(info.term_name(), "Lập xuân");
/// ```
pub fn date_info(day: u8, month: u8, year: Year) -> Result<DateInfo> {
    DateInfo::for_date(SolarDate::new(day, month, year)?)
}

/// Attributes of a `chrono` date.
#[cfg(feature = "chrono")]
pub fn date_info_for(date: chrono::NaiveDate) -> Result<DateInfo> {
    DateInfo::for_date(SolarDate::try_from(date)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use al_lunar::{DayRating, EarthlyBranch, Truc};

    #[test]
    fn tet_giap_thin() {
        let info = date_info(10, 2, 2024).unwrap();
        assert_eq!(info.jd, 2_460_351);
        assert_eq!(info.weekday, Weekday::Saturday);
        assert_eq!((info.lunar.day, info.lunar.month, info.lunar.year), (1, 1, 2024));
        assert_eq!(info.can_chi.year.to_string(), "Giáp Thìn");
        assert_eq!(info.can_chi.month.to_string(), "Bính Dần");
        assert_eq!(info.can_chi.day.to_string(), "Giáp Thìn");
        assert_eq!(info.solar_term.index, 0);
        assert_eq!(info.next_solar_term.name, "Vũ thủy");
        // Thìn day in a Dần month: Mãn.
        assert_eq!(info.day_quality.truc, Truc::Man);
        assert_eq!(info.day_quality.rate, DayRating::Good);
    }

    #[test]
    fn hours_of_the_day() {
        let info = date_info(10, 2, 2024).unwrap();
        assert_eq!(info.hour_can_chi(0).unwrap().to_string(), "Giáp Tý");
        assert_eq!(info.good_hours[0].branch, EarthlyBranch::Ty);
        assert_eq!(info.is_good_hour(23).unwrap(), info.good_hours[0].good);
        assert!(info.is_good_hour(24).is_err());
    }

    #[test]
    fn out_of_range() {
        assert!(date_info(31, 12, 1899).is_err());
        assert!(date_info(1, 1, 2101).is_err());
        assert!(date_info(31, 4, 2024).is_err());
    }
}
