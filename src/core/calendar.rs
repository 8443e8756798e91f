//! 四柱排盤（簡化版）
//!
//! Year and month pillars count from a fixed epoch and ignore solar terms
//! (no 立春 or 節氣 month boundaries). Lunar input is taken at face value and
//! never converted.

use crate::domain::model::{Branch, CalendarKind, Chart, ElementTally, Pillar, Stem, UserProfile};
use chrono::{Datelike, NaiveDate};

/// Day-cycle anchor: 1900-01-31 counts as stem 0 / branch 0.
pub const REFERENCE_DATE: (i32, u32, u32) = (1900, 1, 31);

/// 年柱
pub fn year_pillar(year: i32) -> Pillar {
    let offset = i64::from(year) - 4;
    Pillar::new(Stem::from_cycle(offset), Branch::from_cycle(offset))
}

/// 月柱
pub fn month_pillar(year: i32, month: u32) -> Pillar {
    let year_stem = (i64::from(year) - 4).rem_euclid(10);
    let stem = year_stem * 2 + i64::from(month) - 1;
    Pillar::new(Stem::from_cycle(stem), Branch::from_cycle(i64::from(month) + 1))
}

/// 日柱
pub fn day_pillar(year: i32, month: u32, day: u32) -> Pillar {
    let days = days_from_reference(year, month, day);
    Pillar::new(Stem::from_cycle(days), Branch::from_cycle(days))
}

/// 時柱（五鼠遁）：the stem is counted from the day stem, so this pillar
/// only exists relative to a day pillar.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Pillar {
    let stem = day_stem.index() as i64 * 2 + i64::from(hour / 2);
    Pillar::new(Stem::from_cycle(stem), Branch::from_cycle(i64::from(hour)))
}

/// Count one element per stem and one per branch. Always totals 8.
pub fn element_tally(pillars: [&Pillar; 4]) -> ElementTally {
    let mut tally = ElementTally::default();
    for pillar in pillars {
        tally.add(pillar.stem.element());
        tally.add(pillar.branch.element());
    }
    tally
}

pub fn calculate_chart(year: i32, month: u32, day: u32, hour: u32, calendar: CalendarKind) -> Chart {
    if calendar == CalendarKind::Lunar {
        tracing::debug!("Lunar date {}-{}-{} used as solar without conversion", year, month, day);
    }

    let year_pillar = year_pillar(year);
    let month_pillar = month_pillar(year, month);
    let day_pillar = day_pillar(year, month, day);
    let hour_pillar = hour_pillar(day_pillar.stem, hour);
    let tally = element_tally([&year_pillar, &month_pillar, &day_pillar, &hour_pillar]);

    Chart {
        year_pillar,
        month_pillar,
        day_pillar,
        hour_pillar,
        tally,
    }
}

pub fn chart_for(profile: &UserProfile) -> Chart {
    calculate_chart(
        profile.birth_year,
        profile.birth_month,
        profile.birth_day,
        u32::from(profile.birth_hour),
        profile.calendar(),
    )
}

/// Signed day distance from `REFERENCE_DATE`.
///
/// Out-of-range months and days roll over into the neighbouring month or
/// year instead of failing, so 1990-02-31 counts as 1990-03-03.
pub fn days_from_reference(year: i32, month: u32, day: u32) -> i64 {
    let (ref_year, ref_month, ref_day) = REFERENCE_DATE;
    day_ordinal(year, month, day) - day_ordinal(ref_year, ref_month, ref_day)
}

fn day_ordinal(year: i32, month: u32, day: u32) -> i64 {
    let months = i64::from(month) - 1;
    let year = i64::from(year) + months.div_euclid(12);
    let month = months.rem_euclid(12) as u32 + 1;

    let year = year.clamp(
        i64::from(NaiveDate::MIN.year()),
        i64::from(NaiveDate::MAX.year()),
    ) as i32;
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)
        .map_or(0, |date| i64::from(date.num_days_from_ce()));

    first_of_month + i64::from(day) - 1
}
