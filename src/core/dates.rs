//! # Publish Date Rendering
//!
//! Three renderings of the post's timestamp, all in Brazilian Portuguese:
//!
//! - absolute: `3 de maio às 20:00h`
//! - relative: `há 2 dias`, `em cerca de 3 horas`
//! - ISO 8601 (UTC, millisecond precision) for machine consumption
//!
//! Relative phrasing rounds to the nearest bucket: under a minute, minutes,
//! "cerca de" hours, days, "cerca de" one or two months, months, then years
//! qualified with "cerca de", "mais de" or "quase".

use chrono::{DateTime, Datelike, FixedOffset, Local, Locale, SecondsFormat, Timelike, Utc};

use crate::DisplayZone;

/// `d 'de' LLLL 'às' HH:mm'h'`
const ABSOLUTE_PATTERN: &str = "%-d de %B às %H:%Mh";

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

/// The strings the header needs for its time element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateLabels {
    /// Visible text of the time element.
    pub relative: String,
    /// Hover title of the time element.
    pub absolute: String,
    /// Machine-readable value of the time element.
    pub iso: String,
}

impl DateLabels {
    pub fn derive(published_at: DateTime<FixedOffset>, now: DateTime<Utc>, zone: DisplayZone) -> Self {
        let shown = in_zone(published_at, zone);
        Self {
            relative: format_relative(published_at, now),
            absolute: format_absolute(shown),
            iso: format_iso(published_at),
        }
    }
}

/// Move a timestamp into the clock the user asked to see.
pub fn in_zone(ts: DateTime<FixedOffset>, zone: DisplayZone) -> DateTime<FixedOffset> {
    match zone {
        DisplayZone::Local => ts.with_timezone(&Local).fixed_offset(),
        DisplayZone::Utc => ts.with_timezone(&Utc).fixed_offset(),
    }
}

/// `3 de maio às 20:00h`, in the timestamp's own offset.
pub fn format_absolute(ts: DateTime<FixedOffset>) -> String {
    ts.format_localized(ABSOLUTE_PATTERN, Locale::pt_BR).to_string()
}

/// `2022-05-03T23:00:00.000Z`
pub fn format_iso(ts: DateTime<FixedOffset>) -> String {
    ts.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Distance between `ts` and `now` in words, with a `há`/`em` suffix.
pub fn format_relative(ts: DateTime<FixedOffset>, now: DateTime<Utc>) -> String {
    let ts = ts.with_timezone(&Utc);
    let (earlier, later, future) = if ts > now {
        (now, ts, true)
    } else {
        (ts, now, false)
    };
    let distance = distance_words(earlier, later);
    if future {
        format!("em {distance}")
    } else {
        format!("há {distance}")
    }
}

/// Distance bucket, before localization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Distance {
    LessThanAMinute,
    Minutes(i64),
    AboutHours(i64),
    Days(i64),
    AboutMonths(i64),
    Months(i64),
    AboutYears(i64),
    OverYears(i64),
    AlmostYears(i64),
}

fn bucket(earlier: DateTime<Utc>, later: DateTime<Utc>) -> Distance {
    let seconds = (later - earlier).num_seconds();
    let minutes = round_div(seconds, 60);

    if minutes < 2 {
        if minutes == 0 {
            return Distance::LessThanAMinute;
        }
        return Distance::Minutes(minutes);
    }
    if minutes < 45 {
        return Distance::Minutes(minutes);
    }
    if minutes < 90 {
        return Distance::AboutHours(1);
    }
    if minutes < MINUTES_IN_DAY {
        return Distance::AboutHours(round_div(minutes, 60));
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return Distance::Days(1);
    }
    if minutes < MINUTES_IN_MONTH {
        return Distance::Days(round_div(minutes, MINUTES_IN_DAY));
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        return Distance::AboutMonths(round_div(minutes, MINUTES_IN_MONTH));
    }

    let months = calendar_months_between(earlier, later);
    if months < 12 {
        return Distance::Months(round_div(minutes, MINUTES_IN_MONTH));
    }
    let years = months / 12;
    match months % 12 {
        0..3 => Distance::AboutYears(years),
        3..9 => Distance::OverYears(years),
        _ => Distance::AlmostYears(years + 1),
    }
}

fn distance_words(earlier: DateTime<Utc>, later: DateTime<Utc>) -> String {
    match bucket(earlier, later) {
        Distance::LessThanAMinute => "menos de um minuto".to_string(),
        Distance::Minutes(n) => plural(n, "minuto", "minutos"),
        Distance::AboutHours(n) => format!("cerca de {}", plural(n, "hora", "horas")),
        Distance::Days(n) => plural(n, "dia", "dias"),
        Distance::AboutMonths(n) => format!("cerca de {}", plural(n, "mês", "meses")),
        Distance::Months(n) => plural(n, "mês", "meses"),
        Distance::AboutYears(n) => format!("cerca de {}", plural(n, "ano", "anos")),
        Distance::OverYears(n) => format!("mais de {}", plural(n, "ano", "anos")),
        Distance::AlmostYears(n) => format!("quase {}", plural(n, "ano", "anos")),
    }
}

fn plural(n: i64, one: &str, other: &str) -> String {
    if n == 1 {
        format!("1 {one}")
    } else {
        format!("{n} {other}")
    }
}

/// Integer division rounding half up (inputs are never negative).
fn round_div(value: i64, by: i64) -> i64 {
    (value + by / 2) / by
}

/// Whole calendar months from `earlier` to `later`.
fn calendar_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = (later.year() as i64 - earlier.year() as i64) * 12
        + (later.month() as i64 - earlier.month() as i64);
    let later_in_month = (later.day(), later.num_seconds_from_midnight());
    let earlier_in_month = (earlier.day(), earlier.num_seconds_from_midnight());
    if months > 0 && later_in_month < earlier_in_month {
        months -= 1;
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn ago(d: Duration) -> DateTime<FixedOffset> {
        (now() - d).fixed_offset()
    }

    #[test]
    fn test_absolute_uses_portuguese_month() {
        assert_eq!(format_absolute(at("2022-05-03T20:00:00-03:00")), "3 de maio às 20:00h");
        assert_eq!(format_absolute(at("2023-03-14T09:05:00+00:00")), "14 de março às 09:05h");
    }

    #[test]
    fn test_absolute_respects_zone() {
        let ts = at("2022-05-03T20:00:00-03:00");
        assert_eq!(format_absolute(in_zone(ts, DisplayZone::Utc)), "3 de maio às 23:00h");
    }

    #[test]
    fn test_iso_is_utc_millis() {
        assert_eq!(format_iso(at("2022-05-03T20:00:00-03:00")), "2022-05-03T23:00:00.000Z");
    }

    #[test]
    fn test_relative_two_days_ago() {
        assert_eq!(format_relative(ago(Duration::days(2)), now()), "há 2 dias");
    }

    #[test]
    fn test_relative_under_a_minute() {
        assert_eq!(format_relative(ago(Duration::seconds(10)), now()), "há menos de um minuto");
        assert_eq!(format_relative(now().fixed_offset(), now()), "há menos de um minuto");
    }

    #[test]
    fn test_relative_minutes() {
        assert_eq!(format_relative(ago(Duration::seconds(40)), now()), "há 1 minuto");
        assert_eq!(format_relative(ago(Duration::minutes(5)), now()), "há 5 minutos");
        assert_eq!(format_relative(ago(Duration::minutes(44)), now()), "há 44 minutos");
    }

    #[test]
    fn test_relative_hours() {
        assert_eq!(format_relative(ago(Duration::minutes(45)), now()), "há cerca de 1 hora");
        assert_eq!(format_relative(ago(Duration::hours(3)), now()), "há cerca de 3 horas");
        assert_eq!(format_relative(ago(Duration::hours(23)), now()), "há cerca de 23 horas");
    }

    #[test]
    fn test_relative_days() {
        assert_eq!(format_relative(ago(Duration::hours(30)), now()), "há 1 dia");
        assert_eq!(format_relative(ago(Duration::days(29)), now()), "há 29 dias");
    }

    #[test]
    fn test_relative_months() {
        assert_eq!(format_relative(ago(Duration::days(35)), now()), "há cerca de 1 mês");
        assert_eq!(format_relative(ago(Duration::days(120)), now()), "há 4 meses");
    }

    #[test]
    fn test_relative_years() {
        let base = now();
        let year_ago = Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap().fixed_offset();
        assert_eq!(format_relative(year_ago, base), "há cerca de 1 ano");

        let over = Utc.with_ymd_and_hms(2022, 1, 1, 12, 0, 0).unwrap().fixed_offset();
        assert_eq!(format_relative(over, base), "há mais de 2 anos");

        let almost = Utc.with_ymd_and_hms(2021, 8, 1, 12, 0, 0).unwrap().fixed_offset();
        assert_eq!(format_relative(almost, base), "há quase 3 anos");
    }

    #[test]
    fn test_relative_future_uses_em() {
        let later = (now() + Duration::hours(3)).fixed_offset();
        assert_eq!(format_relative(later, now()), "em cerca de 3 horas");
    }

    #[test]
    fn test_calendar_months_between() {
        let a = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap();
        assert_eq!(calendar_months_between(a, b), 0);
        let c = Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap();
        assert_eq!(calendar_months_between(a, c), 2);
    }

    #[test]
    fn test_labels_derive() {
        let labels = DateLabels::derive(at("2024-06-13T12:00:00+00:00"), now(), DisplayZone::Utc);
        assert_eq!(labels.relative, "há 2 dias");
        assert_eq!(labels.absolute, "13 de junho às 12:00h");
        assert_eq!(labels.iso, "2024-06-13T12:00:00.000Z");
    }
}
