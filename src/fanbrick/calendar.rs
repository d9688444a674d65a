//! # Date Grouper
//!
//! Buckets bricks by the calendar day they were created on, as seen from a
//! given time zone. Production callers pass [`chrono::Local`]; tests pin a
//! fixed offset so day boundaries are predictable.
//!
//! Everything here is a pure function of its inputs. The wall is small, so a
//! month view simply rescans it once per day.

use crate::model::Brick;
use chrono::{Datelike, Months, NaiveDate, TimeZone};

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub bricks: Vec<Brick>,
}

/// The calendar day `brick` was created on, in `tz`.
pub fn local_day<Tz: TimeZone>(brick: &Brick, tz: &Tz) -> NaiveDate {
    brick.created_at.with_timezone(tz).date_naive()
}

/// Bricks created on `day` in `tz`, in input order.
pub fn bricks_on_day<Tz: TimeZone>(bricks: &[Brick], day: NaiveDate, tz: &Tz) -> Vec<Brick> {
    bricks
        .iter()
        .filter(|b| local_day(b, tz) == day)
        .cloned()
        .collect()
}

/// Every day of the given month. Empty if `month` is out of range.
pub fn month_days(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .collect()
}

/// One [`DayCell`] per day of the month, each holding that day's bricks.
pub fn month_view<Tz: TimeZone>(bricks: &[Brick], year: i32, month: u32, tz: &Tz) -> Vec<DayCell> {
    month_days(year, month)
        .into_iter()
        .map(|date| DayCell {
            date,
            bricks: bricks_on_day(bricks, date, tz),
        })
        .collect()
}

/// First day of the month `delta` months away from the month containing `day`.
pub fn shift_month(day: NaiveDate, delta: i32) -> NaiveDate {
    let first = day.with_day(1).unwrap_or(day);
    let shifted = if delta >= 0 {
        first.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        first.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColorToken, Position};
    use chrono::{DateTime, FixedOffset, Utc};

    fn brick_at(id: &str, rfc3339: &str) -> Brick {
        Brick {
            id: id.into(),
            author_email: "fan@example.com".into(),
            memory: "m".into(),
            image_ref: None,
            color: ColorToken::Card,
            club: None,
            position: Position { x: 2, y: 2 },
            ai_quote: None,
            emotion: None,
            created_at: rfc3339.parse::<DateTime<Utc>>().unwrap(),
            is_favorite: false,
            tags: Vec::new(),
            view_count: 0,
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ids(bricks: &[Brick]) -> Vec<&str> {
        bricks.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn groups_by_day_ignoring_time() {
        let bricks = vec![
            brick_at("morning", "2024-03-10T08:00:00Z"),
            brick_at("other", "2024-03-11T08:00:00Z"),
            brick_at("night", "2024-03-10T23:59:59Z"),
        ];
        let day = bricks_on_day(&bricks, ymd(2024, 3, 10), &Utc);
        assert_eq!(ids(&day), ["morning", "night"]);
    }

    #[test]
    fn uses_viewer_time_zone() {
        let bricks = vec![brick_at("late", "2024-03-10T23:30:00Z")];
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();

        assert!(bricks_on_day(&bricks, ymd(2024, 3, 10), &plus_two).is_empty());
        assert_eq!(ids(&bricks_on_day(&bricks, ymd(2024, 3, 11), &plus_two)), ["late"]);
    }

    #[test]
    fn different_days_are_disjoint() {
        let bricks = vec![
            brick_at("a", "2024-03-10T08:00:00Z"),
            brick_at("b", "2024-03-11T00:00:00Z"),
            brick_at("c", "2024-03-10T12:00:00Z"),
        ];
        let d1 = bricks_on_day(&bricks, ymd(2024, 3, 10), &Utc);
        let d2 = bricks_on_day(&bricks, ymd(2024, 3, 11), &Utc);
        assert!(d1.iter().all(|b| !d2.contains(b)));
        assert_eq!(d1.len() + d2.len(), bricks.len());
    }

    #[test]
    fn month_days_handles_leap_years_and_bad_months() {
        assert_eq!(month_days(2024, 2).len(), 29);
        assert_eq!(month_days(2023, 2).len(), 28);
        assert_eq!(month_days(2024, 12).last(), Some(&ymd(2024, 12, 31)));
        assert!(month_days(2024, 13).is_empty());
    }

    #[test]
    fn month_view_places_bricks_in_cells() {
        let bricks = vec![
            brick_at("a", "2024-04-01T10:00:00Z"),
            brick_at("b", "2024-04-30T10:00:00Z"),
            brick_at("outside", "2024-05-01T10:00:00Z"),
        ];
        let cells = month_view(&bricks, 2024, 4, &Utc);
        assert_eq!(cells.len(), 30);
        assert_eq!(ids(&cells[0].bricks), ["a"]);
        assert_eq!(ids(&cells[29].bricks), ["b"]);
        let total: usize = cells.iter().map(|c| c.bricks.len()).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn shift_month_crosses_years() {
        assert_eq!(shift_month(ymd(2024, 1, 31), -1), ymd(2023, 12, 1));
        assert_eq!(shift_month(ymd(2024, 12, 15), 1), ymd(2025, 1, 1));
        assert_eq!(shift_month(ymd(2024, 6, 15), 0), ymd(2024, 6, 1));
    }
}
