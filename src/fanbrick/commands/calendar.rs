use crate::calendar::{bricks_on_day, month_view};
use crate::commands::{CalendarMonth, CmdMessage, CmdResult};
use crate::index::attach_indexes;
use crate::query::{query, QueryConfig};
use crate::wall::Wall;
use chrono::{Datelike, NaiveDate, TimeZone};

/// Lays out the filtered wall on the month containing `month`.
///
/// The query runs first, so each cell only holds bricks that pass the current
/// filters, in the current sort order. When `selected` is given, that day's
/// bricks are listed as well.
pub fn run<Tz: TimeZone>(
    wall: &Wall,
    config: &QueryConfig,
    month: NaiveDate,
    selected: Option<NaiveDate>,
    tz: &Tz,
) -> CmdResult {
    let visible = query(wall.bricks(), config);
    let first = month.with_day(1).unwrap_or(month);
    let cells = month_view(&visible, first.year(), first.month(), tz);

    let mut result = CmdResult::default();
    let selected_bricks = match selected {
        Some(day) => {
            let bricks = bricks_on_day(&visible, day, tz);
            if bricks.is_empty() {
                result.add_message(CmdMessage::info(format!(
                    "No memories on {}",
                    day.format("%B %-d, %Y")
                )));
            }
            attach_indexes(wall, bricks)
        }
        None => Vec::new(),
    };

    result.with_calendar(CalendarMonth {
        month: first,
        cells,
        selected,
        selected_bricks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{fixed_now, StoreFixture};
    use crate::store::DataStore;
    use chrono::{Duration, Utc};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn wall() -> Wall {
        let fixture = StoreFixture::new()
            .with_brick_at("Saturday derby", fixed_now())
            .with_brick_at("Midweek cup tie", fixed_now() - Duration::days(4))
            .with_brick_at("Last month", fixed_now() - Duration::days(20))
            .with_favorite_brick("Same day favorite");
        Wall::new(fixture.store.load().unwrap().unwrap())
    }

    #[test]
    fn month_grid_holds_bricks_by_day() {
        let result = run(&wall(), &QueryConfig::default(), ymd(2024, 3, 22), None, &Utc);
        let cal = result.calendar.unwrap();

        assert_eq!(cal.month, ymd(2024, 3, 1));
        assert_eq!(cal.cells.len(), 31);
        // fixed_now is 2024-03-10; the favorite fixture is four hours earlier that day.
        assert_eq!(cal.cells[9].bricks.len(), 2);
        assert_eq!(cal.cells[5].bricks.len(), 1);
        assert!(cal.selected_bricks.is_empty());
    }

    #[test]
    fn filters_apply_before_grouping() {
        let result = run(
            &wall(),
            &QueryConfig::new().favorites_only(true),
            ymd(2024, 3, 1),
            Some(ymd(2024, 3, 10)),
            &Utc,
        );
        let cal = result.calendar.unwrap();
        let total: usize = cal.cells.iter().map(|c| c.bricks.len()).sum();
        assert_eq!(total, 1);
        assert_eq!(cal.selected_bricks.len(), 1);
        assert_eq!(cal.selected_bricks[0].index, 4);
    }

    #[test]
    fn empty_selected_day_is_reported() {
        let result = run(
            &wall(),
            &QueryConfig::default(),
            ymd(2024, 3, 1),
            Some(ymd(2024, 3, 2)),
            &Utc,
        );
        assert!(result.calendar.unwrap().selected_bricks.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("March 2, 2024"));
    }
}
