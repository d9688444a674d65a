use chrono::{DateTime, Datelike, Local, Utc};
use colored::{ColoredString, Colorize};
use fanbrick::api::{CalendarMonth, MessageLevel};
use fanbrick::commands::CmdMessage;
use fanbrick::config::{ConfigKey, FanbrickConfig};
use fanbrick::facets::Facets;
use fanbrick::index::DisplayBrick;
use fanbrick::model::{Brick, ColorToken};
use fanbrick::query::QueryConfig;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const EMOTION_WIDTH: usize = 12;
const FAVORITE_MARKER: &str = "♥";
const BRICK_MARKER: &str = "■";
const CELL_WIDTH: usize = 8;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn swatch(color: &ColorToken) -> ColoredString {
    match color {
        ColorToken::Primary => BRICK_MARKER.blue(),
        ColorToken::Secondary => BRICK_MARKER.cyan(),
        ColorToken::Accent => BRICK_MARKER.magenta(),
        ColorToken::Highlight => BRICK_MARKER.yellow(),
        ColorToken::Muted => BRICK_MARKER.bright_black(),
        ColorToken::Card => BRICK_MARKER.white(),
        ColorToken::Other(_) => BRICK_MARKER.normal(),
    }
}

/// Sort label plus the number of active filters, e.g. "Most Popular · 2 filters".
fn list_header(query: &QueryConfig) -> String {
    match query.active_filter_count() {
        0 => query.sort_order.label().to_string(),
        1 => format!("{} · 1 filter", query.sort_order.label()),
        n => format!("{} · {} filters", query.sort_order.label(), n),
    }
}

pub(super) fn print_list_header(query: &QueryConfig) {
    println!("{}", list_header(query).bold());
}

/// One line per brick: swatch, index, favorite marker, memory, emotion, age.
pub(super) fn print_bricks(bricks: &[DisplayBrick]) {
    if bricks.is_empty() {
        println!("No bricks on the wall.");
        return;
    }

    for db in bricks {
        let brick = &db.brick;
        let idx_str = format!("{}. ", db.index);
        let fav = if brick.is_favorite {
            format!("{} ", FAVORITE_MARKER)
        } else {
            "  ".to_string()
        };
        let emotion = format!(
            "{:>width$}",
            brick.emotion.as_deref().unwrap_or(""),
            width = EMOTION_WIDTH
        );
        let time_ago = format_time_ago(brick.created_at);

        let fixed_width = 2 + idx_str.width() + fav.width() + EMOTION_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let memory = truncate_to_width(&single_line(&brick.memory), available);
        let padding = available.saturating_sub(memory.width());

        println!(
            "{} {}{}{}{}{}{}",
            swatch(&brick.color),
            idx_str.yellow(),
            fav.red(),
            memory,
            " ".repeat(padding),
            emotion.italic(),
            time_ago.dimmed()
        );
    }
}

/// The detail view: everything the modal of the web app showed.
pub(super) fn print_full_bricks(bricks: &[DisplayBrick]) {
    for (i, db) in bricks.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let brick = &db.brick;
        let fav = if brick.is_favorite {
            format!(" {}", FAVORITE_MARKER).red()
        } else {
            "".normal()
        };
        println!(
            "{} {}{}",
            swatch(&brick.color),
            db.index.to_string().yellow(),
            fav
        );
        println!("--------------------------------");
        println!("{}", brick.memory);
        println!();
        if let Some(quote) = &brick.ai_quote {
            println!("{}", format!("\"{}\"", quote).italic());
        }
        print_detail("by", brick.author_name());
        if let Some(club) = &brick.club {
            print_detail("club", club.name());
        }
        if let Some(emotion) = &brick.emotion {
            print_detail("feeling", emotion);
        }
        if !brick.tags.is_empty() {
            let tags: Vec<String> = brick.tags.iter().map(|t| format!("#{}", t)).collect();
            print_detail("tags", &tags.join(" "));
        }
        if let Some(image) = &brick.image_ref {
            print_detail("image", image);
        }
        print_detail("placed", &format_placed(brick));
        print_detail("id", &brick.id);
    }
}

fn print_detail(label: &str, value: &str) {
    println!("{} {}", format!("{:>8}:", label).dimmed(), value);
}

fn format_placed(brick: &Brick) -> String {
    let local = brick.created_at.with_timezone(&Local);
    format!(
        "{} ({})",
        local.format("%B %-d, %Y %H:%M"),
        format_time_ago(brick.created_at).trim()
    )
}

/// Month grid, Monday first, with a brick count under each busy day.
pub(super) fn print_calendar(calendar: &CalendarMonth) {
    println!("{}", calendar.month.format("%B %Y").to_string().bold());
    println!();

    let header: String = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        .iter()
        .map(|d| format!("{:<width$}", d, width = CELL_WIDTH))
        .collect();
    println!("{}", header.trim_end().dimmed());

    let today = Local::now().date_naive();
    let lead = calendar.month.weekday().num_days_from_monday() as usize;
    let mut line = " ".repeat(lead * CELL_WIDTH);
    let mut column = lead;

    for cell in &calendar.cells {
        let count = cell.bricks.len();
        let marker = if count > 0 {
            format!("{}{}", BRICK_MARKER, count)
        } else {
            String::new()
        };
        let text = format!("{:>2} {:<4}", cell.date.day(), marker);
        let text = format!("{:<width$}", text, width = CELL_WIDTH);

        let styled = if Some(cell.date) == calendar.selected {
            text.reversed().to_string()
        } else if cell.date == today {
            text.bold().underline().to_string()
        } else if count > 0 {
            text.green().to_string()
        } else {
            text
        };
        line.push_str(&styled);
        column += 1;

        if column == 7 {
            println!("{}", line.trim_end());
            line.clear();
            column = 0;
        }
    }
    if !line.is_empty() {
        println!("{}", line.trim_end());
    }

    if let Some(day) = calendar.selected {
        println!();
        println!("{}", day.format("%A, %B %-d, %Y").to_string().bold());
        if !calendar.selected_bricks.is_empty() {
            print_bricks(&calendar.selected_bricks);
        }
    }
}

pub(super) fn print_facets(facets: &Facets) {
    if !facets.emotions.is_empty() {
        println!("{}", "Emotions".bold());
        for emotion in &facets.emotions {
            println!("  {}", emotion);
        }
    }
    if !facets.tags.is_empty() {
        println!("{}", "Tags".bold());
        for tag in &facets.tags {
            println!("  #{}", tag);
        }
    }
}

pub(super) fn print_config(config: &FanbrickConfig) {
    for key in ConfigKey::ALL {
        println!("{} = {}", key.as_str(), config.get(key));
    }
}

fn single_line(s: &str) -> String {
    s.chars().map(|c| if c == '\n' { ' ' } else { c }).collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_text_with_ellipsis() {
        let out = truncate_to_width("Messi's last dance at Camp Nou", 10);
        assert_eq!(out, "Messi's l…");
        assert_eq!(out.width(), 10);
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("Goal", 10), "Goal");
    }

    #[test]
    fn header_shows_sort_and_filter_count() {
        use fanbrick::query::SortOrder;

        assert_eq!(list_header(&QueryConfig::default()), "Newest First");
        let query = QueryConfig::new()
            .with_emotions(["joy"])
            .favorites_only(true)
            .sorted_by(SortOrder::Popularity);
        assert_eq!(list_header(&query), "Most Popular · 2 filters");
        let query = QueryConfig::new().with_tags(["ynwa"]);
        assert_eq!(list_header(&query), "Newest First · 1 filter");
    }

    #[test]
    fn newlines_become_spaces() {
        assert_eq!(single_line("one\ntwo"), "one two");
    }
}
