// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt::Write;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use jiff::Zoned;
use jiff::civil::{Date, Weekday};
use rentcal_core::{
    Apartment, CalendarDay, CalendarDays, DayCell, OccupancyMonth, Rentcal, WeekStart,
};

use uuid::Uuid;

use crate::util::{format_datetime, pad_to_width, parse_month, short_id};

const CELL_WIDTH: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct CmdCalendar {
    pub month: Option<Date>,
    pub apartment: Option<String>,
    pub all: bool,
    pub week_start: Option<WeekStart>,
}

impl CmdCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cal")
            .about("Show the occupancy calendar of an apartment")
            .arg(
                arg!(-m --month <MONTH> "Month to show as YYYY-MM, defaults to the current one")
                    .value_parser(parse_month),
            )
            .arg(arg!(-a --apartment <ID> "The id, or a unique id prefix, of the apartment"))
            .arg(
                arg!(--all "Show the month without selecting an apartment")
                    .conflicts_with("apartment"),
            )
            .arg(
                arg!(--"week-start" <DAY> "First column of the grid, overrides the config")
                    .value_parser(value_parser!(WeekStart)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            month: matches.get_one::<Date>("month").copied(),
            apartment: matches.get_one::<String>("apartment").cloned(),
            all: matches.get_flag("all"),
            week_start: matches.get_one::<WeekStart>("week-start").copied(),
        }
    }

    pub async fn run(self, rentcal: &Rentcal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing calendar...");
        let today = Zoned::now().date();
        let apartment_id = self.select_apartment(rentcal).await?;

        let mut month = rentcal
            .occupancy(self.month.unwrap_or(today), apartment_id)
            .await?;
        if let Some(week_start) = self.week_start {
            month = month.with_week_start(week_start.into());
        }
        print!("{}", render(&month, today));
        Ok(())
    }

    /// The apartment to show, the first one by title unless told otherwise.
    async fn select_apartment(&self, rentcal: &Rentcal) -> Result<Option<Uuid>, Box<dyn Error>> {
        match &self.apartment {
            Some(id) => Ok(Some(rentcal.resolve_apartment_id(id).await?)),
            None if self.all => Ok(None),
            None => Ok(rentcal.list_apartments().await?.first().map(|a| a.id)),
        }
    }
}

/// Full calendar view: title, grid, legend, and the guests of the month.
pub fn render(month: &OccupancyMonth, today: Date) -> String {
    let mut out = String::new();
    out.push_str(&render_title(month.month(), month.apartment()));
    out.push('\n');
    out.push_str(&render_grid(month.days(), today));
    out.push('\n');

    if month.apartment().is_none() {
        out.push_str(&format!("{}\n", "No apartment selected".italic()));
        return out;
    }

    out.push('\n');
    out.push_str(&render_legend());
    out.push('\n');

    let guests = month.guests();
    if !guests.is_empty() {
        out.push('\n');
    }
    for guest in guests {
        let _ = writeln!(
            out,
            "  {} {}  {} to {}  {} night(s), {} people",
            short_id(guest.id).dimmed(),
            guest.full_name.bold(),
            format_datetime(guest.check_in),
            format_datetime(guest.check_out),
            guest.number_of_nights(),
            guest.total_people(),
        );
    }

    for conflict in month.double_bookings() {
        let _ = writeln!(
            out,
            "{} {} and {} overlap from {} to {}",
            "!".yellow().bold(),
            conflict.first.full_name,
            conflict.second.full_name,
            conflict.from,
            conflict.until,
        );
    }
    out
}

fn render_title(month: Date, apartment: Option<&Apartment>) -> String {
    let title = month.strftime("%B %Y").to_string();
    match apartment {
        Some(a) => format!("{} {}", title.bold(), a.title),
        None => title.bold().to_string(),
    }
}

/// The weekday header followed by one line per week.
pub fn render_grid(days: CalendarDays<'_>, today: Date) -> String {
    let header: Vec<String> = days
        .weekdays()
        .into_iter()
        .map(|a| pad_to_width(weekday_label(a), CELL_WIDTH))
        .collect();
    let mut lines = vec![header.concat().trim_end().dimmed().to_string()];

    let cells: Vec<String> = days.map(|day| render_cell(day, today)).collect();
    for week in cells.chunks(7) {
        lines.push(week.concat().trim_end().to_string());
    }
    lines.join("\n")
}

fn render_cell(day: CalendarDay<'_>, today: Date) -> String {
    let CalendarDay::Day(cell) = day else {
        return " ".repeat(CELL_WIDTH);
    };

    let text = pad_to_width(&cell_text(&cell), CELL_WIDTH);
    let styled = if cell.is_double_booked() {
        text.yellow()
    } else if cell.is_check_in {
        text.green()
    } else if cell.is_check_out {
        text.red()
    } else if cell.is_stay {
        text.blue()
    } else {
        text.normal()
    };

    if cell.date == today {
        styled.bold().underline().to_string()
    } else {
        styled.to_string()
    }
}

/// Day number and occupancy marker, check-in days also carry the party size
/// when more than one person arrives.
fn cell_text(cell: &DayCell<'_>) -> String {
    let marker = match (cell.is_check_in, cell.is_check_out) {
        _ if cell.is_double_booked() => "!",
        (true, true) => "↕",
        (true, false) => "↓",
        (false, true) => "↑",
        (false, false) => "",
    };

    let arriving = cell.guest.filter(|_| cell.is_check_in);
    let people = match arriving.map(|g| g.total_people()) {
        Some(n @ 2..=9) => n.to_string(),
        Some(n) if n > 9 => "+".to_string(),
        _ => String::new(),
    };

    format!("{:>2}{marker}{people}", cell.date.day())
}

fn render_legend() -> String {
    format!(
        "{} check-in  {} check-out  {} stay  {} double-booked",
        "↓".green(),
        "↑".red(),
        "■".blue(),
        "!".yellow(),
    )
}

fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Mo",
        Weekday::Tuesday => "Tu",
        Weekday::Wednesday => "We",
        Weekday::Thursday => "Th",
        Weekday::Friday => "Fr",
        Weekday::Saturday => "Sa",
        Weekday::Sunday => "Su",
    }
}
