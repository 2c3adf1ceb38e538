//! Departure board formatting
//!
//! Turns a decoded departure list into aligned, optionally coloured text
//! lines: line name, direction and departure time with delay.

use std::fmt::Display;

use chrono::{DateTime, Duration, TimeZone, Utc};
use colored::Color;
use domain::entities::{DelayStatus, Departure};
use domain::value_objects::DepartureFilter;

use super::columns::{display_len, pad_left, pad_right};

/// How far back a departure may lie and still be shown
#[must_use]
pub fn lookbehind() -> Duration {
    Duration::minutes(2)
}

/// How far ahead departures are shown
#[must_use]
pub fn lookahead() -> Duration {
    Duration::hours(1)
}

/// Whether the board emits ANSI colour codes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    Always,
    #[default]
    Never,
}

impl ColorMode {
    /// Colour when forced, otherwise only on a terminal that did not opt out via `NO_COLOR`
    #[must_use]
    pub const fn resolve(force: bool, stdout_is_terminal: bool, no_color_requested: bool) -> Self {
        if force || (stdout_is_terminal && !no_color_requested) {
            Self::Always
        } else {
            Self::Never
        }
    }

    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Always)
    }
}

/// Keep the departures inside the display window that pass `filter`
///
/// Returns trimmed copies in the original order; the input is left untouched.
#[must_use]
pub fn select_departures(
    departures: &[Departure],
    filter: &DepartureFilter,
    now: DateTime<Utc>,
) -> Vec<Departure> {
    let from = now - lookbehind();
    let until = now + lookahead();

    departures
        .iter()
        .filter(|dep| dep.departs_between(from, until))
        .map(Departure::normalized)
        .filter(|dep| filter.accepts(dep))
        .collect()
}

/// One formatted board line before padding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    pub line: String,
    pub direction: String,
    /// `HH:MM` with optional delay suffix
    pub time: String,
    pub status: DelayStatus,
}

/// Column widths in grapheme clusters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    pub line: usize,
    pub direction: usize,
    pub time: usize,
}

impl ColumnWidths {
    /// Natural widths: the longest value of each column
    fn natural(rows: &[BoardRow]) -> Self {
        rows.iter().fold(Self::default(), |widths, row| Self {
            line: widths.line.max(display_len(&row.line)),
            direction: widths.direction.max(display_len(&row.direction)),
            time: widths.time.max(display_len(&row.time)),
        })
    }

    /// Stretch or squeeze the direction column so a line spans `total` columns
    ///
    /// The direction column never drops below one character.
    #[must_use]
    pub const fn fit_to(self, total: usize) -> Self {
        let used = self.line + self.time + 2;
        let direction = if total > used { total - used } else { 1 };
        Self { direction, ..self }
    }
}

/// Filtered departures laid out in three aligned columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartureBoard {
    rows: Vec<BoardRow>,
    widths: ColumnWidths,
}

impl DepartureBoard {
    /// Select, filter and measure the departures
    ///
    /// Times are shown in `tz`. A `width` of `Some(n)` fixes the total line
    /// width by resizing the direction column.
    #[must_use]
    pub fn build<Tz>(
        departures: &[Departure],
        filter: &DepartureFilter,
        width: Option<usize>,
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let rows: Vec<BoardRow> = select_departures(departures, filter, now)
            .into_iter()
            .filter_map(|dep| {
                Some(BoardRow {
                    time: dep.time_label(tz)?,
                    status: dep.delay_status(),
                    line: dep.line.name,
                    direction: dep.direction,
                })
            })
            .collect();

        let natural = ColumnWidths::natural(&rows);
        let widths = match width {
            Some(total) if total > 0 => natural.fit_to(total),
            _ => natural,
        };

        Self { rows, widths }
    }

    #[must_use]
    pub fn rows(&self) -> &[BoardRow] {
        &self.rows
    }

    #[must_use]
    pub const fn widths(&self) -> ColumnWidths {
        self.widths
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Padded output lines, coloured according to `color`
    #[must_use]
    pub fn render(&self, color: ColorMode) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                let line = pad_left(&row.line, self.widths.line);
                let direction = pad_right(&row.direction, self.widths.direction);
                format!(
                    "{} {direction} {}",
                    paint_line(line, color),
                    paint_time(&row.time, row.status, color)
                )
            })
            .collect()
    }
}

fn paint_line(text: String, color: ColorMode) -> String {
    if color.is_enabled() {
        paint(&text, Color::White)
    } else {
        text
    }
}

fn paint_time(text: &str, status: DelayStatus, color: ColorMode) -> String {
    if !color.is_enabled() {
        return text.to_string();
    }
    let fg = match status {
        DelayStatus::OnTime => Color::BrightGreen,
        DelayStatus::Late => Color::Red,
        DelayStatus::Early => Color::Yellow,
    };
    paint(text, fg)
}

/// Wrap `text` in an ANSI foreground colour, independent of `colored`'s global switch
fn paint(text: &str, fg: Color) -> String {
    format!("\u{1b}[{}m{text}\u{1b}[0m", fg.to_fg_str())
}
