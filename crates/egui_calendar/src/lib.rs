//! A month calendar for [`egui`](https://github.com/emilk/egui): the date math, the
//! 6×7 grid a month is laid out on, a single-date selection, and the [`DatePicker`]
//! widget that paints it all.
//!
//! The grid is plain data, so it can be built and inspected without a [`egui::Context`]:
//!
//! ```
//! use egui_calendar::{Grid, Selection};
//!
//! let grid = Grid::build(1, 2024).unwrap(); // February 2024
//! assert_eq!(grid.days().count(), 29);
//!
//! let mut selection = Selection::default();
//! let date = selection.activate(0, &grid).unwrap();
//! assert_eq!(date.to_string(), "2024-02-01");
//! ```
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

#![forbid(unsafe_code)]

pub mod calendar;
mod grid;
mod options;
mod picker;
mod selection;

pub use crate::calendar::{WEEKDAY_LABELS, days_in_month, first_weekday, is_leap_year, today};
pub use crate::grid::{CalendarCell, GRID_COLUMNS, GRID_LEN, GRID_ROWS, Grid};
pub use crate::options::{DatePickerOptions, Placement};
pub use crate::picker::DatePicker;
pub use crate::selection::Selection;

// ---------------------------------------------------------------------------

/// Something went wrong building a grid or activating one of its cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalendarError {
    /// The month index is outside `0..=11`.
    InvalidMonth { month0: u32 },

    /// The year is outside what [`chrono::NaiveDate`] can represent.
    InvalidYear { year: i32 },

    /// No date cell in the grid has this position.
    ///
    /// Either the position is past the last day of the month, or it was taken from a padding cell.
    InvalidPosition { position: usize },
}

impl std::fmt::Display for CalendarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth { month0 } => {
                write!(f, "invalid month index {month0}, expected 0..=11")
            }
            Self::InvalidYear { year } => write!(f, "year {year} is out of the supported range"),
            Self::InvalidPosition { position } => {
                write!(f, "no date cell at position {position}")
            }
        }
    }
}

impl std::error::Error for CalendarError {}

pub type Result<T, E = CalendarError> = std::result::Result<T, E>;
