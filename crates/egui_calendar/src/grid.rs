use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    CalendarError, Result,
    calendar::{check_month, days_in_month, first_weekday, today},
};

/// Number of week rows in a [`Grid`].
pub const GRID_ROWS: usize = 6;

/// Number of weekday columns in a [`Grid`], Sunday first.
pub const GRID_COLUMNS: usize = 7;

/// Number of cells in a [`Grid`].
pub const GRID_LEN: usize = GRID_ROWS * GRID_COLUMNS;

/// One slot of a [`Grid`]: either a day of the month, or padding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct CalendarCell {
    /// Day of the month, `1..=31`. `0` for padding.
    pub label: u32,

    /// The date this cell stands for. `None` for padding.
    pub date: Option<NaiveDate>,

    /// Is [`Self::date`] the current date?
    pub is_today: bool,

    /// Index of this cell among the date cells of its grid, `None` for padding.
    ///
    /// Pass it to [`crate::Selection::activate`] to select the cell.
    pub position: Option<usize>,
}

impl CalendarCell {
    const PADDING: Self = Self {
        label: 0,
        date: None,
        is_today: false,
        position: None,
    };

    /// Padding cells have no date.
    /// They come before the 1st of the month, and after its last day.
    #[inline]
    pub fn is_padding(&self) -> bool {
        self.date.is_none()
    }
}

/// The days of one month, laid out on 6 rows of 7 weekdays, Sunday first.
///
/// A grid always has [`GRID_LEN`] cells.
/// Slots before the first and after the last day of the month are padding.
///
/// A grid never changes once built. Build a new one to show another month.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Grid {
    month0: u32,
    year: i32,
    cells: Vec<CalendarCell>,
}

impl Grid {
    /// Lay out the given month, flagging the cell of [`today`].
    ///
    /// `month0` is 0-based: January is `0`.
    ///
    /// # Errors
    /// [`CalendarError::InvalidMonth`] if `month0` is not in `0..=11`,
    /// [`CalendarError::InvalidYear`] if `year` is outside the range of [`NaiveDate`].
    pub fn build(month0: u32, year: i32) -> Result<Self> {
        Self::build_with_today(month0, year, today())
    }

    /// Like [`Self::build`], but with a given date standing in for today.
    ///
    /// # Errors
    /// Same as [`Self::build`].
    pub fn build_with_today(month0: u32, year: i32, today: NaiveDate) -> Result<Self> {
        first_of_month(month0, year)?;
        let num_days = days_in_month(month0, year)?;
        let offset = first_weekday(month0, year)? as usize;

        let mut cells = Vec::with_capacity(GRID_LEN);
        cells.extend(std::iter::repeat_n(CalendarCell::PADDING, offset));

        for (position, day) in (1..=num_days).enumerate() {
            let date = NaiveDate::from_ymd_opt(year, month0 + 1, day)
                .ok_or(CalendarError::InvalidYear { year })?;
            cells.push(CalendarCell {
                label: day,
                date: Some(date),
                is_today: date == today,
                position: Some(position),
            });
        }

        // A month spans at most 6 weeks: 6 + 31 ≤ 42.
        cells.resize(GRID_LEN, CalendarCell::PADDING);

        Ok(Self {
            month0,
            year,
            cells,
        })
    }

    /// The month shown, 0-based.
    #[inline]
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// The year shown.
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Header text: 1-based month, then the year, e.g. `"2 2024"`.
    pub fn title(&self) -> String {
        format!("{} {}", self.month0 + 1, self.year)
    }

    /// All [`GRID_LEN`] cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    /// The [`GRID_ROWS`] weeks, each [`GRID_COLUMNS`] cells wide.
    pub fn rows(&self) -> impl Iterator<Item = &[CalendarCell]> + '_ {
        self.cells.chunks(GRID_COLUMNS)
    }

    /// The non-padding cells, in date order.
    pub fn days(&self) -> impl Iterator<Item = &CalendarCell> + '_ {
        self.cells.iter().filter(|cell| !cell.is_padding())
    }

    /// The date cell with the given [`CalendarCell::position`], if any.
    pub fn cell_at(&self, position: usize) -> Option<&CalendarCell> {
        self.days().find(|cell| cell.position == Some(position))
    }

    /// Does this grid show the given date?
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days().any(|cell| cell.date == Some(date))
    }
}

/// The first day of the month, if both the month and the year can be shown in a [`Grid`].
pub(crate) fn first_of_month(month0: u32, year: i32) -> Result<NaiveDate> {
    check_month(month0)?;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or(CalendarError::InvalidYear { year })
}

#[cfg(test)]
mod tests {
    use chrono::Datelike as _;

    use super::*;
    use crate::calendar::WEEKDAY_LABELS;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// A date far away from every month tested here.
    fn elsewhere() -> NaiveDate {
        date(1800, 6, 15)
    }

    #[test]
    fn leap_february() {
        let grid = Grid::build_with_today(1, 2024, elsewhere()).unwrap();
        assert_eq!(grid.cells().len(), GRID_LEN);
        assert_eq!(grid.days().count(), 29);

        let first = grid.cells().iter().position(|c| !c.is_padding()).unwrap();
        assert_eq!(first as u32, first_weekday(1, 2024).unwrap());
        assert_eq!(WEEKDAY_LABELS[first], "Thu");
        assert_eq!(grid.cells()[first].label, 1);
        assert_eq!(grid.title(), "2 2024");
    }

    #[test]
    fn common_february() {
        let grid = Grid::build_with_today(1, 2023, elsewhere()).unwrap();
        assert_eq!(grid.days().count(), 28);
        assert_eq!(grid.cells().len(), GRID_LEN);
    }

    #[test]
    fn february_starting_on_sunday_has_no_leading_padding() {
        // 2015-02-01 was a Sunday, and February 2015 fills exactly four rows.
        let grid = Grid::build_with_today(1, 2015, elsewhere()).unwrap();
        assert!(!grid.cells()[0].is_padding());
        assert_eq!(grid.cells()[27].label, 28);
        assert!(grid.cells()[28..].iter().all(CalendarCell::is_padding));
    }

    #[test]
    fn long_month_uses_six_rows() {
        // 2026-08-01 is a Saturday: the 31st lands on the sixth row.
        let grid = Grid::build_with_today(7, 2026, elsewhere()).unwrap();
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), GRID_ROWS);
        assert!(rows.iter().all(|row| row.len() == GRID_COLUMNS));
        assert_eq!(rows[0][6].label, 1);
        assert_eq!(rows[5][1].label, 31);
        assert!(rows[5][2].is_padding());
    }

    #[test]
    fn every_month_satisfies_the_grid_invariants() {
        for year in [-401, 1, 1900, 1970, 2000, 2023, 2024, 2100, 9999] {
            for month0 in 0..12 {
                let grid = Grid::build_with_today(month0, year, elsewhere()).unwrap();
                let num_days = days_in_month(month0, year).unwrap();
                assert_eq!(grid.cells().len(), GRID_LEN);
                assert_eq!(grid.days().count(), num_days as usize);

                let offset = first_weekday(month0, year).unwrap() as usize;
                assert!(grid.cells()[..offset].iter().all(CalendarCell::is_padding));

                for (expected, cell) in grid.days().enumerate() {
                    assert_eq!(cell.position, Some(expected));
                    assert_eq!(cell.label as usize, expected + 1);
                    let date = cell.date.unwrap();
                    assert_eq!(date.day(), cell.label);
                    assert_eq!(date.month0(), month0);
                    assert_eq!(date.year(), year);
                }

                for cell in grid.cells().iter().filter(|c| c.is_padding()) {
                    assert_eq!(cell, &CalendarCell::default());
                }
            }
        }
    }

    #[test]
    fn today_is_flagged_once() {
        let today = date(2026, 10, 19);
        let grid = Grid::build_with_today(9, 2026, today).unwrap();
        let todays: Vec<_> = grid.cells().iter().filter(|c| c.is_today).collect();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].date, Some(today));
        assert_eq!(todays[0].label, 19);

        let other_month = Grid::build_with_today(8, 2026, today).unwrap();
        assert!(other_month.cells().iter().all(|c| !c.is_today));

        let other_year = Grid::build_with_today(9, 2025, today).unwrap();
        assert!(other_year.cells().iter().all(|c| !c.is_today));
    }

    #[test]
    fn build_uses_the_local_date() {
        let before = today();
        let grid = Grid::build(before.month0(), before.year()).unwrap();
        let after = today();

        let flagged: Vec<_> = grid.days().filter(|c| c.is_today).collect();
        if flagged.is_empty() {
            // Local midnight at the end of the month passed while building.
            assert_ne!(before.month0(), after.month0());
        } else {
            assert_eq!(flagged.len(), 1);
            let date = flagged[0].date.unwrap();
            assert!(date == before || date == after, "{date} is not today");
        }
    }

    #[test]
    fn building_twice_gives_the_same_grid() {
        let today = date(2024, 2, 10);
        let a = Grid::build_with_today(1, 2024, today).unwrap();
        let b = Grid::build_with_today(1, 2024, today).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn cell_lookup() {
        let grid = Grid::build_with_today(1, 2024, elsewhere()).unwrap();
        assert_eq!(grid.cell_at(0).unwrap().label, 1);
        assert_eq!(grid.cell_at(28).unwrap().date, Some(date(2024, 2, 29)));
        assert!(grid.cell_at(29).is_none());
        assert!(grid.contains(date(2024, 2, 29)));
        assert!(!grid.contains(date(2024, 3, 1)));
    }

    #[test]
    fn first_of_month_checks_month_and_year() {
        assert_eq!(first_of_month(1, 2024), Ok(date(2024, 2, 1)));
        assert_eq!(
            first_of_month(12, 2024),
            Err(CalendarError::InvalidMonth { month0: 12 })
        );
        assert_eq!(
            first_of_month(0, 300_000),
            Err(CalendarError::InvalidYear { year: 300_000 })
        );
    }

    #[test]
    fn invalid_input() {
        assert_eq!(
            Grid::build(12, 2024),
            Err(CalendarError::InvalidMonth { month0: 12 })
        );
        assert_eq!(
            Grid::build(0, i32::MAX),
            Err(CalendarError::InvalidYear { year: i32::MAX })
        );
        assert_eq!(
            Grid::build(0, i32::MIN),
            Err(CalendarError::InvalidYear { year: i32::MIN })
        );
    }
}
