use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{CalendarCell, CalendarError, Grid, Result};

/// The single active date of a date picker.
///
/// The only way to change it is [`Self::activate`], which validates the position against a [`Grid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Selection {
    active_date: Option<NaiveDate>,
}

impl Selection {
    /// Start out with a date already selected.
    pub fn with_active_date(date: NaiveDate) -> Self {
        Self {
            active_date: Some(date),
        }
    }

    /// The selected date, if any.
    #[inline]
    pub fn active_date(&self) -> Option<NaiveDate> {
        self.active_date
    }

    /// Is this the cell of the active date?
    pub fn is_active(&self, cell: &CalendarCell) -> bool {
        cell.date.is_some() && cell.date == self.active_date
    }

    /// Select the date cell with the given [`CalendarCell::position`] and return its date.
    ///
    /// Replaces whatever was active before.
    ///
    /// # Errors
    /// [`CalendarError::InvalidPosition`] if no date cell of `grid` has this position.
    /// The active date is then left as it was.
    pub fn activate(&mut self, position: usize, grid: &Grid) -> Result<NaiveDate> {
        let date = grid
            .cell_at(position)
            .and_then(|cell| cell.date)
            .ok_or(CalendarError::InvalidPosition { position })?;

        if let Some(previous) = self.active_date.replace(date) {
            log::debug!("Active date changed from {previous} to {date}");
        } else {
            log::debug!("Active date set to {date}");
        }
        Ok(date)
    }
}
