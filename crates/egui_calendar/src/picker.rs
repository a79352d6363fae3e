use chrono::Datelike as _;
use egui::{Button, Frame, InnerResponse, Response, RichText, Ui, Vec2, Widget};
use serde::{Deserialize, Serialize};

use crate::{
    DatePickerOptions, GRID_COLUMNS, Grid, Placement, Result, Selection,
    calendar::{WEEKDAY_LABELS, next_month, previous_month, today},
    grid::first_of_month,
};

/// The month a picker is showing. Kept in egui memory between frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
struct DatePickerState {
    month0: u32,
    year: i32,
}

impl DatePickerState {
    fn step(&mut self, step: fn(u32, i32) -> Result<(u32, i32)>) {
        match step(self.month0, self.year) {
            Ok((month0, year)) => {
                log::debug!("Date picker moved to {}/{year}", month0 + 1);
                self.month0 = month0;
                self.year = year;
            }
            Err(err) => log::warn!("Date picker can't leave {}/{}: {err}", self.month0 + 1, self.year),
        }
    }
}

/// A month calendar to pick a single date from.
///
/// ```
/// # egui::__run_test_ui(|ui| {
/// # let mut selection = egui_calendar::Selection::default();
/// ui.add(egui_calendar::DatePicker::new(&mut selection).id_salt("birthday"));
/// # });
/// ```
///
/// The picker opens on the month of the active date, or [`Self::initial_month`],
/// or the current month, and the `<` / `>` buttons in its header change it.
/// Clicking a day makes it the active date of the [`Selection`] and marks the response as changed.
pub struct DatePicker<'a> {
    selection: &'a mut Selection,
    id_salt: Option<&'a str>,
    options: DatePickerOptions,
    initial_month: Option<(u32, i32)>,
}

impl<'a> DatePicker<'a> {
    /// The picker reads and writes the active date of `selection`.
    pub fn new(selection: &'a mut Selection) -> Self {
        Self {
            selection,
            id_salt: None,
            options: DatePickerOptions::DEFAULT,
            initial_month: None,
        }
    }

    /// Must be set if multiple date pickers are in the same [`Ui`].
    #[inline]
    pub fn id_salt(mut self, id_salt: &'a str) -> Self {
        self.id_salt = Some(id_salt);
        self
    }

    /// Replace all options at once. (Default: [`DatePickerOptions::DEFAULT`])
    #[inline]
    pub fn options(mut self, options: DatePickerOptions) -> Self {
        self.options = options;
        self
    }

    /// Where to put the picker in [`Self::show_with_anchor`]. (Default: [`Placement::Inner`])
    #[inline]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.options.placement = placement;
        self
    }

    /// Month to open on when nothing is selected yet, 0-based. (Default: the current month)
    ///
    /// Only used the first time the picker is shown.
    #[inline]
    pub fn initial_month(mut self, month0: u32, year: i32) -> Self {
        self.initial_month = Some((month0, year));
        self
    }

    /// Show the picker together with some anchor content, placed according to [`Placement`].
    ///
    /// The returned response is the picker's.
    pub fn show_with_anchor<R>(
        self,
        ui: &mut Ui,
        add_anchor: impl FnOnce(&mut Ui) -> R,
    ) -> InnerResponse<R> {
        let (inner, response) = match self.options.placement {
            Placement::Inner => {
                Frame::group(ui.style())
                    .show(ui, |ui| {
                        let inner = add_anchor(ui);
                        (inner, self.ui(ui))
                    })
                    .inner
            }
            Placement::Before => {
                let response = self.ui(ui);
                (add_anchor(ui), response)
            }
            Placement::After => {
                let inner = add_anchor(ui);
                (inner, self.ui(ui))
            }
        };
        InnerResponse::new(inner, response)
    }

    fn initial_state(&self) -> DatePickerState {
        let start = self
            .selection
            .active_date()
            .map(|date| (date.month0(), date.year()))
            .or(self.initial_month)
            .filter(|&(month0, year)| match first_of_month(month0, year) {
                Ok(_) => true,
                Err(err) => {
                    log::warn!("Ignoring initial month {month0} of year {year}: {err}");
                    false
                }
            });
        let (month0, year) = start.unwrap_or_else(|| {
            let today = today();
            (today.month0(), today.year())
        });
        DatePickerState { month0, year }
    }
}

impl Widget for DatePicker<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let id = ui.make_persistent_id(self.id_salt);
        let mut state = ui
            .data_mut(|data| data.get_persisted::<DatePickerState>(id))
            .unwrap_or_else(|| self.initial_state());

        let grid = Grid::build(state.month0, state.year);
        let title = match &grid {
            Ok(grid) => grid.title(),
            Err(err) => {
                log::debug!("Date picker can't show {}/{}: {err}", state.month0 + 1, state.year);
                format!("{} {}", state.month0 + 1, state.year)
            }
        };

        let selection = self.selection;
        let mut activated = false;
        let height = 20.0;

        let InnerResponse { mut response, .. } = ui.vertical(|ui| {
            // The arrows stay available even when the month can't be shown.
            ui.horizontal(|ui| {
                if ui.button("<").on_hover_text("previous month").clicked() {
                    state.step(previous_month);
                }
                ui.label(RichText::new(title).strong());
                if ui.button(">").on_hover_text("next month").clicked() {
                    state.step(next_month);
                }
            });

            let grid = match &grid {
                Ok(grid) => grid,
                Err(err) => {
                    ui.label(err.to_string());
                    return;
                }
            };

            egui::Grid::new(id.with("days"))
                .num_columns(GRID_COLUMNS)
                .min_col_width(height)
                .show(ui, |ui| {
                    for name in WEEKDAY_LABELS {
                        ui.label(name);
                    }
                    ui.end_row();

                    for week in grid.rows() {
                        for cell in week {
                            let Some(position) = cell.position else {
                                ui.label("");
                                continue;
                            };

                            let button = Button::new(cell.label.to_string())
                                .selected(selection.is_active(cell))
                                .min_size(Vec2::splat(height));
                            let button_response = ui.add(button);

                            if cell.is_today {
                                // Encircle today's date
                                let stroke = ui.visuals().widgets.inactive.fg_stroke;
                                ui.painter().circle_stroke(
                                    button_response.rect.center(),
                                    height / 2.0,
                                    stroke,
                                );
                            }

                            if button_response.clicked() {
                                match selection.activate(position, &grid) {
                                    Ok(_) => activated = true,
                                    Err(err) => log::warn!("Ignoring click on {}: {err}", cell.label),
                                }
                            }
                        }
                        ui.end_row();
                    }
                });
        });

        if activated {
            response.mark_changed();
        }
        if grid
            .as_ref()
            .is_ok_and(|grid| state.month0 != grid.month0() || state.year != grid.year())
        {
            ui.ctx().request_repaint();
        }
        ui.data_mut(|data| data.insert_persisted(id, state));

        response
    }
}
