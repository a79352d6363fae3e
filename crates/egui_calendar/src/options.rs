use serde::{Deserialize, Serialize};

/// Where a [`crate::DatePicker`] goes relative to the anchor passed to
/// [`crate::DatePicker::show_with_anchor`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Placement {
    /// Inside the anchor's frame, after the anchor's own contents.
    #[default]
    Inner,

    /// Above the anchor.
    Before,

    /// Below the anchor.
    After,
}

/// Configuration of one [`crate::DatePicker`].
///
/// Every picker owns its own copy; changing one never affects another.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct DatePickerOptions {
    pub placement: Placement,
}

impl DatePickerOptions {
    /// The options used when none are given.
    pub const DEFAULT: Self = Self {
        placement: Placement::Inner,
    };

    #[inline]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }
}

impl Default for DatePickerOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
