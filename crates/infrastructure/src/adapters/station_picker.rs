//! Terminal station picker - Implements StationPicker with a dialoguer select list

use application::ports::{PickerError, StationPicker};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;

/// Arrow-key selection list drawn on standard error
#[derive(Debug, Default)]
pub struct DialoguerStationPicker;

impl DialoguerStationPicker {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl StationPicker for DialoguerStationPicker {
    fn pick(&self, message: &str, options: &[String], default: usize) -> Result<usize, PickerError> {
        if options.is_empty() {
            return Err(PickerError::Unavailable("no options to choose from".to_string()));
        }

        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .items(options)
            .default(default.min(options.len() - 1))
            .interact_opt()
            .map_err(|e| PickerError::Unavailable(e.to_string()))?
            .ok_or(PickerError::Cancelled)
    }
}
