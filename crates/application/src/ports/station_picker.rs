//! Interactive choice among candidate stations

#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Why no choice was made
#[derive(Debug, Error)]
pub enum PickerError {
    /// The user dismissed the prompt
    #[error("selection cancelled")]
    Cancelled,

    /// No interactive terminal, or the terminal failed
    #[error("prompt unavailable: {0}")]
    Unavailable(String),
}

/// Port for asking the user to pick one of several labelled options
#[cfg_attr(test, automock)]
pub trait StationPicker: Send + Sync {
    /// Show `options` and return the index of the chosen one
    ///
    /// `default` is the index preselected when the prompt opens.
    fn pick(&self, message: &str, options: &[String], default: usize) -> Result<usize, PickerError>;
}
