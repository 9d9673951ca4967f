// Input configuration module
//
// Settings for how host input is turned into relayed symbols.

use super::aggregator::DEFAULT_TOUCH_SYMBOL;
use serde::{Deserialize, Serialize};

/// Input configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Symbol forwarded once when the screen is touched
    pub touch_symbol: String,

    /// Release every held key when the window loses focus
    ///
    /// Off by default: a key released while another window has focus stays
    /// held until it is pressed and released again.
    pub release_on_focus_loss: bool,

    /// Treat a left mouse click like a touch
    pub mouse_as_touch: bool,
}

impl InputConfig {
    /// Create an input configuration with default settings
    pub fn new() -> Self {
        Self {
            touch_symbol: DEFAULT_TOUCH_SYMBOL.to_string(),
            release_on_focus_loss: false,
            mouse_as_touch: true,
        }
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// Error message describing the first invalid setting
    pub fn validate(&self) -> Result<(), String> {
        if self.touch_symbol.is_empty() {
            return Err("touch_symbol must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::new()
    }
}
