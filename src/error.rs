// Error types for the front-end's outer layers
//
// The compositor and the aggregator never fail; errors only come from
// configuration files and from acquiring or drawing to the window.

use std::fmt;
use std::io;

/// Errors that can occur while configuring or running the screen
#[derive(Debug)]
pub enum ScreenError {
    /// Configuration file could not be read or written
    Io(io::Error),

    /// Configuration file is not valid TOML for the expected layout
    ConfigParse(toml::de::Error),

    /// Configuration could not be serialized
    ConfigSerialize(toml::ser::Error),

    /// Configuration parsed but holds an unusable value
    InvalidConfig(String),

    /// The event loop could not be created or exited abnormally
    EventLoop(winit::error::EventLoopError),

    /// The window could not be created
    Window(winit::error::OsError),

    /// The pixel surface could not be created or rendered
    Render(pixels::Error),
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenError::Io(e) => write!(f, "I/O error: {}", e),
            ScreenError::ConfigParse(e) => write!(f, "Failed to parse config file: {}", e),
            ScreenError::ConfigSerialize(e) => write!(f, "Failed to serialize config: {}", e),
            ScreenError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            ScreenError::EventLoop(e) => write!(f, "Event loop error: {}", e),
            ScreenError::Window(e) => write!(f, "Failed to create window: {}", e),
            ScreenError::Render(e) => write!(f, "Render error: {}", e),
        }
    }
}

impl std::error::Error for ScreenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScreenError::Io(e) => Some(e),
            ScreenError::ConfigParse(e) => Some(e),
            ScreenError::ConfigSerialize(e) => Some(e),
            ScreenError::InvalidConfig(_) => None,
            ScreenError::EventLoop(e) => Some(e),
            ScreenError::Window(e) => Some(e),
            ScreenError::Render(e) => Some(e),
        }
    }
}

impl From<io::Error> for ScreenError {
    fn from(e: io::Error) -> Self {
        ScreenError::Io(e)
    }
}

impl From<toml::de::Error> for ScreenError {
    fn from(e: toml::de::Error) -> Self {
        ScreenError::ConfigParse(e)
    }
}

impl From<toml::ser::Error> for ScreenError {
    fn from(e: toml::ser::Error) -> Self {
        ScreenError::ConfigSerialize(e)
    }
}

impl From<winit::error::EventLoopError> for ScreenError {
    fn from(e: winit::error::EventLoopError) -> Self {
        ScreenError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for ScreenError {
    fn from(e: winit::error::OsError) -> Self {
        ScreenError::Window(e)
    }
}

impl From<pixels::Error> for ScreenError {
    fn from(e: pixels::Error) -> Self {
        ScreenError::Render(e)
    }
}
