// Screen Emulator Library
// Scaled framebuffer presentation and held-key relay for an emulator front-end

// Public modules
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod input;

// Re-export main types for convenience
pub use config::{EngineConfig, ScreenConfig};
pub use display::{
    run_screen, DisplaySurface, FrameBuffer, FrameClock, FrameCompositor, Rgba, Rotation,
    ScreenWindow, WindowConfig,
};
pub use engine::{DemoEngine, Engine, KeySink, MachineKey, Screen, SharedEngine};
pub use error::ScreenError;
pub use input::{HeldKeySet, InputAggregator, InputConfig, KeySymbolizer};
