// Input module - Held-key tracking and relay to the engine
//
// This module provides:
// - The held-key set and the per-frame relay (aggregator)
// - winit key event to symbol conversion
// - Input settings

pub mod aggregator;
pub mod config;
pub mod symbol;

pub use aggregator::{HeldKeySet, InputAggregator, DEFAULT_TOUCH_SYMBOL};
pub use config::InputConfig;
pub use symbol::{symbol_for_key, KeySymbolizer};
