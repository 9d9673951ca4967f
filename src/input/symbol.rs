// Key symbols - Converts winit key events into relay symbols
//
// Symbols follow the web `KeyboardEvent.key` naming: printable keys are the
// character they type, Space is " ", and named keys use their name
// ("ArrowUp", "Enter", "Escape").

use std::collections::HashMap;
use winit::keyboard::{Key, NamedKey, PhysicalKey};

/// Convert a logical key to its relay symbol
///
/// # Returns
/// `None` for dead keys and keys the platform could not identify
pub fn symbol_for_key(key: &Key) -> Option<String> {
    match key {
        Key::Character(text) => Some(text.to_string()),
        Key::Named(NamedKey::Space) => Some(" ".to_string()),
        Key::Named(named) => Some(format!("{:?}", named)),
        Key::Unidentified(_) | Key::Dead(_) => None,
    }
}

/// Pairs each press with the symbol it produced
///
/// The logical key of a physical key can change while it is held (Shift
/// pressed or released in between, layout switch). Releasing always reports
/// the symbol that was pressed, so no key is left held by a case change.
#[derive(Debug, Default)]
pub struct KeySymbolizer {
    pressed: HashMap<PhysicalKey, String>,
}

impl KeySymbolizer {
    /// Create a symbolizer with no keys down
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the symbol for a press event
    pub fn press(&mut self, physical_key: PhysicalKey, logical_key: &Key) -> Option<String> {
        if let Some(symbol) = self.pressed.get(&physical_key) {
            return Some(symbol.clone());
        }
        let symbol = symbol_for_key(logical_key)?;
        self.pressed.insert(physical_key, symbol.clone());
        Some(symbol)
    }

    /// Resolve the symbol for a release event
    pub fn release(&mut self, physical_key: PhysicalKey, logical_key: &Key) -> Option<String> {
        self.pressed
            .remove(&physical_key)
            .or_else(|| symbol_for_key(logical_key))
    }

    /// Forget every press
    pub fn reset(&mut self) {
        self.pressed.clear();
    }
}
