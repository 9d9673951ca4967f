// Keymap - Symbol to machine key binding
//
// Several keyboard layouts drive the same machine buttons: arrow keys,
// an ESDF cluster and vi-style HJKL all steer the D-pad, and two rows of
// keys reach the action buttons.

/// Buttons of the emulated machine reachable from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MachineKey {
    /// Primary action / confirm
    Key0,
    Key1,
    Key2,
    Key3,
    Up,
    Down,
    Left,
    Right,
}

/// Resolve a relayed symbol to a machine key
///
/// # Returns
/// `None` for symbols the machine has no button for
pub fn machine_key_for(symbol: &str) -> Option<MachineKey> {
    match symbol {
        "ArrowUp" | "e" | "k" => Some(MachineKey::Up),
        "ArrowDown" | "d" | "j" => Some(MachineKey::Down),
        "ArrowLeft" | "s" | "h" => Some(MachineKey::Left),
        "ArrowRight" | "f" | "l" => Some(MachineKey::Right),
        "z" | "n" | "0" | " " | "Enter" => Some(MachineKey::Key0),
        "x" | "m" | "1" => Some(MachineKey::Key1),
        "c" | "," | "2" => Some(MachineKey::Key2),
        "v" | "." | "3" => Some(MachineKey::Key3),
        _ => None,
    }
}
