// Demo engine - A tiny sketch pad used by the binary
//
// Steers a cursor with the direction keys, paints with Key0, wipes the
// canvas with Key1 and cycles ink colors with Key2/Key3. It stands in for
// a real emulated machine so the front-end can be run on its own.

use super::keymap::{machine_key_for, MachineKey};
use super::{Engine, KeySink, Screen};
use crate::display::Rgba;
use std::collections::HashSet;

/// Ink colors selectable with Key2/Key3
const INKS: [Rgba; 4] = [
    Rgba::WHITE,
    Rgba::new(0xFF, 0x40, 0x40, 0xFF),
    Rgba::new(0x40, 0xFF, 0x40, 0xFF),
    Rgba::new(0x40, 0x80, 0xFF, 0xFF),
];

/// Frames a color-cycle key must be held before it repeats
const INK_REPEAT_FRAMES: u32 = 15;

/// Sketch pad engine
pub struct DemoEngine {
    boot_frames: u32,
    width: usize,
    height: usize,
    canvas: Vec<Option<Rgba>>,
    cursor: (usize, usize),
    ink: usize,
    ink_cooldown: u32,
    /// Machine keys reported held since the last step
    pending: HashSet<MachineKey>,
    frame: u64,
}

impl DemoEngine {
    /// Create a demo engine that becomes ready after `boot_frames` steps
    pub fn new(boot_frames: u32) -> Self {
        Self {
            boot_frames,
            width: 0,
            height: 0,
            canvas: Vec::new(),
            cursor: (0, 0),
            ink: 0,
            ink_cooldown: 0,
            pending: HashSet::new(),
            frame: 0,
        }
    }

    /// Current cursor position
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Ink painted at the given canvas position, if any
    pub fn painted(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.canvas[y * self.width + x]
    }

    fn resize(&mut self, (width, height): (usize, usize)) {
        if (width, height) != (self.width, self.height) {
            self.width = width;
            self.height = height;
            self.canvas = vec![None; width * height];
            self.cursor = (width / 2, height / 2);
        }
    }

    fn apply_keys(&mut self) {
        let keys = std::mem::take(&mut self.pending);
        let (mut x, mut y) = self.cursor;

        if keys.contains(&MachineKey::Left) {
            x = (x + self.width - 1) % self.width;
        }
        if keys.contains(&MachineKey::Right) {
            x = (x + 1) % self.width;
        }
        if keys.contains(&MachineKey::Up) {
            y = (y + self.height - 1) % self.height;
        }
        if keys.contains(&MachineKey::Down) {
            y = (y + 1) % self.height;
        }
        self.cursor = (x, y);

        if keys.contains(&MachineKey::Key1) {
            self.canvas.fill(None);
        }

        let cycle = keys.contains(&MachineKey::Key2) as isize
            - keys.contains(&MachineKey::Key3) as isize;
        if cycle == 0 {
            self.ink_cooldown = 0;
        } else if self.ink_cooldown == 0 {
            self.ink = (self.ink as isize + cycle).rem_euclid(INKS.len() as isize) as usize;
            self.ink_cooldown = INK_REPEAT_FRAMES;
        } else {
            self.ink_cooldown -= 1;
        }

        if keys.contains(&MachineKey::Key0) {
            self.canvas[y * self.width + x] = Some(INKS[self.ink]);
        }
    }

    fn draw(&self, screen: &mut dyn Screen) {
        screen.clear();

        for (i, cell) in self.canvas.iter().enumerate() {
            if let Some(color) = cell {
                let (x, y) = ((i % self.width) as i32, (i / self.width) as i32);
                screen.set_pixel(x, y, color.r, color.g, color.b, color.a);
            }
        }

        // Blinking cross-hair; arms may run off-screen
        if (self.frame / 8) % 2 == 0 {
            let (cx, cy) = (self.cursor.0 as i32, self.cursor.1 as i32);
            let ink = INKS[self.ink];
            for (dx, dy) in [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)] {
                screen.set_pixel(cx + dx, cy + dy, ink.r, ink.g, ink.b, ink.a);
            }
        }

        screen.present();
    }
}

impl Default for DemoEngine {
    fn default() -> Self {
        Self::new(0)
    }
}

impl KeySink for DemoEngine {
    fn on_key_event(&mut self, key: &str) {
        if let Some(machine_key) = machine_key_for(key) {
            self.pending.insert(machine_key);
        }
    }
}

impl Engine for DemoEngine {
    fn is_ready(&self) -> bool {
        self.boot_frames == 0
    }

    fn step(&mut self, screen: &mut dyn Screen) {
        if self.boot_frames > 0 {
            self.boot_frames -= 1;
            return;
        }

        self.resize(screen.size());
        if self.width == 0 || self.height == 0 {
            return;
        }

        self.apply_keys();
        self.draw(screen);
        self.frame += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::FrameCompositor;

    #[test]
    fn test_boot_delay() {
        let mut engine = DemoEngine::new(2);
        let mut screen = FrameCompositor::new(8, 8, 1);

        assert!(!engine.is_ready());
        engine.step(&mut screen);
        assert!(!engine.is_ready());
        engine.step(&mut screen);
        assert!(engine.is_ready());
        assert_eq!(screen.frames_presented(), 0);

        engine.step(&mut screen);
        assert_eq!(screen.frames_presented(), 1);
    }

    #[test]
    fn test_cursor_starts_centered_and_moves() {
        let mut engine = DemoEngine::default();
        let mut screen = FrameCompositor::new(8, 4, 1);

        engine.step(&mut screen);
        assert_eq!(engine.cursor(), (4, 2));

        engine.on_key_event("ArrowRight");
        engine.on_key_event("k");
        engine.step(&mut screen);
        assert_eq!(engine.cursor(), (5, 1));

        // Keys are consumed each step
        engine.step(&mut screen);
        assert_eq!(engine.cursor(), (5, 1));
    }

    #[test]
    fn test_cursor_wraps() {
        let mut engine = DemoEngine::default();
        let mut screen = FrameCompositor::new(2, 2, 1);
        engine.step(&mut screen);
        assert_eq!(engine.cursor(), (1, 1));

        engine.on_key_event("ArrowRight");
        engine.on_key_event("ArrowDown");
        engine.step(&mut screen);
        assert_eq!(engine.cursor(), (0, 0));
    }

    #[test]
    fn test_paint_and_wipe() {
        let mut engine = DemoEngine::default();
        let mut screen = FrameCompositor::new(8, 8, 1);
        engine.step(&mut screen);

        engine.on_key_event("z");
        engine.step(&mut screen);
        assert_eq!(engine.painted(4, 4), Some(Rgba::WHITE));

        engine.on_key_event("x");
        engine.step(&mut screen);
        assert_eq!(engine.painted(4, 4), None);
    }

    #[test]
    fn test_ink_cycles_once_per_press() {
        let mut engine = DemoEngine::default();
        let mut screen = FrameCompositor::new(8, 8, 1);
        engine.step(&mut screen);

        // Held for two frames: only the first frame switches ink
        engine.on_key_event("c");
        engine.step(&mut screen);
        engine.on_key_event("c");
        engine.step(&mut screen);

        engine.on_key_event("0");
        engine.step(&mut screen);
        assert_eq!(engine.painted(4, 4), Some(INKS[1]));

        engine.on_key_event("v");
        engine.step(&mut screen);
        engine.on_key_event("v");
        engine.step(&mut screen);
        engine.on_key_event("v");
        engine.step(&mut screen);
        engine.on_key_event("Enter");
        engine.on_key_event("ArrowUp");
        engine.step(&mut screen);
        assert_eq!(engine.painted(4, 3), Some(INKS[0]));
    }

    #[test]
    fn test_unmapped_symbols_ignored() {
        let mut engine = DemoEngine::default();
        let mut screen = FrameCompositor::new(8, 8, 1);
        engine.step(&mut screen);
        engine.on_key_event("q");
        engine.on_key_event("Escape");
        engine.step(&mut screen);
        assert_eq!(engine.cursor(), (4, 4));
    }
}
