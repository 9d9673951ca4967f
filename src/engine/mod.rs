// Engine boundary - The contract between the front-end and the emulated machine
//
// The engine drives the screen through `Screen` and receives held keys
// through `KeySink`. Everything behind these traits (instruction execution,
// memory, timers) belongs to the engine.

pub mod demo;
pub mod keymap;

use std::cell::RefCell;
use std::rc::Rc;

pub use demo::DemoEngine;
pub use keymap::{machine_key_for, MachineKey};

/// Drawing entry points the engine calls into
pub trait Screen {
    /// Write one pixel; out-of-range coordinates are ignored
    fn set_pixel(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8, a: u8);

    /// Show the current buffer contents
    fn present(&mut self);

    /// Zero the buffer
    fn clear(&mut self);

    /// Logical `(width, height)`
    fn size(&self) -> (usize, usize);
}

/// Receiver of relayed key symbols
pub trait KeySink {
    /// Called once per refresh for every symbol currently held
    fn on_key_event(&mut self, key: &str);
}

/// An emulated machine driven by the window's refresh loop
pub trait Engine: KeySink {
    /// Whether the engine has finished booting and can accept keys
    fn is_ready(&self) -> bool {
        true
    }

    /// Advance the engine by one refresh worth of work
    fn step(&mut self, screen: &mut dyn Screen);
}

/// Shared handle to an engine
///
/// The window steps the engine while the input aggregator holds a clone as
/// its key sink. Both live on the event loop thread and never borrow at the
/// same time.
pub struct SharedEngine(Rc<RefCell<dyn Engine>>);

impl SharedEngine {
    /// Wrap an engine for shared use
    pub fn new<E: Engine + 'static>(engine: E) -> Self {
        Self(Rc::new(RefCell::new(engine)))
    }

    /// See [`Engine::is_ready`]
    pub fn is_ready(&self) -> bool {
        self.0.borrow().is_ready()
    }

    /// See [`Engine::step`]
    pub fn step(&self, screen: &mut dyn Screen) {
        self.0.borrow_mut().step(screen);
    }

    /// A key sink forwarding into this engine
    pub fn sink(&self) -> Box<dyn KeySink> {
        Box::new(SharedEngine(Rc::clone(&self.0)))
    }
}

impl Clone for SharedEngine {
    fn clone(&self) -> Self {
        SharedEngine(Rc::clone(&self.0))
    }
}

impl KeySink for SharedEngine {
    fn on_key_event(&mut self, key: &str) {
        self.0.borrow_mut().on_key_event(key);
    }
}
