// Common test utilities for the front-end integration tests
//
// Provides a key sink that records what the aggregator relays and an
// engine that echoes relayed keys back as pixels.

#![allow(dead_code)]

use screen_emulator::{Engine, KeySink, Screen};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key sink recording every relayed symbol
///
/// Clones share the same log, so a test can keep one clone while the
/// aggregator owns another.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the recorded events
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Drain the recorded events as symbol -> call count
    pub fn take_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for symbol in self.take() {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        counts
    }
}

impl KeySink for RecordingSink {
    fn on_key_event(&mut self, key: &str) {
        self.events.borrow_mut().push(key.to_string());
    }
}

/// Engine that lights pixel (0, 0) while any key was relayed this frame
pub struct EchoEngine {
    pub sink: RecordingSink,
    pub ready_after: u32,
    pub steps: u32,
    lit: bool,
}

impl EchoEngine {
    pub fn new(ready_after: u32) -> Self {
        Self {
            sink: RecordingSink::new(),
            ready_after,
            steps: 0,
            lit: false,
        }
    }
}

impl KeySink for EchoEngine {
    fn on_key_event(&mut self, key: &str) {
        self.lit = true;
        self.sink.on_key_event(key);
    }
}

impl Engine for EchoEngine {
    fn is_ready(&self) -> bool {
        self.steps >= self.ready_after
    }

    fn step(&mut self, screen: &mut dyn Screen) {
        self.steps += 1;
        screen.clear();
        if std::mem::take(&mut self.lit) {
            screen.set_pixel(0, 0, 255, 255, 255, 255);
        }
        screen.present();
    }
}
