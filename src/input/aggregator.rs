// Input Aggregator - Turns press/release edges into a per-frame held-key relay
//
// The host delivers discrete key transitions whenever they happen. The
// engine instead wants to hear about every held key once per refresh, so
// the aggregator tracks which symbols are down and replays them on `tick`.

use crate::engine::KeySink;
use log::debug;
use std::collections::HashSet;

/// Symbol forwarded when the screen is touched
pub const DEFAULT_TOUCH_SYMBOL: &str = "0";

/// Set of currently held input symbols
///
/// A symbol is present iff its most recent transition was a press.
#[derive(Debug, Clone, Default)]
pub struct HeldKeySet {
    keys: HashSet<String>,
}

impl HeldKeySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a symbol as held; repeated presses are idempotent
    ///
    /// # Returns
    /// true if the symbol was not held before
    pub fn press(&mut self, symbol: &str) -> bool {
        if self.keys.contains(symbol) {
            return false;
        }
        self.keys.insert(symbol.to_string())
    }

    /// Mark a symbol as released; releasing an absent symbol is a no-op
    ///
    /// # Returns
    /// true if the symbol was held
    pub fn release(&mut self, symbol: &str) -> bool {
        self.keys.remove(symbol)
    }

    /// Check whether a symbol is held
    pub fn contains(&self, symbol: &str) -> bool {
        self.keys.contains(symbol)
    }

    /// Iterate over held symbols in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Number of held symbols
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether nothing is held
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Release everything
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

/// Frame-synchronized relay of held keys to the engine
pub struct InputAggregator {
    held: HeldKeySet,
    sink: Option<Box<dyn KeySink>>,
    touch_symbol: String,
}

impl InputAggregator {
    /// Create an aggregator with no sink and the default touch symbol
    pub fn new() -> Self {
        Self::with_touch_symbol(DEFAULT_TOUCH_SYMBOL)
    }

    /// Create an aggregator that maps touches to `touch_symbol`
    pub fn with_touch_symbol(touch_symbol: impl Into<String>) -> Self {
        Self {
            held: HeldKeySet::new(),
            sink: None,
            touch_symbol: touch_symbol.into(),
        }
    }

    /// Register the engine's key sink once the engine is ready
    ///
    /// A later registration replaces the earlier sink.
    pub fn register_sink(&mut self, sink: Box<dyn KeySink>) {
        if self.sink.is_some() {
            debug!("Replacing registered key sink");
        } else {
            debug!("Key sink registered");
        }
        self.sink = Some(sink);
    }

    /// Whether an engine sink is registered
    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    /// Handle a key press
    pub fn on_key_down(&mut self, symbol: &str) {
        self.held.press(symbol);
    }

    /// Handle a key release
    pub fn on_key_up(&mut self, symbol: &str) {
        self.held.release(symbol);
    }

    /// Handle the start of a touch gesture
    ///
    /// Forwards the touch symbol to the engine exactly once, right away.
    /// Touches have no release edge, so nothing is added to the held set.
    /// With no sink registered the touch is dropped.
    pub fn on_touch_start(&mut self) {
        match self.sink.as_mut() {
            Some(sink) => sink.on_key_event(&self.touch_symbol),
            None => debug!("Touch ignored, no key sink registered"),
        }
    }

    /// Relay every held symbol to the engine
    ///
    /// Called once per display refresh. Does nothing until a sink is registered.
    pub fn tick(&mut self) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        for symbol in self.held.iter() {
            sink.on_key_event(symbol);
        }
    }

    /// Release every held symbol (focus-loss reset)
    pub fn release_all(&mut self) {
        if !self.held.is_empty() {
            debug!("Releasing {} held key(s)", self.held.len());
        }
        self.held.clear();
    }

    /// Currently held symbols
    pub fn held(&self) -> &HeldKeySet {
        &self.held
    }

    /// Check whether a symbol is held
    pub fn is_held(&self, symbol: &str) -> bool {
        self.held.contains(symbol)
    }
}

impl Default for InputAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Sink that records every relayed symbol
    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl KeySink for Recorder {
        fn on_key_event(&mut self, key: &str) {
            self.0.borrow_mut().push(key.to_string());
        }
    }

    impl Recorder {
        fn take(&self) -> Vec<String> {
            let mut keys = std::mem::take(&mut *self.0.borrow_mut());
            keys.sort();
            keys
        }
    }

    fn aggregator_with_recorder() -> (InputAggregator, Recorder) {
        let recorder = Recorder::default();
        let mut aggregator = InputAggregator::new();
        aggregator.register_sink(Box::new(recorder.clone()));
        (aggregator, recorder)
    }

    #[test]
    fn test_held_set_press_release() {
        let mut held = HeldKeySet::new();
        assert!(held.press("a"));
        assert!(!held.press("a"));
        assert_eq!(held.len(), 1);
        assert!(held.release("a"));
        assert!(!held.release("a"));
        assert!(held.is_empty());
    }

    #[test]
    fn test_key_down_idempotent() {
        let mut aggregator = InputAggregator::new();
        aggregator.on_key_down("ArrowUp");
        aggregator.on_key_down("ArrowUp");
        assert!(aggregator.is_held("ArrowUp"));
        assert_eq!(aggregator.held().len(), 1);
    }

    #[test]
    fn test_key_up_absent_is_noop() {
        let mut aggregator = InputAggregator::new();
        aggregator.on_key_up("x");
        assert!(aggregator.held().is_empty());
    }

    #[test]
    fn test_tick_without_sink_is_noop() {
        let mut aggregator = InputAggregator::new();
        aggregator.on_key_down("a");
        aggregator.tick();
        assert!(!aggregator.has_sink());
        assert!(aggregator.is_held("a"));
    }

    #[test]
    fn test_tick_relays_each_held_symbol_once() {
        let (mut aggregator, recorder) = aggregator_with_recorder();
        aggregator.on_key_down("A");
        aggregator.on_key_down("b");
        aggregator.on_key_down("A");

        aggregator.tick();
        assert_eq!(recorder.take(), vec!["A".to_string(), "b".to_string()]);

        aggregator.on_key_up("A");
        aggregator.tick();
        assert_eq!(recorder.take(), vec!["b".to_string()]);
    }

    #[test]
    fn test_held_keys_repeat_every_tick() {
        let (mut aggregator, recorder) = aggregator_with_recorder();
        aggregator.on_key_down("ArrowLeft");
        for _ in 0..3 {
            aggregator.tick();
        }
        assert_eq!(recorder.take().len(), 3);
    }

    #[test]
    fn test_touch_forwards_once() {
        let (mut aggregator, recorder) = aggregator_with_recorder();
        aggregator.on_touch_start();
        assert_eq!(recorder.take(), vec!["0".to_string()]);

        aggregator.tick();
        aggregator.tick();
        assert!(recorder.take().is_empty());
        assert!(aggregator.held().is_empty());
    }

    #[test]
    fn test_touch_without_sink_dropped() {
        let mut aggregator = InputAggregator::new();
        aggregator.on_touch_start();

        let recorder = Recorder::default();
        aggregator.register_sink(Box::new(recorder.clone()));
        aggregator.tick();
        assert!(recorder.take().is_empty());
    }

    #[test]
    fn test_custom_touch_symbol() {
        let recorder = Recorder::default();
        let mut aggregator = InputAggregator::with_touch_symbol("Enter");
        aggregator.register_sink(Box::new(recorder.clone()));
        aggregator.on_touch_start();
        assert_eq!(recorder.take(), vec!["Enter".to_string()]);
        // Touches are one-shot and never join the held set
        assert!(!aggregator.is_held("Enter"));
        aggregator.tick();
        assert!(recorder.take().is_empty());
    }

    #[test]
    fn test_release_all() {
        let (mut aggregator, recorder) = aggregator_with_recorder();
        aggregator.on_key_down("a");
        aggregator.on_key_down("b");
        aggregator.release_all();
        aggregator.tick();
        assert!(recorder.take().is_empty());
    }

    #[test]
    fn test_keys_held_before_registration_relay_after() {
        let mut aggregator = InputAggregator::new();
        aggregator.on_key_down("z");
        aggregator.tick();

        let recorder = Recorder::default();
        aggregator.register_sink(Box::new(recorder.clone()));
        aggregator.tick();
        assert_eq!(recorder.take(), vec!["z".to_string()]);
    }
}
