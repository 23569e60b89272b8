//! WebAssembly bindings for the word-grid generator
//!
//! Exposes board generation and best-of search to a JavaScript host, which
//! owns the word list loading and all rendering.

use std::time::Duration;
use wasm_bindgen::prelude::*;
use wordgrid_core::{Clock, Lexicon};

mod session;


pub use session::{BoardView, CheckView, SearchView, Session};

// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Wall clock read through `Date.now()`
struct JsClock {
    start_ms: f64,
}

impl JsClock {
    fn start() -> Self {
        Self {
            start_ms: js_sys::Date::now(),
        }
    }
}

impl Clock for JsClock {
    fn elapsed(&self) -> Duration {
        Duration::from_secs_f64(((js_sys::Date::now() - self.start_ms) / 1000.0).max(0.0))
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Word-grid generator bound to one word list
#[wasm_bindgen]
pub struct WordGrid {
    session: Session,
}

#[wasm_bindgen]
impl WordGrid {
    /// Create a generator from a newline-separated word list
    #[wasm_bindgen(constructor)]
    pub fn new(words: &str) -> Result<WordGrid, JsValue> {
        let lexicon = Lexicon::parse(words).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WordGrid {
            session: Session::new(lexicon),
        })
    }

    /// Create a generator from an array of words
    #[wasm_bindgen(js_name = fromList)]
    pub fn from_list(words: Vec<String>) -> Result<WordGrid, JsValue> {
        let lexicon = Lexicon::from_words(&words).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WordGrid {
            session: Session::new(lexicon),
        })
    }

    /// Number of distinct words
    #[wasm_bindgen(getter)]
    pub fn words(&self) -> usize {
        self.session.lexicon().len()
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.session.config().size
    }

    /// Change the board size (at least 4) for later boards
    #[wasm_bindgen(js_name = setSize)]
    pub fn set_size(&mut self, size: usize) -> Result<(), JsValue> {
        self.session.set_size(size).map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> usize {
        self.session.config().cycles
    }

    #[wasm_bindgen(js_name = setCycles)]
    pub fn set_cycles(&mut self, cycles: usize) {
        self.session.set_cycles(cycles);
    }

    /// Case-insensitive word lookup
    #[wasm_bindgen(js_name = isWord)]
    pub fn is_word(&self, word: &str) -> bool {
        self.session.lexicon().contains(word)
    }

    /// Generate one board: `{ size, rows, density, placements }`
    #[wasm_bindgen]
    pub fn generate(&self, seed: Option<u64>) -> Result<JsValue, JsValue> {
        let view = self.session.generate(seed).map_err(|e| JsValue::from_str(&e))?;
        to_js(&view)
    }

    /// Generate one board as a JSON string
    #[wasm_bindgen(js_name = generateJson)]
    pub fn generate_json(&self, seed: Option<u64>) -> Result<String, JsValue> {
        let view = self.session.generate(seed).map_err(|e| JsValue::from_str(&e))?;
        serde_json::to_string(&view).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Keep the densest board generated within `budget_ms`:
    /// `{ best, generated }`, with `best` null when nothing finished
    #[wasm_bindgen(js_name = bestOf)]
    pub fn best_of(&self, budget_ms: f64, seed: Option<u64>) -> Result<JsValue, JsValue> {
        let view = self
            .session
            .best_of(budget_ms, seed, &JsClock::start())
            .map_err(|e| JsValue::from_str(&e))?;
        to_js(&view)
    }

    /// Check rows (`.` for empty) against the word list:
    /// `{ valid, invalid_runs }`
    #[wasm_bindgen]
    pub fn check(&self, rows: Vec<String>) -> Result<JsValue, JsValue> {
        let view = self.session.check(&rows).map_err(|e| JsValue::from_str(&e))?;
        to_js(&view)
    }
}
