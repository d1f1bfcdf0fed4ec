//! Keypad state for the calculator front end.

use calc_brain::Brain;
use log::warn;

use super::key::Key;

/// What the display shows when the brain has no result.
const BLANK: &str = "0";

/// Front end state: the display, the history label and the entry flag.
#[derive(Debug)]
pub struct App {
    /// The brain doing the arithmetic.
    brain: Brain,
    /// Text in the main display.
    display: String,
    /// Text in the history label.
    history: String,
    /// Whether the user is in the middle of typing a number.
    typing: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Brain::new())
    }
}

impl App {
    /// Create an app around a brain.
    pub fn new(brain: Brain) -> Self {
        Self {
            brain,
            display: BLANK.to_string(),
            history: String::new(),
            typing: false,
        }
    }

    /// Text in the main display.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Text in the history label.
    pub fn history(&self) -> &str {
        &self.history
    }

    /// Whether a number is being typed.
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// The brain behind the keypad.
    pub fn brain(&self) -> &Brain {
        &self.brain
    }

    /// Press every key in a whitespace-separated line.
    pub fn press_line(&mut self, line: &str) {
        for token in line.split_whitespace() {
            self.press(Key::parse(token));
        }
    }

    /// Press a single key.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digits(digits) => self.append_digits(&digits),
            Key::Enter => self.enter(),
            Key::Clear => self.clear(),
            Key::Operation(symbol) => self.operate(&symbol),
        }
    }

    fn append_digits(&mut self, digits: &str) {
        if !self.typing {
            self.display.clear();
            self.typing = true;
        }
        for c in digits.chars() {
            if c == '.' && self.display.contains('.') {
                continue;
            }
            self.display.push(c);
        }
    }

    fn enter(&mut self) {
        self.typing = false;
        let result = match self.display.parse::<f64>() {
            Ok(operand) => self.brain.push_operand(operand),
            Err(e) => {
                warn!("cannot enter '{}': {}", self.display, e);
                self.brain.evaluate()
            }
        };
        self.show(result);
    }

    fn operate(&mut self, symbol: &str) {
        if self.typing {
            self.enter();
        }
        let result = self.brain.perform_operation(symbol);
        self.show(result);
        self.history = self.brain.history_text().to_string();
    }

    fn clear(&mut self) {
        self.brain.clear();
        self.display = BLANK.to_string();
        self.history.clear();
        self.typing = false;
    }

    fn show(&mut self, result: Option<f64>) {
        self.display = result.map_or_else(|| BLANK.to_string(), Brain::render);
    }
}
