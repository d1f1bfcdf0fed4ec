//! Keypad keys.

/// A single key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// One or more digit / decimal point keys.
    Digits(String),
    /// Push the displayed number.
    Enter,
    /// Clear everything.
    Clear,
    /// Any operation key, by brain symbol.
    Operation(String),
}

impl Key {
    /// Parse one whitespace-free token.
    ///
    /// ASCII spellings are accepted for keys that are awkward to type:
    /// `*` `/` `-` `sqrt` `pi`.
    pub fn parse(token: &str) -> Self {
        if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Key::Digits(token.to_string());
        }
        match token {
            "⏎" | "↵" | "enter" | "=" => Key::Enter,
            "C" | "clear" => Key::Clear,
            "*" => Key::Operation("×".into()),
            "/" => Key::Operation("÷".into()),
            "-" => Key::Operation("−".into()),
            "sqrt" => Key::Operation("√".into()),
            "pi" => Key::Operation("π".into()),
            other => Key::Operation(other.to_string()),
        }
    }
}
