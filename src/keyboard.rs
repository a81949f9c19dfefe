use std::collections::HashMap;

/// Held state for every key code seen during a session.
///
/// Key codes are open-ended strings (`"KeyA"`, `"Digit1"`, ...). A code that
/// has never been reported is simply absent and reads as up. Entries are
/// overwritten in place and never removed.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    keys: HashMap<String, bool>,
}

impl KeyboardState {
    /// Create an empty keyboard state (all keys up).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Unknown codes are accepted and tracked like
    /// any other; there is nothing to validate.
    pub fn set(&mut self, code: &str, is_down: bool) {
        match self.keys.get_mut(code) {
            Some(held) => *held = is_down,
            None => {
                self.keys.insert(code.to_owned(), is_down);
            }
        }
    }

    /// Whether `code` is currently held. Absent codes read as up.
    pub fn is_down(&self, code: &str) -> bool {
        self.keys.get(code).copied().unwrap_or(false)
    }

    /// Whether any tracked code is currently held.
    pub fn any_down(&self) -> bool {
        self.keys.values().any(|&held| held)
    }

    /// Every code seen this session, held or not.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.keys.keys().map(String::as_str)
    }
}
