use std::collections::HashMap;

/// Pointer button identifiers, numbered the way hosts report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button (usually left), index 0.
    Primary,
    /// Middle button (usually the wheel), index 1.
    Middle,
    /// Secondary button (usually right), index 2.
    Secondary,
    /// Any other button, by raw index.
    Other(u16),
}

impl PointerButton {
    /// Raw button index.
    pub fn index(self) -> u16 {
        match self {
            PointerButton::Primary => 0,
            PointerButton::Middle => 1,
            PointerButton::Secondary => 2,
            PointerButton::Other(index) => index,
        }
    }

    /// Button for a raw index.
    pub fn from_index(index: u16) -> Self {
        match index {
            0 => PointerButton::Primary,
            1 => PointerButton::Middle,
            2 => PointerButton::Secondary,
            index => PointerButton::Other(index),
        }
    }
}

/// Last known pointer coordinates in the tracked surface's local space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Pointer device state: button held flags, position, and the wheel tick.
///
/// Buttons behave like keyboard codes: absent means up, entries are only
/// ever overwritten. The wheel field is an edge-triggered accumulator
/// holding the sign of the most recent tick, not a level signal; the frame
/// snapshot clears it once per frame.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    buttons: HashMap<PointerButton, bool>,
    position: Position,
    wheel: i32,
}

impl PointerState {
    /// Create an empty pointer state (all buttons up, position at origin).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a button transition.
    pub fn set_button(&mut self, button: PointerButton, is_down: bool) {
        self.buttons.insert(button, is_down);
    }

    /// Whether `button` is currently held. Absent buttons read as up.
    pub fn is_down(&self, button: PointerButton) -> bool {
        self.buttons.get(&button).copied().unwrap_or(false)
    }

    /// Whether any tracked button is currently held.
    pub fn any_down(&self) -> bool {
        self.buttons.values().any(|&held| held)
    }

    /// Every button seen this session, held or not.
    pub fn buttons(&self) -> impl Iterator<Item = PointerButton> + '_ {
        self.buttons.keys().copied()
    }

    /// Overwrite the position with absolute coordinates.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position = Position { x, y };
    }

    /// Last reported position, by value.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Record a wheel tick. Only the sign of `delta` is kept; magnitude is
    /// discarded. Zero deltas are ignored.
    pub fn set_wheel_tick(&mut self, delta: f64) {
        if delta > 0.0 {
            self.wheel = 1;
        } else if delta < 0.0 {
            self.wheel = -1;
        }
    }

    /// Sign of the most recent wheel tick since the last reset (+1, -1, 0).
    pub fn wheel(&self) -> i32 {
        self.wheel
    }

    /// Clear the wheel accumulator. Called once per frame by the snapshot.
    pub fn reset_wheel(&mut self) {
        self.wheel = 0;
    }
}
