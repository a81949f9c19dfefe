use crate::keyboard::KeyboardState;
use crate::options::SessionOptions;
use crate::pointer::{PointerButton, PointerState, Position};
use tracing::debug;

/// Everything the edge queries compare across a frame boundary.
#[derive(Debug, Clone, Default)]
struct FrameState {
    keyboard: KeyboardState,
    pointer: PointerState,
}

/// Double-buffered input state for a frame loop.
///
/// Events mutate the current state as they arrive from the host; once per
/// frame the host calls [`update`](Self::update), which snapshots current
/// into previous. Edge queries (`*_pressed` / `*_released`) compare the two,
/// so they report events applied since the most recent `update` call.
///
/// Constructing the session is the only initialization step: hosts own it
/// wherever their frame loop lives, and every operation is available from
/// the moment it exists. All access is `&self`/`&mut self` on one thread; a
/// host that delivers events from another thread must add its own lock
/// around the whole session to keep the snapshot consistent.
pub struct InputSession {
    options: SessionOptions,
    current: FrameState,
    previous: FrameState,
}

impl InputSession {
    /// Create a session with the given options. All state starts up/zero.
    pub fn new(options: SessionOptions) -> Self {
        debug!(?options, "input session created");
        Self {
            options,
            current: FrameState::default(),
            previous: FrameState::default(),
        }
    }

    /// The options the session was created with.
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Current keyboard state, read-only.
    pub fn keyboard(&self) -> &KeyboardState {
        &self.current.keyboard
    }

    /// Current pointer state, read-only.
    pub fn pointer(&self) -> &PointerState {
        &self.current.pointer
    }

    // --- ingestion --------------------------------------------------------
    //
    // The apply calls mutate only the current state, never the snapshot.
    // There is no queuing: the last write before a frame boundary wins, so a
    // press and release that both land between two updates cancel out.

    /// Record a key transition. No validation of `code`; unknown codes are
    /// tracked like any other. No-op when keyboard tracking is disabled.
    pub fn apply_key_event(&mut self, code: &str, is_down: bool) {
        if !self.options.track_keyboard {
            return;
        }
        self.current.keyboard.set(code, is_down);
    }

    /// Record a pointer button transition. No-op when mouse tracking is
    /// disabled.
    pub fn apply_button_event(&mut self, button: PointerButton, is_down: bool) {
        if !self.options.track_mouse {
            return;
        }
        self.current.pointer.set_button(button, is_down);
    }

    /// Record the pointer position as absolute coordinates, not deltas.
    /// No-op when mouse tracking is disabled.
    pub fn apply_move_event(&mut self, x: f64, y: f64) {
        if !self.options.track_mouse {
            return;
        }
        self.current.pointer.set_position(x, y);
    }

    /// Record a wheel tick. Only the sign of `delta` is kept. No-op when
    /// wheel tracking is disabled.
    pub fn apply_wheel_event(&mut self, delta: f64) {
        if !self.options.track_wheel {
            return;
        }
        self.current.pointer.set_wheel_tick(delta);
    }

    // --- frame hook -------------------------------------------------------

    /// Close the frame. Call exactly once per logical frame, after the
    /// frame's queries are done.
    ///
    /// The previous state becomes a value copy of the current one, so later
    /// events never change it retroactively, and the wheel accumulator is
    /// cleared. Calling this twice with no events in between is safe: all
    /// edge and wheel queries then read false.
    pub fn update(&mut self) {
        self.previous = self.current.clone();
        self.current.pointer.reset_wheel();
    }

    // --- keyboard queries ---------------------------------------------------

    /// Whether `code` is currently held.
    pub fn key_down(&self, code: &str) -> bool {
        self.current.keyboard.is_down(code)
    }

    /// Rising edge: `code` is down now and was up (or never seen) at the
    /// last snapshot. The first down-event for a new code always reads as
    /// pressed.
    pub fn key_pressed(&self, code: &str) -> bool {
        self.current.keyboard.is_down(code) && !self.previous.keyboard.is_down(code)
    }

    /// Falling edge: `code` is up now and was down at the last snapshot.
    pub fn key_released(&self, code: &str) -> bool {
        !self.current.keyboard.is_down(code) && self.previous.keyboard.is_down(code)
    }

    /// Whether any key is currently held.
    pub fn any_key_down(&self) -> bool {
        self.current.keyboard.any_down()
    }

    /// Whether any key has a rising edge this frame.
    pub fn any_key_pressed(&self) -> bool {
        // current's code set is a superset of previous's, so iterating it
        // covers every code either side has seen
        self.current.keyboard.codes().any(|code| self.key_pressed(code))
    }

    /// Whether any key has a falling edge this frame.
    pub fn any_key_released(&self) -> bool {
        self.current.keyboard.codes().any(|code| self.key_released(code))
    }

    // --- pointer queries ----------------------------------------------------

    /// Whether `button` is currently held.
    pub fn button_down(&self, button: PointerButton) -> bool {
        self.current.pointer.is_down(button)
    }

    /// Rising edge for `button`.
    pub fn button_pressed(&self, button: PointerButton) -> bool {
        self.current.pointer.is_down(button) && !self.previous.pointer.is_down(button)
    }

    /// Falling edge for `button`.
    pub fn button_released(&self, button: PointerButton) -> bool {
        !self.current.pointer.is_down(button) && self.previous.pointer.is_down(button)
    }

    /// Whether any pointer button is currently held.
    pub fn any_button_down(&self) -> bool {
        self.current.pointer.any_down()
    }

    /// Whether any pointer button has a rising edge this frame.
    pub fn any_button_pressed(&self) -> bool {
        self.current
            .pointer
            .buttons()
            .any(|button| self.button_pressed(button))
    }

    /// Whether any pointer button has a falling edge this frame.
    pub fn any_button_released(&self) -> bool {
        self.current
            .pointer
            .buttons()
            .any(|button| self.button_released(button))
    }

    /// Whether the most recent wheel tick since the last frame boundary
    /// scrolled up. Multiple ticks in one frame collapse to the last one.
    pub fn wheel_up(&self) -> bool {
        self.current.pointer.wheel() > 0
    }

    /// Whether the most recent wheel tick since the last frame boundary
    /// scrolled down.
    pub fn wheel_down(&self) -> bool {
        self.current.pointer.wheel() < 0
    }

    /// Last reported pointer coordinates, by value. Unchanged by
    /// [`update`](Self::update).
    pub fn pointer_position(&self) -> Position {
        self.current.pointer.position()
    }
}
