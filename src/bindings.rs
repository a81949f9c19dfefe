//! Translation from winit window events into session ingestion calls.
//!
//! The session itself has no dependency on any event-dispatch mechanism;
//! its apply calls are plain methods. This module is the concrete host
//! adapter for winit: feed every [`WindowEvent`] through
//! [`route_window_event`] and the session sees key, button, move and wheel
//! signals in its own identifier space.

use crate::pointer::PointerButton;
use crate::session::InputSession;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Route a window event into the session. Events the session does not
/// model (focus, resize, IME, ...) are ignored.
pub fn route_window_event(session: &mut InputSession, event: &WindowEvent) {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            // OS auto-repeat re-asserts a level that is already set
            if event.repeat {
                return;
            }
            if let PhysicalKey::Code(code) = event.physical_key {
                session.apply_key_event(&key_code_name(code), is_pressed(event.state));
            }
        }
        WindowEvent::MouseInput { state, button, .. } => {
            session.apply_button_event(pointer_button(*button), is_pressed(*state));
        }
        WindowEvent::CursorMoved { position, .. } => {
            session.apply_move_event(position.x, position.y);
        }
        WindowEvent::MouseWheel { delta, .. } => {
            session.apply_wheel_event(vertical_delta(*delta));
        }
        _ => {}
    }
}

/// Name of a physical key in DOM code style (`KeyA`, `Digit1`, `ArrowLeft`).
pub fn key_code_name(code: KeyCode) -> String {
    format!("{code:?}")
}

/// Map winit's button identifiers onto the session's index space:
/// primary = 0, middle = 1, secondary = 2, navigation buttons above that.
pub fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Back => PointerButton::Other(3),
        MouseButton::Forward => PointerButton::Other(4),
        MouseButton::Other(index) => PointerButton::Other(index),
    }
}

fn is_pressed(state: ElementState) -> bool {
    state == ElementState::Pressed
}

/// Vertical scroll amount with sign preserved. The session keeps only the
/// sign, so line and pixel deltas need no unit conversion.
fn vertical_delta(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    }
}
