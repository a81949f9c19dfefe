//! Polled input state for frame loops.
//!
//! This crate provides:
//! - [`InputSession`]: Double-buffered keyboard/pointer state with per-frame
//!   edge detection
//! - [`SessionOptions`]: Which device signals a session ingests, with
//!   save/load
//! - [`bindings`]: Translation from winit window events into session calls
//! - [`KeyboardState`] / [`PointerState`]: Per-device state containers

pub mod bindings;
pub mod keyboard;
pub mod options;
pub mod pointer;
pub mod session;

pub use keyboard::KeyboardState;
pub use options::SessionOptions;
pub use pointer::{PointerButton, PointerState, Position};
pub use session::InputSession;
