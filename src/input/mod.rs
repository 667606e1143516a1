//! Input handling and stroke state machine.
//!
//! This module turns raw pointing-device and touch events into a single gesture
//! stream ([`normalize`]) and gates that stream on whether a stroke is active
//! ([`state`]).

pub mod events;
pub mod normalize;
pub mod state;

// Re-export commonly used types at module level
pub use events::{
    Gesture, MouseButton, PointerEvent, Sample, ScreenOffset, TouchEvent, TouchPhase, TouchPoint,
};
pub use normalize::{GestureSource, PointerAdapter, TouchAdapter};
pub use state::{DrawingState, StrokeMachine, StrokeSink, Transition};
