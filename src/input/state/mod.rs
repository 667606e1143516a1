mod core;

pub use core::{DrawingState, StrokeMachine, StrokeSink, Transition};
