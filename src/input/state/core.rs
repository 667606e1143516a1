//! Stroke state machine.

use crate::input::events::{Gesture, Sample};
use log::{debug, trace};

/// Receiver of the path operations produced by the state machine.
///
/// The raster renderer is the production sink; tests substitute a recorder.
pub trait StrokeSink {
    /// Starts a new path at `at` without drawing anything.
    fn begin_path(&mut self, at: Sample);
    /// Draws a segment from the current pen position to `to` and moves the pen there.
    fn line_to(&mut self, to: Sample);
    /// Ends the current path. Has no effect on pixels.
    fn close_path(&mut self);
}

/// Current drawing mode.
///
/// `Idle` is both the initial and the resting state; the machine cycles between
/// the two states for the lifetime of the pad.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DrawingState {
    /// Not drawing - extends are ignored
    #[default]
    Idle,
    /// A gesture is in progress
    Drawing {
        /// Where the gesture began
        start: Sample,
        /// Most recent sample forwarded to the sink
        last: Sample,
        /// Number of segments drawn so far
        segments: usize,
    },
}

/// What a gesture did to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Idle -> Drawing
    Began,
    /// Drawing -> Drawing with one more segment
    Extended,
    /// Drawing -> Idle
    Ended,
    /// No state change and no sink call
    Ignored,
}

/// Gates gestures on whether a stroke is active and forwards them to a sink.
#[derive(Debug, Default)]
pub struct StrokeMachine {
    state: DrawingState,
}

impl StrokeMachine {
    /// Creates an idle machine.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    /// Returns true while a stroke is active.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// Forgets any active stroke without calling a sink.
    ///
    /// Used when the surface goes away underneath an in-progress gesture.
    pub fn reset(&mut self) {
        self.state = DrawingState::Idle;
    }

    /// Applies one gesture, calling into `sink` for every accepted transition.
    ///
    /// | From    | Gesture | To      | Sink call    |
    /// |---------|---------|---------|--------------|
    /// | Idle    | Begin   | Drawing | `begin_path` |
    /// | Drawing | Extend  | Drawing | `line_to`    |
    /// | Drawing | End     | Idle    | `close_path` |
    ///
    /// Everything else is ignored: an extend or end while idle (stray motion before
    /// the first press, the pointer leaving with no stroke) and a begin while already
    /// drawing (a second touch contact landing mid-stroke).
    pub fn handle<S: StrokeSink + ?Sized>(&mut self, gesture: Gesture, sink: &mut S) -> Transition {
        match (&mut self.state, gesture) {
            (DrawingState::Idle, Gesture::Begin(at)) => {
                debug!("Stroke began at ({:.1}, {:.1})", at.x, at.y);
                sink.begin_path(at);
                self.state = DrawingState::Drawing {
                    start: at,
                    last: at,
                    segments: 0,
                };
                Transition::Began
            }
            (DrawingState::Drawing { last, segments, .. }, Gesture::Extend(to)) => {
                trace!(
                    "Segment ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                    last.x, last.y, to.x, to.y
                );
                sink.line_to(to);
                *last = to;
                *segments += 1;
                Transition::Extended
            }
            (DrawingState::Drawing { start, segments, .. }, Gesture::End) => {
                debug!(
                    "Stroke from ({:.1}, {:.1}) ended after {} segment(s)",
                    start.x, start.y, segments
                );
                sink.close_path();
                self.state = DrawingState::Idle;
                Transition::Ended
            }
            (DrawingState::Drawing { .. }, Gesture::Begin(at)) => {
                trace!(
                    "Ignoring begin at ({:.1}, {:.1}) during active stroke",
                    at.x, at.y
                );
                Transition::Ignored
            }
            (DrawingState::Idle, Gesture::Extend(_) | Gesture::End) => Transition::Ignored,
        }
    }
}
