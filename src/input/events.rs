//! Raw input events delivered by the host and the normalized gesture stream.

/// Mouse button identification. Every button draws the same stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointing-device event. Coordinates are already surface-relative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A button went down over the surface
    Press { button: MouseButton, x: f64, y: f64 },
    /// The pointer moved over the surface (with or without a button held)
    Motion { x: f64, y: f64 },
    /// A button was released
    Release { button: MouseButton, x: f64, y: f64 },
    /// The pointer left the surface bounds
    Leave,
}

/// One contact point of a touch event, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub screen_x: f64,
    pub screen_y: f64,
}

/// Phase of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    /// The host aborted the touch sequence (treated like an end)
    Cancel,
}

/// Touch event carrying every contact currently on the surface.
///
/// `touches` is ordered the way the host reports it; the first entry is the
/// contact that drives the stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub touches: Vec<TouchPoint>,
}

impl TouchEvent {
    /// Creates a touch event from a phase and its active contacts.
    pub fn new(phase: TouchPhase, touches: Vec<TouchPoint>) -> Self {
        Self { phase, touches }
    }

    /// The contact that drives the stroke, if any.
    pub fn primary(&self) -> Option<&TouchPoint> {
        self.touches.first()
    }
}

/// On-screen position of the surface's top-left corner.
///
/// Touch contacts arrive in screen coordinates and are translated by this offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenOffset {
    pub left: f64,
    pub top: f64,
}

impl ScreenOffset {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// A coordinate sample in surface-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Input-source-agnostic gesture boundary or extension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Contact went down at the sample
    Begin(Sample),
    /// Contact moved to the sample
    Extend(Sample),
    /// Contact lifted, was cancelled, or left the surface
    End,
}
