//! Adapters turning device and touch events into [`Gesture`]s.
//!
//! Each input modality gets its own adapter implementing [`GestureSource`], so the
//! stroke state machine only ever sees the common gesture type. Adapters are pure
//! coordinate transforms plus event classification: no filtering, no smoothing,
//! and no memory of previous events.

use super::events::{Gesture, PointerEvent, Sample, ScreenOffset, TouchEvent, TouchPhase};

/// Converts one kind of raw input event into gestures.
pub trait GestureSource {
    /// Raw event type delivered by the host.
    type Event;

    /// Classifies `event`, returning `None` for events with no gesture meaning.
    fn to_gesture(&self, event: &Self::Event) -> Option<Gesture>;
}

/// Adapter for pointing devices. Any button press begins a stroke and any
/// release ends it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerAdapter;

impl GestureSource for PointerAdapter {
    type Event = PointerEvent;

    fn to_gesture(&self, event: &PointerEvent) -> Option<Gesture> {
        match *event {
            PointerEvent::Press { x, y, .. } => Some(Gesture::Begin(Sample::new(x, y))),
            PointerEvent::Motion { x, y } => Some(Gesture::Extend(Sample::new(x, y))),
            PointerEvent::Release { .. } | PointerEvent::Leave => Some(Gesture::End),
        }
    }
}

/// Adapter for touch screens.
///
/// Only the first contact is tracked; its screen position is shifted by the
/// surface's on-screen offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchAdapter {
    /// Current on-screen position of the surface
    pub offset: ScreenOffset,
}

impl TouchAdapter {
    pub fn new(offset: ScreenOffset) -> Self {
        Self { offset }
    }

    fn primary_sample(&self, event: &TouchEvent) -> Option<Sample> {
        event.primary().map(|touch| {
            Sample::new(
                touch.screen_x - self.offset.left,
                touch.screen_y - self.offset.top,
            )
        })
    }
}

impl GestureSource for TouchAdapter {
    type Event = TouchEvent;

    fn to_gesture(&self, event: &TouchEvent) -> Option<Gesture> {
        match event.phase {
            TouchPhase::Start => self.primary_sample(event).map(Gesture::Begin),
            TouchPhase::Move => self.primary_sample(event).map(Gesture::Extend),
            TouchPhase::End | TouchPhase::Cancel => Some(Gesture::End),
        }
    }
}
