//! The sketch pad component: surface lifecycle plus input dispatch.
//!
//! A [`SketchPad`] starts unmounted. Until [`SketchPad::mount`] succeeds there is
//! no surface, and every input event or clear request is dropped without touching
//! the stroke state.

use crate::config::{Background, Config};
use crate::draw::{LineStyle, Renderer, SurfaceSnapshot};
use crate::error::SketchError;
use crate::input::{
    DrawingState, Gesture, GestureSource, PointerAdapter, PointerEvent, ScreenOffset,
    StrokeMachine, TouchAdapter, TouchEvent, Transition,
};
use crate::util::Rect;
use log::{debug, info};

/// Everything needed to allocate the surface at mount time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadConfig {
    pub width: i32,
    pub height: i32,
    pub background: Background,
    pub style: LineStyle,
}

impl Default for PadConfig {
    /// 340x200 transparent surface with a 2px round black pen.
    fn default() -> Self {
        Self {
            width: 340,
            height: 200,
            background: Background::Transparent,
            style: LineStyle::default(),
        }
    }
}

impl From<&Config> for PadConfig {
    fn from(config: &Config) -> Self {
        Self {
            width: config.surface.width,
            height: config.surface.height,
            background: config.surface.background,
            style: LineStyle::from(&config.stroke),
        }
    }
}

/// Freehand sketch pad accepting mouse and touch input.
pub struct SketchPad {
    config: PadConfig,
    renderer: Option<Renderer>,
    machine: StrokeMachine,
    pointer: PointerAdapter,
    touch: TouchAdapter,
}

impl SketchPad {
    /// Creates an unmounted pad.
    pub fn new(config: PadConfig) -> Self {
        Self {
            config,
            renderer: None,
            machine: StrokeMachine::new(),
            pointer: PointerAdapter,
            touch: TouchAdapter::default(),
        }
    }

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    /// Allocates the surface. Mounting an already mounted pad keeps its drawing.
    pub fn mount(&mut self) -> Result<(), SketchError> {
        if self.renderer.is_some() {
            debug!("Sketch pad already mounted");
            return Ok(());
        }

        let renderer = Renderer::new(
            self.config.width,
            self.config.height,
            self.config.style,
            self.config.background,
        )?;
        self.renderer = Some(renderer);
        info!(
            "Sketch pad mounted ({}x{})",
            self.config.width, self.config.height
        );
        Ok(())
    }

    /// Drops the surface and any stroke in progress.
    pub fn unmount(&mut self) {
        if self.renderer.take().is_some() {
            self.machine.reset();
            info!("Sketch pad unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.renderer.is_some()
    }

    /// Returns true while a stroke is active.
    pub fn is_drawing(&self) -> bool {
        self.machine.is_drawing()
    }

    pub fn drawing_state(&self) -> &DrawingState {
        self.machine.state()
    }

    /// Updates the on-screen position of the surface used to translate touches.
    pub fn set_screen_offset(&mut self, offset: ScreenOffset) {
        self.touch.offset = offset;
    }

    pub fn screen_offset(&self) -> ScreenOffset {
        self.touch.offset
    }

    /// Feeds a pointing-device event.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Transition {
        match self.pointer.to_gesture(event) {
            Some(gesture) => self.handle_gesture(gesture),
            None => Transition::Ignored,
        }
    }

    /// Feeds a touch event.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> Transition {
        match self.touch.to_gesture(event) {
            Some(gesture) => self.handle_gesture(gesture),
            None => Transition::Ignored,
        }
    }

    /// Feeds an already normalized gesture.
    pub fn handle_gesture(&mut self, gesture: Gesture) -> Transition {
        let Some(renderer) = self.renderer.as_mut() else {
            debug!("Surface not ready; dropping {:?}", gesture);
            return Transition::Ignored;
        };
        self.machine.handle(gesture, renderer)
    }

    /// User "clear" action: erases the surface without interrupting a stroke.
    pub fn clear(&mut self) {
        match self.renderer.as_mut() {
            Some(renderer) => {
                renderer.clear();
                debug!("Surface cleared");
            }
            None => debug!("Surface not ready; ignoring clear"),
        }
    }

    pub fn renderer(&self) -> Option<&Renderer> {
        self.renderer.as_ref()
    }

    pub fn renderer_mut(&mut self) -> Option<&mut Renderer> {
        self.renderer.as_mut()
    }

    /// Copies the current pixels.
    pub fn snapshot(&mut self) -> Result<SurfaceSnapshot, SketchError> {
        self.renderer
            .as_mut()
            .ok_or(SketchError::NotMounted)?
            .snapshot()
    }

    /// Drains the regions the host must repaint; empty when unmounted.
    pub fn take_damage(&mut self) -> Vec<Rect> {
        self.renderer
            .as_mut()
            .map(Renderer::take_damage)
            .unwrap_or_default()
    }
}

impl Default for SketchPad {
    fn default() -> Self {
        Self::new(PadConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{MouseButton, TouchPhase, TouchPoint};

    fn mounted_pad() -> SketchPad {
        let mut pad = SketchPad::default();
        pad.mount().unwrap();
        pad
    }

    fn press(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Press {
            button: MouseButton::Left,
            x,
            y,
        }
    }

    fn motion(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Motion { x, y }
    }

    fn release(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Release {
            button: MouseButton::Left,
            x,
            y,
        }
    }

    fn touch(phase: TouchPhase, points: &[(f64, f64)]) -> TouchEvent {
        TouchEvent::new(
            phase,
            points
                .iter()
                .map(|&(x, y)| TouchPoint {
                    screen_x: x,
                    screen_y: y,
                })
                .collect(),
        )
    }

    #[test]
    fn fresh_pad_is_blank_and_idle() {
        let mut pad = mounted_pad();
        assert!(!pad.is_drawing());
        assert!(pad.snapshot().unwrap().is_blank());
    }

    #[test]
    fn events_before_mount_are_dropped() {
        let mut pad = SketchPad::default();
        assert_eq!(pad.handle_pointer(&press(10.0, 10.0)), Transition::Ignored);
        assert!(!pad.is_drawing());
        assert_eq!(pad.handle_pointer(&motion(20.0, 20.0)), Transition::Ignored);
        pad.clear();
        assert!(matches!(pad.snapshot(), Err(SketchError::NotMounted)));
        assert!(pad.take_damage().is_empty());

        pad.mount().unwrap();
        assert_eq!(pad.handle_pointer(&motion(30.0, 30.0)), Transition::Ignored);
        assert!(pad.snapshot().unwrap().is_blank());
    }

    #[test]
    fn device_stroke_is_visible_before_release() {
        let mut pad = mounted_pad();
        assert_eq!(pad.handle_pointer(&press(20.0, 50.0)), Transition::Began);
        assert_eq!(pad.handle_pointer(&motion(120.0, 50.0)), Transition::Extended);

        let snapshot = pad.snapshot().unwrap();
        assert!(snapshot.has_ink_near(70, 50, 1));
        assert!(pad.is_drawing());

        assert_eq!(pad.handle_pointer(&release(120.0, 50.0)), Transition::Ended);
        assert_eq!(pad.snapshot().unwrap(), snapshot);
    }

    #[test]
    fn secondary_button_drag_draws_until_release() {
        let mut pad = mounted_pad();
        let right = |x, y| PointerEvent::Press {
            button: MouseButton::Right,
            x,
            y,
        };
        assert_eq!(pad.handle_pointer(&right(10.0, 10.0)), Transition::Began);
        assert_eq!(pad.handle_pointer(&motion(60.0, 10.0)), Transition::Extended);
        assert!(pad.snapshot().unwrap().has_ink_near(35, 10, 1));

        let release_right = PointerEvent::Release {
            button: MouseButton::Right,
            x: 60.0,
            y: 10.0,
        };
        assert_eq!(pad.handle_pointer(&release_right), Transition::Ended);
        assert!(!pad.is_drawing());
    }

    #[test]
    fn motion_before_any_press_leaves_surface_blank() {
        let mut pad = mounted_pad();
        pad.handle_pointer(&motion(10.0, 10.0));
        pad.handle_pointer(&motion(90.0, 90.0));
        assert!(pad.snapshot().unwrap().is_blank());
    }

    #[test]
    fn clear_then_continue_draws_only_new_segment() {
        let mut pad = mounted_pad();
        pad.handle_gesture(Gesture::Begin(crate::input::Sample::new(10.0, 10.0)));
        pad.handle_gesture(Gesture::Extend(crate::input::Sample::new(20.0, 20.0)));
        pad.clear();
        assert!(pad.is_drawing());
        pad.handle_gesture(Gesture::Extend(crate::input::Sample::new(30.0, 30.0)));

        let snapshot = pad.snapshot().unwrap();
        assert!(snapshot.has_ink_near(25, 25, 1));
        assert!(!snapshot.has_ink_near(14, 14, 2));
        let bounds = snapshot.ink_bounds().unwrap();
        assert!(bounds.x >= 18 && bounds.y >= 18);
        assert!(bounds.x + bounds.width <= 33 && bounds.y + bounds.height <= 33);
    }

    #[test]
    fn boundary_exit_ends_the_stroke() {
        let mut pad = mounted_pad();
        pad.handle_pointer(&press(5.0, 5.0));
        pad.handle_pointer(&motion(15.0, 15.0));
        assert_eq!(pad.handle_pointer(&PointerEvent::Leave), Transition::Ended);
        assert!(!pad.is_drawing());

        let before = pad.snapshot().unwrap();
        assert_eq!(pad.handle_pointer(&motion(25.0, 25.0)), Transition::Ignored);
        assert_eq!(pad.snapshot().unwrap(), before);
        assert!(!before.has_ink_near(22, 22, 2));
    }

    #[test]
    fn leave_while_idle_is_a_no_op() {
        let mut pad = mounted_pad();
        assert_eq!(pad.handle_pointer(&PointerEvent::Leave), Transition::Ignored);
        assert!(pad.snapshot().unwrap().is_blank());
    }

    #[test]
    fn touch_and_device_render_identical_pixels() {
        let mut device = mounted_pad();
        device.handle_pointer(&press(50.0, 50.0));
        device.handle_pointer(&motion(60.0, 60.0));
        device.handle_pointer(&release(60.0, 60.0));

        let mut touched = mounted_pad();
        touched.set_screen_offset(ScreenOffset::new(200.0, 120.0));
        touched.handle_touch(&touch(TouchPhase::Start, &[(250.0, 170.0)]));
        touched.handle_touch(&touch(TouchPhase::Move, &[(260.0, 180.0)]));
        touched.handle_touch(&touch(TouchPhase::End, &[]));

        let device_pixels = device.snapshot().unwrap();
        assert!(!device_pixels.is_blank());
        assert_eq!(device_pixels, touched.snapshot().unwrap());
    }

    #[test]
    fn second_touch_is_ignored() {
        let mut single = mounted_pad();
        single.handle_touch(&touch(TouchPhase::Start, &[(40.0, 40.0)]));
        single.handle_touch(&touch(TouchPhase::Move, &[(80.0, 40.0)]));

        let mut multi = mounted_pad();
        multi.handle_touch(&touch(TouchPhase::Start, &[(40.0, 40.0)]));
        assert_eq!(
            multi.handle_touch(&touch(TouchPhase::Start, &[(40.0, 40.0), (300.0, 150.0)])),
            Transition::Ignored
        );
        multi.handle_touch(&touch(
            TouchPhase::Move,
            &[(80.0, 40.0), (310.0, 160.0)],
        ));

        let expected = single.snapshot().unwrap();
        let actual = multi.snapshot().unwrap();
        assert_eq!(expected, actual);
        assert!(!actual.has_ink_near(305, 155, 8));
    }

    #[test]
    fn unmount_discards_surface_and_stroke() {
        let mut pad = mounted_pad();
        pad.handle_pointer(&press(10.0, 10.0));
        pad.unmount();
        assert!(!pad.is_mounted());
        assert!(!pad.is_drawing());

        pad.mount().unwrap();
        assert_eq!(pad.handle_pointer(&motion(50.0, 50.0)), Transition::Ignored);
        assert!(pad.snapshot().unwrap().is_blank());
    }

    #[test]
    fn remount_keeps_existing_drawing() {
        let mut pad = mounted_pad();
        pad.handle_pointer(&press(10.0, 10.0));
        pad.handle_pointer(&motion(50.0, 10.0));
        pad.mount().unwrap();
        assert!(!pad.snapshot().unwrap().is_blank());
        assert!(pad.is_drawing());
    }

    #[test]
    fn pad_config_follows_config_file() {
        let config = Config::default();
        let pad_config = PadConfig::from(&config);
        assert_eq!(pad_config, PadConfig::default());
    }
}
