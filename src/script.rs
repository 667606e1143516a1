//! Text scripts of input events for replaying against a pad.
//!
//! One event per line; blank lines and `#` comments are skipped. Coordinates
//! for mouse verbs are surface-relative, touch coordinates are screen positions
//! (translated by the most recent `offset` line).
//!
//! ```text
//! offset 100 40
//! mouse-down 10 10
//! mouse-move 20 20
//! mouse-up 20 20
//! touch-start 150 90
//! touch-move 160 100 300 120   # second contact is ignored
//! touch-end
//! clear
//! ```

use crate::input::{
    MouseButton, PointerEvent, ScreenOffset, TouchEvent, TouchPhase, TouchPoint, Transition,
};
use crate::pad::SketchPad;
use log::debug;
use thiserror::Error;

/// A single scripted host action.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptEvent {
    Pointer(PointerEvent),
    Touch(TouchEvent),
    /// The surface moved on screen
    Offset(ScreenOffset),
    /// The user pressed the clear control
    Clear,
}

/// Errors produced while parsing a script.
#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown event '{verb}'")]
    UnknownEvent { line: usize, verb: String },

    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: '{verb}' expects {expected}")]
    WrongArity {
        line: usize,
        verb: String,
        expected: &'static str,
    },

    #[error("line {line}: unknown mouse button '{value}'")]
    UnknownButton { line: usize, value: String },
}

/// Totals gathered while replaying a script.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Script events fed to the pad
    pub events: usize,
    /// Completed strokes (begin matched by end)
    pub strokes: usize,
    /// Segments drawn
    pub segments: usize,
    /// Events the pad ignored
    pub ignored: usize,
    /// Clear actions performed
    pub clears: usize,
}

/// Parses a whole script.
pub fn parse(source: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    let mut events = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        events.push(parse_line(line, content)?);
    }
    Ok(events)
}

fn parse_line(line: usize, content: &str) -> Result<ScriptEvent, ScriptError> {
    let mut parts = content.split_whitespace();
    let verb = parts.next().unwrap_or_default().to_lowercase();
    let args: Vec<&str> = parts.collect();

    let arity = |expected: &'static str| ScriptError::WrongArity {
        line,
        verb: verb.clone(),
        expected,
    };

    let event = match verb.as_str() {
        "mouse-down" | "mouse-up" => {
            let (x, y, button) = match args.as_slice() {
                [x, y] => (number(line, x)?, number(line, y)?, MouseButton::Left),
                [x, y, button] => (number(line, x)?, number(line, y)?, parse_button(line, button)?),
                _ => return Err(arity("X Y [left|right|middle]")),
            };
            if verb == "mouse-down" {
                ScriptEvent::Pointer(PointerEvent::Press { button, x, y })
            } else {
                ScriptEvent::Pointer(PointerEvent::Release { button, x, y })
            }
        }
        "mouse-move" => match args.as_slice() {
            [x, y] => ScriptEvent::Pointer(PointerEvent::Motion {
                x: number(line, x)?,
                y: number(line, y)?,
            }),
            _ => return Err(arity("X Y")),
        },
        "mouse-leave" => {
            if !args.is_empty() {
                return Err(arity("no arguments"));
            }
            ScriptEvent::Pointer(PointerEvent::Leave)
        }
        "touch-start" | "touch-move" => {
            if args.is_empty() || args.len() % 2 != 0 {
                return Err(arity("one or more X Y pairs"));
            }
            let phase = if verb == "touch-start" {
                TouchPhase::Start
            } else {
                TouchPhase::Move
            };
            let touches = args
                .chunks(2)
                .map(|pair| -> Result<TouchPoint, ScriptError> {
                    Ok(TouchPoint {
                        screen_x: number(line, pair[0])?,
                        screen_y: number(line, pair[1])?,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            ScriptEvent::Touch(TouchEvent::new(phase, touches))
        }
        "touch-end" | "touch-cancel" => {
            if !args.is_empty() {
                return Err(arity("no arguments"));
            }
            let phase = if verb == "touch-end" {
                TouchPhase::End
            } else {
                TouchPhase::Cancel
            };
            ScriptEvent::Touch(TouchEvent::new(phase, Vec::new()))
        }
        "offset" => match args.as_slice() {
            [left, top] => ScriptEvent::Offset(ScreenOffset::new(
                number(line, left)?,
                number(line, top)?,
            )),
            _ => return Err(arity("LEFT TOP")),
        },
        "clear" => {
            if !args.is_empty() {
                return Err(arity("no arguments"));
            }
            ScriptEvent::Clear
        }
        _ => {
            return Err(ScriptError::UnknownEvent {
                line,
                verb: verb.clone(),
            });
        }
    };

    Ok(event)
}

fn number(line: usize, value: &str) -> Result<f64, ScriptError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ScriptError::InvalidNumber {
            line,
            value: value.to_string(),
        })
}

fn parse_button(line: usize, value: &str) -> Result<MouseButton, ScriptError> {
    match value.to_lowercase().as_str() {
        "left" => Ok(MouseButton::Left),
        "right" => Ok(MouseButton::Right),
        "middle" => Ok(MouseButton::Middle),
        _ => Err(ScriptError::UnknownButton {
            line,
            value: value.to_string(),
        }),
    }
}

/// Feeds every event to `pad` in order.
pub fn replay(pad: &mut SketchPad, events: &[ScriptEvent]) -> ReplaySummary {
    let mut summary = ReplaySummary::default();
    for event in events {
        summary.events += 1;
        let transition = match event {
            ScriptEvent::Pointer(pointer) => pad.handle_pointer(pointer),
            ScriptEvent::Touch(touch) => pad.handle_touch(touch),
            ScriptEvent::Offset(offset) => {
                pad.set_screen_offset(*offset);
                continue;
            }
            ScriptEvent::Clear => {
                pad.clear();
                summary.clears += 1;
                continue;
            }
        };
        match transition {
            Transition::Began => {}
            Transition::Extended => summary.segments += 1,
            Transition::Ended => summary.strokes += 1,
            Transition::Ignored => summary.ignored += 1,
        }
    }
    debug!("Replay finished: {:?}", summary);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_verb() {
        let events = parse(
            "# warm-up\n\
             offset 10 20\n\
             mouse-down 1 2\n\
             mouse-move 3 4\n\
             mouse-up 3 4 right\n\
             mouse-leave\n\
             touch-start 5 6 7 8\n\
             touch-move 9 10\n\
             touch-end\n\
             touch-cancel\n\
             \n\
             clear  # wipe\n",
        )
        .unwrap();

        assert_eq!(events.len(), 10);
        assert_eq!(events[0], ScriptEvent::Offset(ScreenOffset::new(10.0, 20.0)));
        assert_eq!(
            events[1],
            ScriptEvent::Pointer(PointerEvent::Press {
                button: MouseButton::Left,
                x: 1.0,
                y: 2.0
            })
        );
        assert_eq!(
            events[3],
            ScriptEvent::Pointer(PointerEvent::Release {
                button: MouseButton::Right,
                x: 3.0,
                y: 4.0
            })
        );
        match &events[5] {
            ScriptEvent::Touch(touch) => {
                assert_eq!(touch.phase, TouchPhase::Start);
                assert_eq!(touch.touches.len(), 2);
                assert_eq!(touch.touches[1].screen_x, 7.0);
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(events[9], ScriptEvent::Clear);
    }

    #[test]
    fn errors_carry_line_numbers() {
        assert_eq!(
            parse("mouse-down 1 2\nscribble 3 4"),
            Err(ScriptError::UnknownEvent {
                line: 2,
                verb: "scribble".to_string()
            })
        );
        assert_eq!(
            parse("mouse-move 1 abc"),
            Err(ScriptError::InvalidNumber {
                line: 1,
                value: "abc".to_string()
            })
        );
        assert!(matches!(
            parse("\n\ntouch-move 1 2 3"),
            Err(ScriptError::WrongArity { line: 3, .. })
        ));
        assert!(matches!(
            parse("mouse-down 1 2 thumb"),
            Err(ScriptError::UnknownButton { line: 1, .. })
        ));
        assert!(matches!(
            parse("mouse-move NaN 2"),
            Err(ScriptError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn replay_counts_transitions() {
        let events = parse(
            "mouse-move 5 5\n\
             mouse-down 10 10\n\
             mouse-move 20 20\n\
             mouse-move 30 30\n\
             clear\n\
             mouse-move 40 40\n\
             mouse-leave\n\
             mouse-move 50 50\n",
        )
        .unwrap();

        let mut pad = SketchPad::default();
        pad.mount().unwrap();
        let summary = replay(&mut pad, &events);

        assert_eq!(
            summary,
            ReplaySummary {
                events: 8,
                strokes: 1,
                segments: 3,
                ignored: 2,
                clears: 1,
            }
        );
        let snapshot = pad.snapshot().unwrap();
        assert!(snapshot.has_ink_near(35, 35, 1));
        assert!(!snapshot.has_ink_near(15, 15, 2));
    }

    #[test]
    fn replay_uses_latest_offset_for_touch() {
        let events = parse(
            "offset 100 100\n\
             touch-start 110 110\n\
             touch-move 150 110\n\
             touch-end\n",
        )
        .unwrap();

        let mut pad = SketchPad::default();
        pad.mount().unwrap();
        replay(&mut pad, &events);

        let snapshot = pad.snapshot().unwrap();
        assert!(snapshot.has_ink_near(30, 10, 1));
        assert_eq!(pad.screen_offset(), ScreenOffset::new(100.0, 100.0));
    }
}
