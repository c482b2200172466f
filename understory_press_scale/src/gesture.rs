// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture interpretation: turn raw touch phases into press intents.
//!
//! ## Usage
//!
//! 1) Feed every [`TouchEvent`] for one element into [`GestureInterpreter::on_touch`],
//!    together with the element's current bounds in its parent's coordinates.
//! 2) React to the returned [`PressIntent`], if any.
//!
//! A `Down` captures the element bounds for the rest of the press. The first
//! `Move` that lands outside those bounds emits [`PressIntent::PointerLeftBounds`];
//! later moves are ignored until the next `Down`. `Up` and `Cancel` always end
//! the press.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_press_scale::gesture::{GestureInterpreter, PressIntent, TouchEvent};
//!
//! let bounds = Rect::new(10.0, 10.0, 110.0, 60.0);
//! let mut gesture = GestureInterpreter::new();
//!
//! let down = TouchEvent::down(Point::new(5.0, 5.0));
//! assert_eq!(gesture.on_touch(&down, bounds, true), Some(PressIntent::PressStarted));
//!
//! // Element-local (150, 5) is (160, 15) in the parent: outside.
//! let away = TouchEvent::moved(Point::new(150.0, 5.0));
//! assert_eq!(gesture.on_touch(&away, bounds, true), Some(PressIntent::PointerLeftBounds));
//! assert_eq!(gesture.on_touch(&away, bounds, true), None);
//!
//! let up = TouchEvent::up(Point::new(150.0, 5.0));
//! assert_eq!(gesture.on_touch(&up, bounds, true), Some(PressIntent::PressEnded));
//! ```

use kurbo::{Point, Rect};

/// Phase of a single-pointer touch event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// The pointer went down on the element.
    Down,
    /// The pointer moved while down.
    Move,
    /// The pointer was lifted.
    Up,
    /// The platform aborted the gesture.
    Cancel,
}

/// A touch event delivered to one element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// Phase of the gesture.
    pub phase: TouchPhase,
    /// Pointer position relative to the element's top-left corner.
    pub position: Point,
}

impl TouchEvent {
    /// Creates an event with the given phase and element-local position.
    #[must_use]
    pub const fn new(phase: TouchPhase, position: Point) -> Self {
        Self { phase, position }
    }

    /// A [`TouchPhase::Down`] event.
    #[must_use]
    pub const fn down(position: Point) -> Self {
        Self::new(TouchPhase::Down, position)
    }

    /// A [`TouchPhase::Move`] event.
    #[must_use]
    pub const fn moved(position: Point) -> Self {
        Self::new(TouchPhase::Move, position)
    }

    /// A [`TouchPhase::Up`] event.
    #[must_use]
    pub const fn up(position: Point) -> Self {
        Self::new(TouchPhase::Up, position)
    }

    /// A [`TouchPhase::Cancel`] event.
    #[must_use]
    pub const fn cancel(position: Point) -> Self {
        Self::new(TouchPhase::Cancel, position)
    }
}

/// High-level intent derived from a touch event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PressIntent {
    /// A press began.
    PressStarted,
    /// The pointer left the bounds captured at press start.
    PointerLeftBounds,
    /// The press was lifted or cancelled.
    PressEnded,
}

/// Per-press state, reset at every `Down`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GestureState {
    /// Element bounds (parent coordinates) captured at press start.
    pub bounds: Option<Rect>,
    /// Whether the pointer has left `bounds` during this press.
    pub has_left_bounds: bool,
}

/// Interprets the touch stream of one element.
#[derive(Clone, Debug, Default)]
pub struct GestureInterpreter {
    state: GestureState,
}

impl GestureInterpreter {
    /// Creates an interpreter with no press in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state of the current (or last) press.
    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Processes one event.
    ///
    /// `element_bounds` is the element's current rectangle in its parent's
    /// coordinate space. When `interactive` is `false` the event is ignored
    /// and no state changes.
    pub fn on_touch(
        &mut self,
        event: &TouchEvent,
        element_bounds: Rect,
        interactive: bool,
    ) -> Option<PressIntent> {
        if !interactive {
            return None;
        }
        match event.phase {
            TouchPhase::Down => {
                self.state = GestureState {
                    bounds: Some(element_bounds),
                    has_left_bounds: false,
                };
                Some(PressIntent::PressStarted)
            }
            TouchPhase::Move => {
                if self.state.has_left_bounds {
                    return None;
                }
                let captured = self.state.bounds?;
                let in_parent = event.position + element_bounds.origin().to_vec2();
                if captured.contains(in_parent) {
                    None
                } else {
                    self.state.has_left_bounds = true;
                    Some(PressIntent::PointerLeftBounds)
                }
            }
            TouchPhase::Up | TouchPhase::Cancel => Some(PressIntent::PressEnded),
        }
    }
}
