// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capabilities a host element must provide.

use alloc::boxed::Box;

use kurbo::{Rect, Size, Vec2};

use crate::gesture::TouchEvent;

/// Touch handler installed on an element. Returns whether the event was consumed.
pub type TouchHandler = Box<dyn FnMut(&TouchEvent) -> bool>;

/// Click or long-click handler installed on an element.
pub type ClickHandler = Box<dyn FnMut()>;

/// A UI element that can be press-scaled.
///
/// All methods take `&self`: the host owns the element (typically behind an
/// `Rc`) and uses interior mutability for its own state. The core only ever
/// holds a [`Weak`](alloc::rc::Weak) reference to it.
///
/// These methods may call back into the binding. Such calls see an idle
/// binding and are otherwise ignored.
pub trait ViewBinding {
    /// Measured size in pixels.
    fn measured_size(&self) -> Size;

    /// Current scale as (`x`, `y`).
    fn scale(&self) -> Vec2;

    /// Sets the scale on both axes.
    fn set_scale(&self, scale: Vec2);

    /// Current bounds in the parent's coordinate space.
    fn bounds(&self) -> Rect;

    /// Whether the element currently accepts presses.
    fn is_interactive(&self) -> bool;

    /// Enables or disables press handling for the element.
    fn set_interactive(&self, interactive: bool);

    /// Asks the element's parent to repaint, so overlapping siblings stay correct.
    fn request_parent_repaint(&self);

    /// Converts device-independent units to pixels.
    fn dp_to_px(&self, dp: f64) -> f64;

    /// Installs or removes the element's touch handler.
    fn set_touch_handler(&self, handler: Option<TouchHandler>);

    /// Installs or removes the element's click handler.
    fn set_click_handler(&self, handler: Option<ClickHandler>);

    /// Installs or removes the element's long-click handler.
    fn set_long_click_handler(&self, handler: Option<ClickHandler>);

    /// Turns off the platform's own press feedback (ripples, highlights).
    fn disable_native_feedback(&self) {}

    /// Cancels scale animations driven on the element by anything other than
    /// this crate.
    fn cancel_external_animations(&self) {}
}
