// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_press_scale --heading-base-level=0

//! Understory Press Scale: headless "push down" press feedback for UI elements.
//!
//! Pressing an element shrinks it slightly; lifting the pointer, cancelling,
//! or dragging off the element scales it back. This crate owns the state
//! machine behind that effect and leaves rendering, layout, and event
//! delivery to the host.
//!
//! - [`gesture`]: turn raw touch phases into press intents.
//! - [`ScaleAnimationController`]: decide targets, run one animation session at
//!   a time, and apply scale on every frame.
//! - [`scale_for_absolute_size`]: convert an inset in device-independent units
//!   into a scale factor.
//! - [`ScalableView`]: bind all of the above to a host element implementing
//!   [`ViewBinding`].
//!
//! ## Binding an element
//!
//! ```rust
//! use std::cell::{Cell, RefCell};
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_press_scale::gesture::TouchEvent;
//! use understory_press_scale::{
//!     ClickHandler, ScalableView, ScaleOptions, TouchHandler, ViewBinding,
//! };
//!
//! #[derive(Default)]
//! struct Button {
//!     scale: Cell<Vec2>,
//!     touch: RefCell<Option<TouchHandler>>,
//! }
//!
//! impl ViewBinding for Button {
//!     fn measured_size(&self) -> Size { Size::new(120.0, 40.0) }
//!     fn scale(&self) -> Vec2 { self.scale.get() }
//!     fn set_scale(&self, scale: Vec2) { self.scale.set(scale); }
//!     fn bounds(&self) -> Rect { Rect::new(0.0, 0.0, 120.0, 40.0) }
//!     fn is_interactive(&self) -> bool { true }
//!     fn set_interactive(&self, _: bool) {}
//!     fn request_parent_repaint(&self) {}
//!     fn dp_to_px(&self, dp: f64) -> f64 { dp }
//!     fn set_touch_handler(&self, handler: Option<TouchHandler>) {
//!         *self.touch.borrow_mut() = handler;
//!     }
//!     fn set_click_handler(&self, _: Option<ClickHandler>) {}
//!     fn set_long_click_handler(&self, _: Option<ClickHandler>) {}
//! }
//!
//! let button = Rc::new(Button { scale: Cell::new(Vec2::new(1.0, 1.0)), ..Default::default() });
//! let scalable = ScalableView::bind(&button, ScaleOptions::default()).unwrap();
//!
//! // The host delivers touches to whatever handler is installed.
//! let mut handler = button.touch.borrow_mut().take().unwrap();
//! assert!(!handler(&TouchEvent::down(Point::new(10.0, 10.0))));
//!
//! // ...and frames while something is animating.
//! scalable.on_frame(Duration::ZERO);
//! scalable.on_frame(Duration::from_millis(50));
//! assert_eq!(button.scale(), Vec2::new(0.9, 0.9));
//! assert!(!scalable.is_animating());
//! ```
//!
//! ## Lifetimes
//!
//! The binding holds the element through a [`Weak`](alloc::rc::Weak)
//! reference. When the element is dropped, or after [`ScalableView::release`],
//! every operation becomes a no-op. The installed touch handler keeps the
//! controller alive until it is removed.
//!
//! ## Threading
//!
//! Everything runs on the host's UI thread. Animation is cooperative: the host
//! calls [`ScalableView::on_frame`] with monotonically increasing timestamps,
//! and starting a new animation is the only way one is cancelled short of
//! releasing the binding.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod binding;
mod config;
mod controller;
mod easing;
mod geometry;
pub mod gesture;
mod session;

pub use binding::{ClickHandler, TouchHandler, ViewBinding};
pub use config::{
    ConfigError, DEFAULT_PUSH_DURATION, DEFAULT_PUSH_SCALE_RATIO, DEFAULT_PUSH_SCALE_SIZE,
    DEFAULT_RELEASE_DURATION, ScaleConfig, ScaleMode, ScaleOptions,
};
pub use controller::{Handlers, ScalableView, ScaleAnimationController};
pub use easing::Interpolator;
pub use geometry::scale_for_absolute_size;
pub use session::{AnimationSession, FrameSample, SessionId};
