// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press timeline.
//!
//! Drive a simulated button through a press, a drag off the button, and a
//! release, printing the scale on every 16ms frame.
//!
//! Run:
//! - `cargo run -p understory_demos --bin press_timeline`
//! - `RUST_LOG=understory_press_scale=debug cargo run -p understory_demos --bin press_timeline`

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use kurbo::{Point, Rect, Size, Vec2};
use tracing_subscriber::EnvFilter;
use understory_press_scale::gesture::{TouchEvent, TouchPhase};
use understory_press_scale::{
    ClickHandler, Handlers, ScalableView, ScaleMode, ScaleOptions, TouchHandler, ViewBinding,
};

const FRAME: Duration = Duration::from_millis(16);

/// A button laid out at (40, 40) with a 2x display density.
struct Button {
    scale: Cell<Vec2>,
    interactive: Cell<bool>,
    touch: RefCell<Option<TouchHandler>>,
    click: RefCell<Option<ClickHandler>>,
}

impl Button {
    fn dispatch(&self, event: TouchEvent) {
        let handler = self.touch.borrow_mut().take();
        if let Some(mut handler) = handler {
            handler(&event);
            self.touch.borrow_mut().get_or_insert(handler);
        }
        if event.phase == TouchPhase::Up {
            let handler = self.click.borrow_mut().take();
            if let Some(mut handler) = handler {
                handler();
                self.click.borrow_mut().get_or_insert(handler);
            }
        }
    }
}

impl ViewBinding for Button {
    fn measured_size(&self) -> Size {
        Size::new(240.0, 96.0)
    }

    fn scale(&self) -> Vec2 {
        self.scale.get()
    }

    fn set_scale(&self, scale: Vec2) {
        self.scale.set(scale);
    }

    fn bounds(&self) -> Rect {
        Rect::from_origin_size((40.0, 40.0), self.measured_size())
    }

    fn is_interactive(&self) -> bool {
        self.interactive.get()
    }

    fn set_interactive(&self, interactive: bool) {
        self.interactive.set(interactive);
    }

    fn request_parent_repaint(&self) {}

    fn dp_to_px(&self, dp: f64) -> f64 {
        dp * 2.0
    }

    fn set_touch_handler(&self, handler: Option<TouchHandler>) {
        *self.touch.borrow_mut() = handler;
    }

    fn set_click_handler(&self, handler: Option<ClickHandler>) {
        *self.click.borrow_mut() = handler;
    }

    fn set_long_click_handler(&self, _handler: Option<ClickHandler>) {}
}

fn run_frames(scalable: &ScalableView<Button>, clock: &mut Duration, label: &str) {
    while let Some(sample) = scalable.on_frame(*clock) {
        println!(
            "{label:>8} t={:>4}ms session={} progress={:.2} scale={:.3}",
            clock.as_millis(),
            sample.session.0,
            sample.progress,
            sample.scale.x
        );
        *clock += FRAME;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("understory_press_scale=trace")),
        )
        .init();

    let button = Rc::new(Button {
        scale: Cell::new(Vec2::new(1.0, 1.0)),
        interactive: Cell::new(false),
        touch: RefCell::new(None),
        click: RefCell::new(None),
    });

    let options = ScaleOptions {
        push_scale_mode: ScaleMode::AbsoluteSize,
        push_scale: Some(6.0),
        ..ScaleOptions::default()
    };
    let scalable = ScalableView::bind_with_handlers(
        &button,
        options,
        Handlers {
            click: Some(Box::new(|| println!("   click")) as ClickHandler),
            ..Handlers::default()
        },
    )?;

    tracing::info!(config = ?scalable.config(), "button bound");

    let mut clock = Duration::ZERO;

    button.dispatch(TouchEvent::down(Point::new(20.0, 20.0)));
    run_frames(&scalable, &mut clock, "push");

    // Drag off the right edge: the button springs back while still held.
    button.dispatch(TouchEvent::moved(Point::new(400.0, 20.0)));
    run_frames(&scalable, &mut clock, "left");

    button.dispatch(TouchEvent::down(Point::new(20.0, 20.0)));
    run_frames(&scalable, &mut clock, "push");
    button.dispatch(TouchEvent::up(Point::new(20.0, 20.0)));
    run_frames(&scalable, &mut clock, "release");

    scalable.release();
    button.dispatch(TouchEvent::down(Point::new(20.0, 20.0)));
    println!("after release: animating={}", scalable.is_animating());
    Ok(())
}
