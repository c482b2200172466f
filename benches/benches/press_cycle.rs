// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::{Cell, RefCell};
use std::hint::black_box;
use std::rc::Rc;
use std::time::Duration;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use understory_press_scale::gesture::{GestureInterpreter, TouchEvent};
use understory_press_scale::{
    ClickHandler, ScalableView, ScaleConfig, TouchHandler, ViewBinding, scale_for_absolute_size,
};

const BOUNDS: Rect = Rect::new(0.0, 0.0, 200.0, 60.0);

struct BenchView {
    scale: Cell<Vec2>,
    touch: RefCell<Option<TouchHandler>>,
}

impl BenchView {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            scale: Cell::new(Vec2::new(1.0, 1.0)),
            touch: RefCell::new(None),
        })
    }
}

impl ViewBinding for BenchView {
    fn measured_size(&self) -> Size {
        BOUNDS.size()
    }

    fn scale(&self) -> Vec2 {
        self.scale.get()
    }

    fn set_scale(&self, scale: Vec2) {
        self.scale.set(scale);
    }

    fn bounds(&self) -> Rect {
        BOUNDS
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn set_interactive(&self, _interactive: bool) {}

    fn request_parent_repaint(&self) {}

    fn dp_to_px(&self, dp: f64) -> f64 {
        dp * 2.625
    }

    fn set_touch_handler(&self, handler: Option<TouchHandler>) {
        *self.touch.borrow_mut() = handler;
    }

    fn set_click_handler(&self, _handler: Option<ClickHandler>) {}

    fn set_long_click_handler(&self, _handler: Option<ClickHandler>) {}
}

/// A press with `moves` pointer moves, half of them outside the bounds.
fn gesture_stream(moves: usize) -> Vec<TouchEvent> {
    let mut events = Vec::with_capacity(moves + 2);
    events.push(TouchEvent::down(Point::new(10.0, 10.0)));
    for i in 0..moves {
        let x = if i < moves / 2 { 10.0 + i as f64 } else { 400.0 };
        events.push(TouchEvent::moved(Point::new(x, 10.0)));
    }
    events.push(TouchEvent::up(Point::new(400.0, 10.0)));
    events
}

fn bench_gesture_interpreter(c: &mut Criterion) {
    let mut group = c.benchmark_group("press_scale/gesture");
    for moves in [16usize, 256] {
        let events = gesture_stream(moves);
        group.bench_with_input(BenchmarkId::from_parameter(moves), &events, |b, events| {
            b.iter_batched(
                GestureInterpreter::new,
                |mut gesture| {
                    for event in events {
                        black_box(gesture.on_touch(event, BOUNDS, true));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_press_release_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("press_scale/frames");
    let config = ScaleConfig::default();
    group.bench_function("press_release_60hz", |b| {
        b.iter_batched(
            || {
                let view = BenchView::new();
                let scalable = ScalableView::bind_with_config(&view, config);
                (view, scalable)
            },
            |(view, scalable)| {
                let mut clock = Duration::ZERO;
                scalable.on_press_started();
                while scalable.on_frame(clock).is_some() {
                    clock += Duration::from_micros(16_667);
                }
                scalable.on_press_ended();
                while scalable.on_frame(clock).is_some() {
                    clock += Duration::from_micros(16_667);
                }
                black_box(view.scale());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_absolute_size(c: &mut Criterion) {
    c.bench_function("press_scale/scale_for_absolute_size", |b| {
        b.iter(|| {
            scale_for_absolute_size(
                black_box(Size::new(320.0, 48.0)),
                black_box(10.0),
                1.0,
                |dp| dp * 2.625,
            )
        });
    });
}

criterion_group!(
    benches,
    bench_gesture_interpreter,
    bench_press_release_frames,
    bench_absolute_size
);
criterion_main!(benches);
