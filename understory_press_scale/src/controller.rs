// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press-scale controller and the bindable handle that wires it to an element.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::RefCell;
use core::fmt;
use core::time::Duration;

use crate::binding::{ClickHandler, TouchHandler, ViewBinding};
use crate::config::{ConfigError, ScaleConfig, ScaleMode, ScaleOptions};
use crate::easing::Interpolator;
use crate::geometry::scale_for_absolute_size;
use crate::gesture::{GestureInterpreter, GestureState, PressIntent, TouchEvent};
use crate::session::{AnimationSession, FrameSample, SessionId};

/// Owns the press-scale state of one element.
///
/// The controller holds the element weakly. Once the element is dropped or
/// [`release`](Self::release) has been called, every operation is a no-op.
///
/// At most one [`AnimationSession`] is active at a time: starting a session
/// cancels the previous one.
pub struct ScaleAnimationController<V> {
    view: Option<Weak<V>>,
    config: ScaleConfig,
    baseline_scale: Option<f64>,
    gesture: GestureInterpreter,
    session: Option<AnimationSession>,
    next_session: u64,
}

impl<V> fmt::Debug for ScaleAnimationController<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaleAnimationController")
            .field("bound", &self.view.is_some())
            .field("config", &self.config)
            .field("baseline_scale", &self.baseline_scale)
            .field("gesture", &self.gesture)
            .field("session", &self.session)
            .field("next_session", &self.next_session)
            .finish()
    }
}

impl<V: ViewBinding> ScaleAnimationController<V> {
    /// Creates a controller for `view`, recording its current horizontal
    /// scale as the baseline.
    ///
    /// This does not install any handlers; see [`ScalableView::bind`].
    pub fn new(view: &Rc<V>, config: ScaleConfig) -> Self {
        Self {
            view: Some(Rc::downgrade(view)),
            config,
            baseline_scale: Some(view.scale().x),
            gesture: GestureInterpreter::new(),
            session: None,
            next_session: 0,
        }
    }

    fn view(&self) -> Option<Rc<V>> {
        self.view.as_ref()?.upgrade()
    }

    /// Whether the element is still bound and alive.
    pub fn is_bound(&self) -> bool {
        self.view().is_some()
    }

    /// The configuration this controller was bound with.
    pub fn config(&self) -> &ScaleConfig {
        &self.config
    }

    /// Scale the element returns to on release; `None` after [`Self::release`].
    pub fn baseline_scale(&self) -> Option<f64> {
        self.baseline_scale
    }

    /// State of the current (or last) press.
    pub fn gesture_state(&self) -> &GestureState {
        self.gesture.state()
    }

    /// The active animation session, if any.
    pub fn session(&self) -> Option<&AnimationSession> {
        self.session.as_ref()
    }

    /// Whether an animation session is in flight.
    pub fn is_animating(&self) -> bool {
        self.session.is_some()
    }

    /// Feeds a touch event through the gesture interpreter and reacts to the
    /// resulting intent.
    ///
    /// Always returns `false`: the event is observed, never consumed.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> bool {
        let Some(view) = self.view() else {
            return false;
        };
        let intent = self
            .gesture
            .on_touch(event, view.bounds(), view.is_interactive());
        if let Some(intent) = intent {
            tracing::trace!(?intent, "press intent");
            self.on_intent(intent);
        }
        false
    }

    /// Reacts to a press intent.
    pub fn on_intent(&mut self, intent: PressIntent) {
        match intent {
            PressIntent::PressStarted => self.on_press_started(),
            PressIntent::PointerLeftBounds => self.on_pointer_left_bounds(),
            PressIntent::PressEnded => self.on_press_ended(),
        }
    }

    /// Starts the push animation toward the configured push scale.
    pub fn on_press_started(&mut self) {
        let (Some(view), Some(baseline)) = (self.view(), self.baseline_scale) else {
            return;
        };
        let push = self.config.push_scale();
        let target = match self.config.push_scale_mode() {
            ScaleMode::Ratio => push,
            ScaleMode::AbsoluteSize => {
                scale_for_absolute_size(view.measured_size(), push, baseline, |dp| {
                    view.dp_to_px(dp)
                })
            }
        };
        self.start_on(
            &view,
            target,
            self.config.push_duration(),
            self.config.push_interpolator(),
        );
    }

    /// Starts the release animation back to the baseline scale.
    pub fn on_pointer_left_bounds(&mut self) {
        self.release_to_baseline();
    }

    /// Starts the release animation back to the baseline scale.
    pub fn on_press_ended(&mut self) {
        self.release_to_baseline();
    }

    fn release_to_baseline(&mut self) {
        let (Some(view), Some(baseline)) = (self.view(), self.baseline_scale) else {
            return;
        };
        self.start_on(
            &view,
            baseline,
            self.config.release_duration(),
            self.config.release_interpolator(),
        );
    }

    /// Replaces any running animation with one toward `target`.
    ///
    /// Returns the new session id, or `None` when the element is gone.
    pub fn start_animation(
        &mut self,
        target: f64,
        duration: Duration,
        interpolator: Interpolator,
    ) -> Option<SessionId> {
        let view = self.view()?;
        Some(self.start_on(&view, target, duration, interpolator))
    }

    fn start_on(
        &mut self,
        view: &V,
        target: f64,
        duration: Duration,
        interpolator: Interpolator,
    ) -> SessionId {
        view.cancel_external_animations();
        if let Some(previous) = self.session.take() {
            tracing::trace!(session = previous.id().0, "superseding scale animation");
        }
        let id = SessionId(self.next_session);
        self.next_session += 1;
        tracing::trace!(session = id.0, target, ?duration, "starting scale animation");
        self.session = Some(AnimationSession::new(
            id,
            view.scale(),
            target,
            duration,
            interpolator,
        ));
        id
    }

    /// Advances the active session to `frame_time` and applies its scale.
    ///
    /// Every applied sample is followed by a parent repaint request. Returns
    /// `None` when nothing is animating.
    pub fn on_frame(&mut self, frame_time: Duration) -> Option<FrameSample> {
        let Some(view) = self.view() else {
            self.session = None;
            return None;
        };
        let session = self.session.as_mut()?;
        let sample = session.sample(frame_time);
        view.set_scale(sample.scale);
        view.request_parent_repaint();
        if session.is_finished() {
            tracing::trace!(session = sample.session.0, "scale animation finished");
            self.session = None;
        }
        Some(sample)
    }

    /// Cancels any animation, forgets the baseline, removes the element's
    /// touch, click, and long-click handlers, and drops the element.
    ///
    /// Calling this again is a no-op.
    pub fn release(&mut self) {
        let Some(weak) = self.view.take() else {
            return;
        };
        self.session = None;
        self.baseline_scale = None;
        if let Some(view) = weak.upgrade() {
            view.set_touch_handler(None);
            view.set_click_handler(None);
            view.set_long_click_handler(None);
        }
        tracing::debug!("press scale released");
    }
}

/// Handlers to install alongside the press-scale binding.
#[derive(Default)]
pub struct Handlers {
    /// A custom touch handler. When present it is installed in place of the
    /// press-scale interpreter and no press animation runs.
    pub touch: Option<TouchHandler>,
    /// Click handler.
    pub click: Option<ClickHandler>,
    /// Long-click handler.
    pub long_click: Option<ClickHandler>,
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("touch", &self.touch.is_some())
            .field("click", &self.click.is_some())
            .field("long_click", &self.long_click.is_some())
            .finish()
    }
}

/// A press-scale binding for one element.
///
/// Binding installs a touch handler on the element that drives a shared
/// [`ScaleAnimationController`]. The host delivers frames through
/// [`Self::on_frame`] while [`Self::is_animating`] is true.
///
/// The binding lives until [`Self::release`]: the installed handler keeps the
/// controller alive, while the controller only holds the element weakly.
///
/// Calls made while the controller is busy, for example from inside a
/// [`ViewBinding`] callback during [`Self::on_frame`], are ignored: mutators do
/// nothing and return `None` or `false`, and queries report an idle binding.
pub struct ScalableView<V> {
    inner: Rc<RefCell<ScaleAnimationController<V>>>,
    config: ScaleConfig,
}

impl<V> fmt::Debug for ScalableView<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalableView")
            .field("inner", &self.inner)
            .field("config", &self.config)
            .finish()
    }
}

impl<V: ViewBinding + 'static> ScalableView<V> {
    /// Validates `options` and binds press scaling to `view`.
    pub fn bind(view: &Rc<V>, options: ScaleOptions) -> Result<Self, ConfigError> {
        Ok(Self::bind_with_config(view, ScaleConfig::new(options)?))
    }

    /// Binds press scaling to `view` with an already validated configuration.
    pub fn bind_with_config(view: &Rc<V>, config: ScaleConfig) -> Self {
        view.disable_native_feedback();
        let this = Self {
            inner: Rc::new(RefCell::new(ScaleAnimationController::new(view, config))),
            config,
        };
        view.set_touch_handler(Some(this.interpreter_handler()));
        tracing::debug!(?config, "press scale bound");
        this
    }

    /// Binds press scaling and installs `handlers` on `view`.
    ///
    /// A custom touch handler opts the element out of press animation.
    pub fn bind_with_handlers(
        view: &Rc<V>,
        options: ScaleOptions,
        handlers: Handlers,
    ) -> Result<Self, ConfigError> {
        let this = Self::bind(view, options)?;
        if handlers.touch.is_some() {
            this.set_touch_handler(handlers.touch);
        }
        this.set_click_handler(handlers.click);
        this.set_long_click_handler(handlers.long_click);
        Ok(this)
    }

    fn interpreter_handler(&self) -> TouchHandler {
        let inner = Rc::clone(&self.inner);
        Box::new(move |event: &TouchEvent| {
            inner
                .try_borrow_mut()
                .is_ok_and(|mut controller| controller.handle_touch(event))
        })
    }

    fn bound_view(&self) -> Option<Rc<V>> {
        self.inner.try_borrow().ok()?.view()
    }

    fn with_controller<R>(
        &self,
        f: impl FnOnce(&mut ScaleAnimationController<V>) -> R,
    ) -> Option<R> {
        let mut controller = self.inner.try_borrow_mut().ok()?;
        Some(f(&mut controller))
    }

    /// Replaces the element's touch handler.
    ///
    /// `None` reinstalls the press-scale interpreter. `Some` installs `handler`
    /// as is, so the element gets no press animation. A custom handler is not
    /// tied to the binding and keeps receiving events if the host still holds
    /// it after [`Self::release`].
    pub fn set_touch_handler(&self, handler: Option<TouchHandler>) {
        let Some(view) = self.bound_view() else {
            return;
        };
        match handler {
            None => view.set_touch_handler(Some(self.interpreter_handler())),
            Some(custom) => {
                tracing::debug!("custom touch handler installed; press animation disabled");
                view.set_touch_handler(Some(custom));
            }
        }
    }

    /// Installs or removes the element's click handler.
    ///
    /// Installing a handler makes the element interactive.
    pub fn set_click_handler(&self, handler: Option<ClickHandler>) {
        let Some(view) = self.bound_view() else {
            return;
        };
        let interactive = handler.is_some();
        view.set_click_handler(handler);
        if interactive {
            view.set_interactive(true);
        }
    }

    /// Installs or removes the element's long-click handler.
    ///
    /// Installing a handler makes the element interactive.
    pub fn set_long_click_handler(&self, handler: Option<ClickHandler>) {
        let Some(view) = self.bound_view() else {
            return;
        };
        let interactive = handler.is_some();
        view.set_long_click_handler(handler);
        if interactive {
            view.set_interactive(true);
        }
    }

    /// See [`ScaleAnimationController::handle_touch`].
    pub fn handle_touch(&self, event: &TouchEvent) -> bool {
        self.with_controller(|controller| controller.handle_touch(event))
            .unwrap_or(false)
    }

    /// See [`ScaleAnimationController::on_press_started`].
    pub fn on_press_started(&self) {
        self.with_controller(ScaleAnimationController::on_press_started);
    }

    /// See [`ScaleAnimationController::on_pointer_left_bounds`].
    pub fn on_pointer_left_bounds(&self) {
        self.with_controller(ScaleAnimationController::on_pointer_left_bounds);
    }

    /// See [`ScaleAnimationController::on_press_ended`].
    pub fn on_press_ended(&self) {
        self.with_controller(ScaleAnimationController::on_press_ended);
    }

    /// See [`ScaleAnimationController::start_animation`].
    pub fn start_animation(
        &self,
        target: f64,
        duration: Duration,
        interpolator: Interpolator,
    ) -> Option<SessionId> {
        self.with_controller(|controller| {
            controller.start_animation(target, duration, interpolator)
        })
        .flatten()
    }

    /// See [`ScaleAnimationController::on_frame`].
    pub fn on_frame(&self, frame_time: Duration) -> Option<FrameSample> {
        self.with_controller(|controller| controller.on_frame(frame_time))
            .flatten()
    }

    /// See [`ScaleAnimationController::release`].
    ///
    /// Ignored when called from inside a [`ViewBinding`] callback.
    pub fn release(&self) {
        self.with_controller(ScaleAnimationController::release);
    }

    /// Whether the element is still bound and alive.
    pub fn is_bound(&self) -> bool {
        self.inner
            .try_borrow()
            .is_ok_and(|controller| controller.is_bound())
    }

    /// Whether an animation session is in flight.
    ///
    /// Reports `false` while a frame is being applied.
    pub fn is_animating(&self) -> bool {
        self.inner
            .try_borrow()
            .is_ok_and(|controller| controller.is_animating())
    }

    /// Id of the active animation session, if any.
    pub fn current_session(&self) -> Option<SessionId> {
        self.inner
            .try_borrow()
            .ok()?
            .session()
            .map(AnimationSession::id)
    }

    /// Scale the element returns to on release; `None` after [`Self::release`].
    pub fn baseline_scale(&self) -> Option<f64> {
        self.inner.try_borrow().ok()?.baseline_scale()
    }

    /// The configuration this binding was created with.
    pub fn config(&self) -> ScaleConfig {
        self.config
    }

    /// State of the current (or last) press.
    pub fn gesture_state(&self) -> GestureState {
        self.inner
            .try_borrow()
            .map(|controller| *controller.gesture_state())
            .unwrap_or_default()
    }
}
