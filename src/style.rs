//! The material appearance and interaction strategy.

use std::panic::AssertUnwindSafe;
use std::time::Duration;

use cushy::animation::easings::EaseInOutSine;
use cushy::animation::{AnimationHandle, AnimationTarget, Spawn};
use cushy::context::{EventContext, GraphicsContext, LayoutContext, Trackable};
use cushy::figures::units::{Lp, Px, UPx};
use cushy::figures::{IntoSigned, Point, Rect, Round, ScreenScale, Size, Zero};
use cushy::kludgine::app::winit::event::MouseButton;
use cushy::kludgine::app::winit::window::CursorIcon;
use cushy::kludgine::shapes::Shape;
use cushy::kludgine::{Color, DrawableExt, Origin};
use cushy::styles::components::WidgetAccentColor;
use cushy::styles::Dimension;
use cushy::value::{Destination, Dynamic, IntoValue, Source, Value};
use cushy::widget::{Callback, EventHandling, MakeWidget, Widget, WidgetRef, HANDLED};
use cushy::window::DeviceId;
use cushy::ConstraintLimit;

use crate::ripple::Ripple;

/// The translucent white drawn over the background while the button is
/// pressed.
const PRESSED_OVERLAY: Color = Color::new(255, 255, 255, 38);

/// How long the ripple takes to spread from its seed radius to the farthest
/// corner of the button.
const SPREAD_DURATION: Duration = Duration::from_millis(100);

/// How long the pressed overlay takes to fade out after release.
const FADE_DURATION: Duration = Duration::from_millis(200);

/// A material-style appearance and interaction strategy.
///
/// This widget supplies everything that makes a widget behave like a
/// [`MaterialButton`](crate::MaterialButton): padded, rounded-corner
/// background, the ink ripple spreading from the press location, and
/// tap-versus-drag discrimination for the click callback. It can wrap any
/// [`MakeWidget`], not just text labels.
#[derive(Debug)]
pub struct MaterialButtonStyle {
    content: WidgetRef,
    on_click: Option<Callback<()>>,
    padding_h: Value<Dimension>,
    padding_v: Value<Dimension>,
    background_color: Option<Value<Color>>,
    corner_radius: Value<Dimension>,
    ripple: Ripple,
    ripple_radius: Dynamic<Px>,
    overlay: Dynamic<Color>,
    buttons_pressed: usize,
    spread_animation: AnimationHandle,
    fade_animation: AnimationHandle,
}

impl MaterialButtonStyle {
    /// Returns a new strategy wrapping `content`.
    pub fn new(content: impl MakeWidget) -> Self {
        Self {
            content: WidgetRef::new(content),
            on_click: None,
            padding_h: Value::Constant(Dimension::Lp(Lp::points(16))),
            padding_v: Value::Constant(Dimension::Lp(Lp::points(8))),
            background_color: None,
            corner_radius: Value::Constant(Dimension::Lp(Lp::points(4))),
            ripple: Ripple::default(),
            ripple_radius: Dynamic::new(Px::ZERO),
            overlay: Dynamic::new(PRESSED_OVERLAY.with_alpha(0)),
            buttons_pressed: 0,
            spread_animation: AnimationHandle::default(),
            fade_animation: AnimationHandle::default(),
        }
    }

    /// Sets the horizontal padding between the content and the button's
    /// edges.
    #[must_use]
    pub fn padding_h(mut self, padding: impl IntoValue<Dimension>) -> Self {
        self.padding_h = padding.into_value();
        self
    }

    /// Sets the vertical padding between the content and the button's edges.
    #[must_use]
    pub fn padding_v(mut self, padding: impl IntoValue<Dimension>) -> Self {
        self.padding_v = padding.into_value();
        self
    }

    /// Sets the background color.
    ///
    /// When unset, the theme's accent color is used.
    #[must_use]
    pub fn background_color(mut self, color: impl IntoValue<Color>) -> Self {
        self.background_color = Some(color.into_value());
        self
    }

    /// Sets the corner radius of the background.
    #[must_use]
    pub fn corner_radius(mut self, radius: impl IntoValue<Dimension>) -> Self {
        self.corner_radius = radius.into_value();
        self
    }

    /// Sets the callback invoked when a press is released as a tap.
    ///
    /// The callback fires at most once per press, and only when the pointer
    /// neither dragged nor ended outside the button.
    #[must_use]
    pub fn on_click<F>(self, action: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let mut action = AssertUnwindSafe(action);
        self.on_click_callback(Callback::new(move |()| (action.0)()))
    }

    pub(crate) fn on_click_callback(mut self, callback: Callback<()>) -> Self {
        self.on_click = Some(callback);
        self
    }

    fn invoke_on_click(&mut self) {
        if let Some(on_click) = self.on_click.as_mut() {
            on_click.invoke(());
        }
    }
}

impl Widget for MaterialButtonStyle {
    fn redraw(&mut self, context: &mut GraphicsContext<'_, '_, '_, '_>) {
        let region = context.gfx.region();
        self.ripple.resize(region.size);

        self.corner_radius.redraw_when_changed(context);
        let radius = self
            .corner_radius
            .get()
            .into_px(context.gfx.scale())
            .round();
        let background = match &self.background_color {
            Some(color) => color.get_tracking_redraw(context),
            None => context.get(&WidgetAccentColor),
        };
        context.gfx.draw_shape(&Shape::filled_round_rect(
            Rect::from(region.size),
            radius,
            background,
        ));

        let overlay = self.overlay.get_tracking_redraw(context);
        let ripple_radius = self.ripple_radius.get_tracking_redraw(context);
        if overlay.alpha() > 0 && ripple_radius > 0 {
            let mut gfx = context.gfx.clipped_to(Rect::from(region.size));
            gfx.draw_shape(
                Shape::filled_circle(ripple_radius, overlay, Origin::Center)
                    .translate_by(self.ripple.origin()),
            );
        }

        let content = self.content.mounted(context);
        context.for_other(&content).redraw();
    }

    fn layout(
        &mut self,
        available_space: Size<ConstraintLimit>,
        context: &mut LayoutContext<'_, '_, '_, '_>,
    ) -> Size<UPx> {
        self.padding_h.invalidate_when_changed(context);
        self.padding_v.invalidate_when_changed(context);
        let scale = context.gfx.scale();
        let padding_h = self.padding_h.get().into_upx(scale).round();
        let padding_v = self.padding_v.get().into_upx(scale).round();

        let content = self.content.mounted(context);
        let content_size = context.for_other(&content).layout(Size::new(
            available_space.width - padding_h * 2,
            available_space.height - padding_v * 2,
        ));
        context.set_child_layout(
            &content,
            Rect::new(Point::new(padding_h, padding_v), content_size).into_signed(),
        );

        content_size + Size::new(padding_h * 2, padding_v * 2)
    }

    fn hit_test(&mut self, _location: Point<Px>, _context: &mut EventContext<'_>) -> bool {
        true
    }

    fn hover(
        &mut self,
        _location: Point<Px>,
        _context: &mut EventContext<'_>,
    ) -> Option<CursorIcon> {
        Some(CursorIcon::Pointer)
    }

    fn mouse_down(
        &mut self,
        location: Point<Px>,
        _device_id: DeviceId,
        _button: MouseButton,
        context: &mut EventContext<'_>,
    ) -> EventHandling {
        self.buttons_pressed += 1;
        if let Some(spread) = self.ripple.press(location) {
            self.fade_animation.clear();
            self.overlay.set(PRESSED_OVERLAY);
            self.ripple_radius.set(spread.seed);
            self.spread_animation = self
                .ripple_radius
                .transition_to(spread.target)
                .over(SPREAD_DURATION)
                .with_easing(EaseInOutSine)
                .spawn();
            // The press origin is plain state; the dynamics alone won't
            // schedule the first frame.
            context.set_needs_redraw();
        }
        HANDLED
    }

    fn mouse_up(
        &mut self,
        location: Option<Point<Px>>,
        _device_id: DeviceId,
        _button: MouseButton,
        _context: &mut EventContext<'_>,
    ) {
        self.buttons_pressed -= 1;
        if self.buttons_pressed > 0 {
            return;
        }

        let tapped = self.ripple.release(location);
        self.fade_animation = self
            .overlay
            .transition_to(PRESSED_OVERLAY.with_alpha(0))
            .over(FADE_DURATION)
            .with_easing(EaseInOutSine)
            .spawn();

        if tapped {
            self.invoke_on_click();
        }
    }

    fn unmounted(&mut self, context: &mut EventContext<'_>) {
        self.content.unmount_in(context);
    }
}
