//! A material-style push button.

use std::panic::AssertUnwindSafe;

use cushy::figures::units::Lp;
use cushy::kludgine::Color;
use cushy::styles::components::{TextColor, TextSize};
use cushy::styles::Dimension;
use cushy::value::{IntoValue, Value};
use cushy::widget::{Callback, MakeWidget, MakeWidgetWithTag, WidgetInstance, WidgetTag};

use crate::style::MaterialButtonStyle;

/// A push button that spreads an ink ripple from the press location.
///
/// The button renders its label inside a padded, rounded-corner container and
/// invokes its callback when a press is released as a tap: the pointer must
/// not have dragged, and the release must land within the button's bounds.
///
/// ```rust
/// use cushy::widget::MakeWidget;
/// use cushy_material_button::MaterialButton;
///
/// let button = MaterialButton::new("Save")
///     .on_click(|| println!("saved"))
///     .make_widget();
/// ```
#[derive(Debug)]
pub struct MaterialButton {
    label: WidgetInstance,
    on_click: Option<Callback<()>>,
    padding_h: Value<Dimension>,
    padding_v: Value<Dimension>,
    font_size: Value<Dimension>,
    font_color: Value<Color>,
    background_color: Option<Value<Color>>,
    corner_radius: Value<Dimension>,
}

impl MaterialButton {
    /// Returns a new button displaying `label`.
    pub fn new(label: impl MakeWidget) -> Self {
        Self {
            label: label.make_widget(),
            on_click: None,
            padding_h: Value::Constant(Dimension::Lp(Lp::points(16))),
            padding_v: Value::Constant(Dimension::Lp(Lp::points(8))),
            font_size: Value::Constant(Dimension::Lp(Lp::points(17))),
            font_color: Value::Constant(Color::WHITE),
            background_color: None,
            corner_radius: Value::Constant(Dimension::Lp(Lp::points(4))),
        }
    }

    /// Sets the callback invoked when the button is tapped.
    ///
    /// The callback fires at most once per press, and never for presses that
    /// drag or end outside the button.
    #[must_use]
    pub fn on_click<F>(mut self, action: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let mut action = AssertUnwindSafe(action);
        self.on_click = Some(Callback::new(move |()| (action.0)()));
        self
    }

    /// Sets the horizontal padding between the label and the button's edges.
    #[must_use]
    pub fn padding_h(mut self, padding: impl IntoValue<Dimension>) -> Self {
        self.padding_h = padding.into_value();
        self
    }

    /// Sets the vertical padding between the label and the button's edges.
    #[must_use]
    pub fn padding_v(mut self, padding: impl IntoValue<Dimension>) -> Self {
        self.padding_v = padding.into_value();
        self
    }

    /// Sets the size the label's text is rendered at.
    #[must_use]
    pub fn font_size(mut self, size: impl IntoValue<Dimension>) -> Self {
        self.font_size = size.into_value();
        self
    }

    /// Sets the color the label's text is rendered in.
    #[must_use]
    pub fn font_color(mut self, color: impl IntoValue<Color>) -> Self {
        self.font_color = color.into_value();
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

    /// Sets the corner radius of the button's background.
    #[must_use]
    pub fn corner_radius(mut self, radius: impl IntoValue<Dimension>) -> Self {
        self.corner_radius = radius.into_value();
        self
    }
}

impl MakeWidgetWithTag for MaterialButton {
    fn make_with_tag(self, tag: WidgetTag) -> WidgetInstance {
        let label = self
            .label
            .with(&TextSize, self.font_size)
            .with(&TextColor, self.font_color);

        let mut style = MaterialButtonStyle::new(label)
            .padding_h(self.padding_h)
            .padding_v(self.padding_v)
            .corner_radius(self.corner_radius);
        if let Some(background_color) = self.background_color {
            style = style.background_color(background_color);
        }
        if let Some(on_click) = self.on_click {
            style = style.on_click_callback(on_click);
        }

        style.make_with_tag(tag)
    }
}

#[cfg(test)]
mod tests {
    use cushy::figures::units::Lp;
    use cushy::kludgine::Color;
    use cushy::styles::Dimension;
    use cushy::value::{Dynamic, Source};
    use cushy::widget::MakeWidget;

    use super::MaterialButton;

    #[test]
    fn defaults_match_material_styling() {
        let button = MaterialButton::new("Label");
        assert_eq!(button.padding_h.get(), Dimension::Lp(Lp::points(16)));
        assert_eq!(button.padding_v.get(), Dimension::Lp(Lp::points(8)));
        assert_eq!(button.font_size.get(), Dimension::Lp(Lp::points(17)));
        assert_eq!(button.font_color.get(), Color::WHITE);
        assert_eq!(button.corner_radius.get(), Dimension::Lp(Lp::points(4)));
        assert!(button.background_color.is_none());
    }

    #[test]
    fn click_callbacks_can_capture_reactive_state() {
        let count = Dynamic::new(0);
        let mut button = MaterialButton::new("Label").on_click({
            let count = count.clone();
            move || {
                *count.lock() += 1;
            }
        });
        button.on_click.as_mut().expect("callback set").invoke(());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn builds_a_widget_instance() {
        let _button = MaterialButton::new("Save")
            .on_click(|| {})
            .background_color(Color::RED)
            .make_widget();
    }
}
