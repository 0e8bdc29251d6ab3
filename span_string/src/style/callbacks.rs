// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributes holding callbacks: gestures and custom-drawn placeholders.
//!
//! Callbacks are shared handles. Cloning an attribute clones the handle, never the closure, and
//! the core never invokes them itself. Two attributes holding callbacks are never considered
//! equal, since closures cannot be compared.

use alloc::sync::Arc;
use core::fmt;

/// Information handed to gesture callbacks by the event dispatcher.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureEvent {
    /// Horizontal position of the gesture, relative to the text component.
    pub x: f64,
    /// Vertical position of the gesture, relative to the text component.
    pub y: f64,
    /// Event time in milliseconds.
    pub timestamp: u64,
}

/// A gesture callback.
pub type GestureCallback = Arc<dyn Fn(&GestureEvent) + Send + Sync>;

/// Click and long press handlers attached to a run of text.
#[derive(Clone, Default)]
pub struct GestureStyle {
    /// Called on click.
    pub on_click: Option<GestureCallback>,
    /// Called on long press.
    pub on_long_press: Option<GestureCallback>,
}

impl GestureStyle {
    /// Creates a gesture style with no handlers.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the click handler.
    pub fn with_on_click(mut self, callback: impl Fn(&GestureEvent) + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(callback));
        self
    }

    /// Sets the long press handler.
    pub fn with_on_long_press(
        mut self,
        callback: impl Fn(&GestureEvent) + Send + Sync + 'static,
    ) -> Self {
        self.on_long_press = Some(Arc::new(callback));
        self
    }

    /// Returns `true` if neither handler is set.
    pub fn is_empty(&self) -> bool {
        self.on_click.is_none() && self.on_long_press.is_none()
    }
}

impl fmt::Debug for GestureStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureStyle")
            .field("on_click", &self.on_click.is_some())
            .field("on_long_press", &self.on_long_press.is_some())
            .finish()
    }
}

/// Input to a custom placeholder's measure callback.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CustomSpanMeasureInfo {
    /// Font size at the placeholder, in pixels.
    pub font_size: f64,
}

/// Result of a custom placeholder's measure callback.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CustomSpanMetrics {
    /// Advance width of the placeholder.
    pub width: f64,
    /// Height of the placeholder; `None` uses the line height.
    pub height: Option<f64>,
}

/// Input to a custom placeholder's draw callback.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CustomSpanDrawInfo {
    /// Horizontal offset of the placeholder within the line.
    pub x: f64,
    /// Top of the line box.
    pub line_top: f64,
    /// Bottom of the line box.
    pub line_bottom: f64,
    /// Baseline of the line.
    pub baseline: f64,
}

/// A custom placeholder measure callback.
pub type MeasureCallback = Arc<dyn Fn(&CustomSpanMeasureInfo) -> CustomSpanMetrics + Send + Sync>;

/// A custom placeholder draw callback.
pub type DrawCallback = Arc<dyn Fn(&CustomSpanDrawInfo) + Send + Sync>;

/// Callbacks sizing and painting a custom placeholder.
#[derive(Clone, Default)]
pub struct CustomSpanOptions {
    /// Measures the placeholder.
    pub on_measure: Option<MeasureCallback>,
    /// Paints the placeholder.
    pub on_draw: Option<DrawCallback>,
}

impl CustomSpanOptions {
    /// Creates options with no callbacks.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the measure callback.
    pub fn with_on_measure(
        mut self,
        callback: impl Fn(&CustomSpanMeasureInfo) -> CustomSpanMetrics + Send + Sync + 'static,
    ) -> Self {
        self.on_measure = Some(Arc::new(callback));
        self
    }

    /// Sets the draw callback.
    pub fn with_on_draw(
        mut self,
        callback: impl Fn(&CustomSpanDrawInfo) + Send + Sync + 'static,
    ) -> Self {
        self.on_draw = Some(Arc::new(callback));
        self
    }
}

impl fmt::Debug for CustomSpanOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomSpanOptions")
            .field("on_measure", &self.on_measure.is_some())
            .field("on_draw", &self.on_draw.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{CustomSpanMeasureInfo, CustomSpanMetrics, CustomSpanOptions, GestureEvent, GestureStyle};
    use alloc::format;
    use core::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn clones_share_the_callback() {
        static CLICKS: AtomicUsize = AtomicUsize::new(0);
        let style = GestureStyle::new().with_on_click(|_| {
            CLICKS.fetch_add(1, Ordering::Relaxed);
        });
        let copy = style.clone();
        let event = GestureEvent::default();
        (style.on_click.as_ref().unwrap())(&event);
        (copy.on_click.as_ref().unwrap())(&event);
        assert_eq!(CLICKS.load(Ordering::Relaxed), 2);
        assert!(copy.on_long_press.is_none());
        assert!(!copy.is_empty());
    }

    #[test]
    fn debug_reports_presence_only() {
        let options = CustomSpanOptions::new().with_on_measure(|info: &CustomSpanMeasureInfo| {
            CustomSpanMetrics {
                width: info.font_size,
                height: None,
            }
        });
        assert_eq!(
            format!("{options:?}"),
            "CustomSpanOptions { on_measure: true, on_draw: false }"
        );
    }
}
