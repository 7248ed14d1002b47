//! Container-level flow settings.

use std::fmt;

/// Direction children flow within the container.
///
/// Only [`FlowDirection::LeftToRight`] is implemented by the engine; the
/// remaining directions exist for the settings surface and are rejected at
/// layout time with [`weft_core::LayoutError::UnsupportedDirection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowDirection {
    /// Rows run left to right, wrapping downward.
    #[default]
    LeftToRight,
    /// Reserved: rows run right to left.
    RightToLeft,
    /// Reserved: columns run top to bottom.
    TopToBottom,
    /// Reserved: columns run bottom to top.
    BottomToTop,
}

impl fmt::Display for FlowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlowDirection::LeftToRight => "LeftToRight",
            FlowDirection::RightToLeft => "RightToLeft",
            FlowDirection::TopToBottom => "TopToBottom",
            FlowDirection::BottomToTop => "BottomToTop",
        };
        f.write_str(name)
    }
}

/// Container-level layout settings, read by every pass.
///
/// A pass never mutates these; the host changes them through its settings
/// surface and triggers a fresh pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSettings {
    /// Direction children flow.
    pub direction: FlowDirection,
    /// Whether rows wrap at the display width. When false a row may
    /// overflow the container.
    pub wrap_contents: bool,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            direction: FlowDirection::LeftToRight,
            wrap_contents: true,
        }
    }
}

impl LayoutSettings {
    /// Create settings with the defaults (left-to-right, wrapping on).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flow direction.
    pub fn with_direction(mut self, direction: FlowDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set whether rows wrap at the display width.
    pub fn with_wrap_contents(mut self, wrap: bool) -> Self {
        self.wrap_contents = wrap;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = LayoutSettings::default();
        assert_eq!(settings.direction, FlowDirection::LeftToRight);
        assert!(settings.wrap_contents);
    }

    #[test]
    fn test_builders() {
        let settings = LayoutSettings::new()
            .with_direction(FlowDirection::TopToBottom)
            .with_wrap_contents(false);
        assert_eq!(settings.direction, FlowDirection::TopToBottom);
        assert!(!settings.wrap_contents);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(FlowDirection::LeftToRight.to_string(), "LeftToRight");
        assert_eq!(FlowDirection::BottomToTop.to_string(), "BottomToTop");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_settings_round_trip() {
        let settings = LayoutSettings::new()
            .with_direction(FlowDirection::RightToLeft)
            .with_wrap_contents(false);
        let json = serde_json::to_string(&settings).unwrap();
        let back: LayoutSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
