//! Fully-resolved creation parameters
//!
//! The host provides no defaulting of its own: every field here is concrete
//! by the time a creation call is issued. Default resolution happens in the
//! declarative layer, never in a host implementation.

use scrim_core::{UiVec, WidgetHandle};

use crate::types::{Anchor, BgFill, ImageType, Label};

/// Parameters shared by every widget kind.
#[derive(Clone, Debug, PartialEq)]
pub struct CommonParams {
    /// Allocated unique widget name.
    pub name: String,
    pub position: UiVec,
    pub size: UiVec,
    pub anchor: Anchor,
    /// Parent widget; the host root when the author gave none.
    pub parent: WidgetHandle,
    pub visible: bool,
    pub padding: f32,
    pub bg_color: UiVec,
    pub bg_alpha: f32,
    pub bg_fill: BgFill,
}

/// Color and alpha for one button visual state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateStyle {
    pub color: UiVec,
    pub alpha: f32,
}

/// Resolved parameters for a button widget.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonParams {
    pub common: CommonParams,
    pub enabled: bool,
    pub base: StateStyle,
    pub disabled: StateStyle,
    pub pressed: StateStyle,
    pub hover: StateStyle,
    pub focused: StateStyle,
}

/// Resolved parameters for a text widget.
#[derive(Clone, Debug, PartialEq)]
pub struct TextParams {
    pub common: CommonParams,
    pub label: Label,
    /// Zero means "render at the host's built-in default size".
    pub text_size: f32,
    pub text_color: UiVec,
    pub text_alpha: f32,
    pub text_anchor: Anchor,
}

/// Resolved parameters for an image widget.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageParams {
    pub common: CommonParams,
    pub image_type: ImageType,
    pub image_color: UiVec,
    pub image_alpha: f32,
}
