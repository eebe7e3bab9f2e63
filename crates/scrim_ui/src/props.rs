//! Partial, author-supplied widget configurations
//!
//! Every field is optional; [`crate::resolve`] substitutes the documented
//! default for anything left unset, before any host call is made.

use scrim_core::{ClickHandler, PlayerId, TeamId, UiVec, WidgetHandle};
use scrim_host::{Anchor, BgFill, ImageType, Label};

/// Properties shared by all widget kinds.
#[derive(Debug, Default)]
pub struct BaseProps {
    /// Human-readable name hint; the allocator appends it to the generated
    /// unique name.
    pub name: Option<String>,
    pub position: Option<UiVec>,
    pub size: Option<UiVec>,
    pub anchor: Option<Anchor>,
    /// Parent widget; defaults to the host root.
    pub parent: Option<WidgetHandle>,
    pub visible: Option<bool>,
    pub padding: Option<f32>,
    pub bg_color: Option<UiVec>,
    pub bg_alpha: Option<f32>,
    pub bg_fill: Option<BgFill>,
    /// Restrict visibility/interaction to one player.
    pub player: Option<PlayerId>,
    /// Restrict visibility/interaction to one team. A player scope wins
    /// when both are set.
    pub team: Option<TeamId>,
}

/// Implements the shared builder methods for a props type embedding
/// [`BaseProps`] as `common`.
macro_rules! impl_common_props {
    ($ty:ty) => {
        impl $ty {
            /// Set the name hint.
            pub fn name(mut self, name: impl Into<String>) -> Self {
                self.common.name = Some(name.into());
                self
            }

            /// Set the position (2-component inputs get z = 0).
            pub fn position(mut self, position: impl Into<UiVec>) -> Self {
                self.common.position = Some(position.into());
                self
            }

            /// Set the size (2-component inputs get z = 0).
            pub fn size(mut self, size: impl Into<UiVec>) -> Self {
                self.common.size = Some(size.into());
                self
            }

            /// Set the anchor point.
            pub fn anchor(mut self, anchor: Anchor) -> Self {
                self.common.anchor = Some(anchor);
                self
            }

            /// Set the parent widget.
            pub fn parent(mut self, parent: WidgetHandle) -> Self {
                self.common.parent = Some(parent);
                self
            }

            /// Set initial visibility.
            pub fn visible(mut self, visible: bool) -> Self {
                self.common.visible = Some(visible);
                self
            }

            /// Set content padding.
            pub fn padding(mut self, padding: f32) -> Self {
                self.common.padding = Some(padding);
                self
            }

            /// Set the background color.
            pub fn bg_color(mut self, color: impl Into<UiVec>) -> Self {
                self.common.bg_color = Some(color.into());
                self
            }

            /// Set the background alpha (0-1).
            pub fn bg_alpha(mut self, alpha: f32) -> Self {
                self.common.bg_alpha = Some(alpha);
                self
            }

            /// Set the background fill style.
            pub fn bg_fill(mut self, fill: BgFill) -> Self {
                self.common.bg_fill = Some(fill);
                self
            }

            /// Scope the widget to one player.
            pub fn player(mut self, player: PlayerId) -> Self {
                self.common.player = Some(player);
                self
            }

            /// Scope the widget to one team.
            pub fn team(mut self, team: TeamId) -> Self {
                self.common.team = Some(team);
                self
            }
        }
    };
}

/// Container properties. Containers add nothing beyond the common set.
#[derive(Debug, Default)]
pub struct ContainerProps {
    pub common: BaseProps,
}

impl ContainerProps {
    pub fn new() -> Self {
        Self::default()
    }
}

impl_common_props!(ContainerProps);

/// Button properties.
#[derive(Default)]
pub struct ButtonProps {
    pub common: BaseProps,
    pub enabled: Option<bool>,
    pub color_base: Option<UiVec>,
    pub alpha_base: Option<f32>,
    pub color_disabled: Option<UiVec>,
    pub alpha_disabled: Option<f32>,
    pub color_pressed: Option<UiVec>,
    pub alpha_pressed: Option<f32>,
    pub color_hover: Option<UiVec>,
    pub alpha_hover: Option<f32>,
    pub color_focused: Option<UiVec>,
    pub alpha_focused: Option<f32>,
    /// Invoked with the acting player when the button is released.
    pub on_click: Option<ClickHandler>,
}

impl ButtonProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the button.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Set the base state color.
    pub fn color_base(mut self, color: impl Into<UiVec>) -> Self {
        self.color_base = Some(color.into());
        self
    }

    /// Set the base state alpha.
    pub fn alpha_base(mut self, alpha: f32) -> Self {
        self.alpha_base = Some(alpha);
        self
    }

    /// Set the disabled state color.
    pub fn color_disabled(mut self, color: impl Into<UiVec>) -> Self {
        self.color_disabled = Some(color.into());
        self
    }

    /// Set the disabled state alpha.
    pub fn alpha_disabled(mut self, alpha: f32) -> Self {
        self.alpha_disabled = Some(alpha);
        self
    }

    /// Set the pressed state color.
    pub fn color_pressed(mut self, color: impl Into<UiVec>) -> Self {
        self.color_pressed = Some(color.into());
        self
    }

    /// Set the pressed state alpha.
    pub fn alpha_pressed(mut self, alpha: f32) -> Self {
        self.alpha_pressed = Some(alpha);
        self
    }

    /// Set the hover state color.
    pub fn color_hover(mut self, color: impl Into<UiVec>) -> Self {
        self.color_hover = Some(color.into());
        self
    }

    /// Set the hover state alpha.
    pub fn alpha_hover(mut self, alpha: f32) -> Self {
        self.alpha_hover = Some(alpha);
        self
    }

    /// Set the focused state color.
    pub fn color_focused(mut self, color: impl Into<UiVec>) -> Self {
        self.color_focused = Some(color.into());
        self
    }

    /// Set the focused state alpha.
    pub fn alpha_focused(mut self, alpha: f32) -> Self {
        self.alpha_focused = Some(alpha);
        self
    }

    /// Set the click handler.
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(PlayerId) + Send + Sync + 'static,
    {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl_common_props!(ButtonProps);

impl std::fmt::Debug for ButtonProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonProps")
            .field("common", &self.common)
            .field("enabled", &self.enabled)
            .field("has_on_click", &self.on_click.is_some())
            .finish_non_exhaustive()
    }
}

/// Text properties.
#[derive(Debug)]
pub struct TextProps {
    pub common: BaseProps,
    /// Text content: a literal string or a pre-formatted message.
    pub label: Label,
    pub text_size: Option<f32>,
    pub text_color: Option<UiVec>,
    pub text_alpha: Option<f32>,
    pub text_anchor: Option<Anchor>,
}

impl TextProps {
    pub fn new(label: impl Into<Label>) -> Self {
        Self {
            common: BaseProps::default(),
            label: label.into(),
            text_size: None,
            text_color: None,
            text_alpha: None,
            text_anchor: None,
        }
    }

    /// Set the font size (zero = host default).
    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = Some(size);
        self
    }

    /// Set the text color.
    pub fn text_color(mut self, color: impl Into<UiVec>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    /// Set the text alpha (0-1).
    pub fn text_alpha(mut self, alpha: f32) -> Self {
        self.text_alpha = Some(alpha);
        self
    }

    /// Set the text anchor point.
    pub fn text_anchor(mut self, anchor: Anchor) -> Self {
        self.text_anchor = Some(anchor);
        self
    }
}

impl_common_props!(TextProps);

/// Image properties.
#[derive(Debug, Default)]
pub struct ImageProps {
    pub common: BaseProps,
    pub image_type: Option<ImageType>,
    pub image_color: Option<UiVec>,
    pub image_alpha: Option<f32>,
}

impl ImageProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set which host image to display.
    pub fn image_type(mut self, image_type: ImageType) -> Self {
        self.image_type = Some(image_type);
        self
    }

    /// Set the image tint color.
    pub fn image_color(mut self, color: impl Into<UiVec>) -> Self {
        self.image_color = Some(color.into());
        self
    }

    /// Set the image alpha (0-1).
    pub fn image_alpha(mut self, alpha: f32) -> Self {
        self.image_alpha = Some(alpha);
        self
    }
}

impl_common_props!(ImageProps);
