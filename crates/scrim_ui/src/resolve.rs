//! Default resolution
//!
//! Pure per-kind functions turning partial props into fully-resolved host
//! parameters. The host never defaults anything; everything a creation
//! call needs is made concrete here first.

use scrim_core::{Receiver, UiVec, WidgetHandle};
use scrim_host::{Anchor, BgFill, ButtonParams, CommonParams, ImageParams, ImageType, StateStyle, TextParams};

use crate::props::{BaseProps, ButtonProps, ContainerProps, ImageProps, TextProps};

const DEFAULT_SIZE: UiVec = UiVec::new(100.0, 100.0, 0.0);
const DEFAULT_BG_COLOR: UiVec = UiVec::new(0.25, 0.25, 0.25);
const DEFAULT_BG_ALPHA: f32 = 0.5;
const DEFAULT_PADDING: f32 = 8.0;
/// Containers default to zero padding, unlike every other kind.
const CONTAINER_PADDING: f32 = 0.0;

const BUTTON_COLOR_BASE: UiVec = UiVec::new(0.7, 0.7, 0.7);
const BUTTON_COLOR_DISABLED: UiVec = UiVec::new(0.2, 0.2, 0.2);
const BUTTON_COLOR_PRESSED: UiVec = UiVec::new(0.25, 0.25, 0.25);
const WHITE: UiVec = UiVec::new(1.0, 1.0, 1.0);

fn resolve_common(
    name: &str,
    common: &BaseProps,
    root: WidgetHandle,
    default_padding: f32,
) -> CommonParams {
    CommonParams {
        name: name.to_owned(),
        position: common.position.unwrap_or(UiVec::ZERO),
        size: common.size.unwrap_or(DEFAULT_SIZE),
        anchor: common.anchor.unwrap_or(Anchor::TopLeft),
        parent: common.parent.unwrap_or(root),
        visible: common.visible.unwrap_or(true),
        padding: common.padding.unwrap_or(default_padding),
        bg_color: common.bg_color.unwrap_or(DEFAULT_BG_COLOR),
        bg_alpha: common.bg_alpha.unwrap_or(DEFAULT_BG_ALPHA),
        bg_fill: common.bg_fill.unwrap_or(BgFill::Solid),
    }
}

fn resolve_receiver(common: &BaseProps) -> Option<Receiver> {
    Receiver::resolve(common.player, common.team)
}

pub(crate) fn container(
    name: &str,
    props: &ContainerProps,
    root: WidgetHandle,
) -> (CommonParams, Option<Receiver>) {
    (
        resolve_common(name, &props.common, root, CONTAINER_PADDING),
        resolve_receiver(&props.common),
    )
}

pub(crate) fn button(
    name: &str,
    props: &ButtonProps,
    root: WidgetHandle,
) -> (ButtonParams, Option<Receiver>) {
    let params = ButtonParams {
        common: resolve_common(name, &props.common, root, DEFAULT_PADDING),
        enabled: props.enabled.unwrap_or(true),
        base: StateStyle {
            color: props.color_base.unwrap_or(BUTTON_COLOR_BASE),
            alpha: props.alpha_base.unwrap_or(1.0),
        },
        disabled: StateStyle {
            color: props.color_disabled.unwrap_or(BUTTON_COLOR_DISABLED),
            alpha: props.alpha_disabled.unwrap_or(0.5),
        },
        pressed: StateStyle {
            color: props.color_pressed.unwrap_or(BUTTON_COLOR_PRESSED),
            alpha: props.alpha_pressed.unwrap_or(1.0),
        },
        hover: StateStyle {
            color: props.color_hover.unwrap_or(WHITE),
            alpha: props.alpha_hover.unwrap_or(1.0),
        },
        focused: StateStyle {
            color: props.color_focused.unwrap_or(WHITE),
            alpha: props.alpha_focused.unwrap_or(1.0),
        },
    };
    (params, resolve_receiver(&props.common))
}

pub(crate) fn text(
    name: &str,
    props: &TextProps,
    root: WidgetHandle,
) -> (TextParams, Option<Receiver>) {
    let params = TextParams {
        common: resolve_common(name, &props.common, root, DEFAULT_PADDING),
        label: props.label.clone(),
        text_size: props.text_size.unwrap_or(0.0),
        text_color: props.text_color.unwrap_or(WHITE),
        text_alpha: props.text_alpha.unwrap_or(1.0),
        text_anchor: props.text_anchor.unwrap_or(Anchor::CenterLeft),
    };
    (params, resolve_receiver(&props.common))
}

pub(crate) fn image(
    name: &str,
    props: &ImageProps,
    root: WidgetHandle,
) -> (ImageParams, Option<Receiver>) {
    let params = ImageParams {
        common: resolve_common(name, &props.common, root, DEFAULT_PADDING),
        image_type: props.image_type.unwrap_or(ImageType::None),
        image_color: props.image_color.unwrap_or(WHITE),
        image_alpha: props.image_alpha.unwrap_or(1.0),
    };
    (params, resolve_receiver(&props.common))
}
