//! Scrim Host Contract
//!
//! The imperative UI primitive API this layer sits on top of:
//!
//! - **`Host` trait**: the abstract contract (creation calls, name lookup,
//!   visibility/depth/deletion, input mode)
//! - **Parameter records**: fully-resolved per-kind creation parameters
//! - **`HeadlessHost`**: a deterministic in-memory implementation for tests
//!   and diagnostics
//!
//! All host calls are synchronous and immediately effective: after a
//! creation call, [`Host::find_widget_by_name`] reliably returns the
//! just-created handle (the headless host can suspend that guarantee to
//! exercise failure paths).

pub mod headless;
pub mod params;
pub mod types;

pub use headless::{CreateCall, HeadlessHost, WidgetKind, WidgetRecord};
pub use params::{ButtonParams, CommonParams, ImageParams, StateStyle, TextParams};
pub use types::{Anchor, BgFill, DepthTier, ImageType, Label, Message};

use scrim_core::{PlayerId, Receiver, WidgetHandle};

/// The host-controlled UI primitive API.
///
/// Creation calls return nothing; the created widget is retrieved by name
/// afterwards, mirroring the primitive API this layer wraps. A `receiver`
/// of `None` means the widget is visible to everyone, and a conforming
/// implementation must treat it as "no receiver argument", not as a
/// sentinel scope.
pub trait Host {
    fn create_container(&mut self, params: &CommonParams, receiver: Option<Receiver>);
    fn create_button(&mut self, params: &ButtonParams, receiver: Option<Receiver>);
    fn create_text(&mut self, params: &TextParams, receiver: Option<Receiver>);
    fn create_image(&mut self, params: &ImageParams, receiver: Option<Receiver>);

    /// Look up a widget by its current name.
    fn find_widget_by_name(&self, name: &str) -> Option<WidgetHandle>;

    /// Rename a widget. Unknown handles are ignored.
    fn set_widget_name(&mut self, handle: WidgetHandle, name: &str);

    fn set_widget_visible(&mut self, handle: WidgetHandle, visible: bool);

    fn set_widget_depth(&mut self, handle: WidgetHandle, tier: DepthTier);

    /// Delete a widget. The handle is never reused.
    fn delete_widget(&mut self, handle: WidgetHandle);

    /// Current name of a widget, if it still exists.
    fn widget_name(&self, handle: WidgetHandle) -> Option<String>;

    /// Toggle UI input mode (cursor capture) for one player.
    fn set_input_mode(&mut self, player: PlayerId, enabled: bool);

    /// The root widget every parentless widget attaches to.
    fn root_handle(&self) -> WidgetHandle;
}
