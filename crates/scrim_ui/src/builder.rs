//! Component factories
//!
//! [`UiBuilder`] owns the process-wide mutable state behind widget
//! creation: the name allocator and the click dispatcher. One builder per
//! UI subsystem; tests instantiate their own, nothing is ambient.

use scrim_core::{
    BuildError, ButtonPhase, EventDispatcher, NameAllocator, PlayerId, Result, WidgetHandle,
};
use scrim_host::Host;

use crate::props::{ButtonProps, ContainerProps, ImageProps, TextProps};
use crate::resolve;

/// Builds widgets against a [`Host`] and routes their click events.
///
/// Every factory follows the same contract: allocate a unique name, resolve
/// defaults, issue exactly one host creation call, look the widget back up
/// by name and re-stamp it, then hand the handle to the caller. A widget
/// that cannot be looked up after creation is a fatal integration failure,
/// not a recoverable condition.
pub struct UiBuilder {
    names: NameAllocator,
    dispatcher: EventDispatcher,
}

impl UiBuilder {
    pub fn new() -> Self {
        Self {
            names: NameAllocator::new(),
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Create a container widget.
    pub fn container(&mut self, host: &mut dyn Host, props: ContainerProps) -> Result<WidgetHandle> {
        let name = self.names.allocate(props.common.name.as_deref());
        let (params, receiver) = resolve::container(&name, &props, host.root_handle());
        host.create_container(&params, receiver);
        self.claim(host, &name)
    }

    /// Create a button widget, registering its click handler when present.
    pub fn button(&mut self, host: &mut dyn Host, mut props: ButtonProps) -> Result<WidgetHandle> {
        let on_click = props.on_click.take();
        let name = self.names.allocate(props.common.name.as_deref());
        let (params, receiver) = resolve::button(&name, &props, host.root_handle());
        host.create_button(&params, receiver);
        let handle = self.claim(host, &name)?;
        if let Some(handler) = on_click {
            self.dispatcher.register_boxed(handle, handler);
        }
        Ok(handle)
    }

    /// Create a text widget.
    pub fn text(&mut self, host: &mut dyn Host, props: TextProps) -> Result<WidgetHandle> {
        let name = self.names.allocate(props.common.name.as_deref());
        let (params, receiver) = resolve::text(&name, &props, host.root_handle());
        host.create_text(&params, receiver);
        self.claim(host, &name)
    }

    /// Create an image widget.
    pub fn image(&mut self, host: &mut dyn Host, props: ImageProps) -> Result<WidgetHandle> {
        let name = self.names.allocate(props.common.name.as_deref());
        let (params, receiver) = resolve::image(&name, &props, host.root_handle());
        host.create_image(&params, receiver);
        self.claim(host, &name)
    }

    /// Route one host interaction event to its registered handler.
    ///
    /// Wire this into the host's button-event callback. Returns whether a
    /// handler ran.
    pub fn dispatch(&self, player: PlayerId, handle: WidgetHandle, phase: ButtonPhase) -> bool {
        self.dispatcher.dispatch(player, handle, phase)
    }

    /// The click routing table, for callers that manage handlers directly.
    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut EventDispatcher {
        &mut self.dispatcher
    }

    /// Look up the widget just created under `name` and re-stamp its name.
    ///
    /// The re-stamp guards against a host whose creation call assigns a
    /// different name than the one requested.
    fn claim(&mut self, host: &mut dyn Host, name: &str) -> Result<WidgetHandle> {
        let Some(handle) = host.find_widget_by_name(name) else {
            tracing::error!(
                widget = name,
                issued = ?self.names.issued(),
                "host creation call produced no retrievable widget"
            );
            return Err(BuildError::CreationFailed {
                name: name.to_owned(),
                issued: self.names.issued().to_vec(),
            });
        };
        host.set_widget_name(handle, name);
        tracing::debug!(widget = name, "created widget");
        Ok(handle)
    }
}

impl Default for UiBuilder {
    fn default() -> Self {
        Self::new()
    }
}
