//! Opaque widget handles

use slotmap::new_key_type;

new_key_type! {
    /// Opaque reference to a host-managed UI element.
    ///
    /// The host owns the underlying widget's lifetime. This layer never
    /// inspects a handle's internals; handles are only used as map keys and
    /// as host-call arguments.
    pub struct WidgetHandle;
}
