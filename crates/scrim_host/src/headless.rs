//! Deterministic in-memory host
//!
//! Backs tests and diagnostics runs with a slotmap of widget records and a
//! name index, with no rendering behind it. Creation order, parenting,
//! visibility, depth and receiver scoping are all observable, so ordering
//! and integration-failure properties can be asserted directly.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use scrim_core::{PlayerId, Receiver, WidgetHandle};

use crate::params::{ButtonParams, CommonParams, ImageParams, TextParams};
use crate::types::DepthTier;
use crate::Host;

/// Which creation call produced a widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetKind {
    Root,
    Container,
    Button,
    Text,
    Image,
}

/// The full creation parameters a widget was built with.
#[derive(Clone, Debug, PartialEq)]
pub enum CreateCall {
    Container(CommonParams),
    Button(ButtonParams),
    Text(TextParams),
    Image(ImageParams),
}

impl CreateCall {
    /// The common parameter block of whichever call this was.
    pub fn common(&self) -> &CommonParams {
        match self {
            Self::Container(params) => params,
            Self::Button(params) => &params.common,
            Self::Text(params) => &params.common,
            Self::Image(params) => &params.common,
        }
    }
}

/// Snapshot of one created widget.
#[derive(Clone, Debug)]
pub struct WidgetRecord {
    pub kind: WidgetKind,
    /// Current name (creation name unless re-stamped since).
    pub name: String,
    pub parent: Option<WidgetHandle>,
    pub visible: bool,
    pub depth: DepthTier,
    pub receiver: Option<Receiver>,
    /// Creation order; the synthetic root is 0.
    pub sequence: u64,
    /// Creation parameters (`None` only for the root).
    pub call: Option<CreateCall>,
}

/// In-memory [`Host`] implementation.
pub struct HeadlessHost {
    widgets: SlotMap<WidgetHandle, WidgetRecord>,
    by_name: FxHashMap<String, WidgetHandle>,
    root: WidgetHandle,
    next_sequence: u64,
    drop_creations: bool,
    input_mode: FxHashMap<PlayerId, bool>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        let mut widgets = SlotMap::with_key();
        let root = widgets.insert(WidgetRecord {
            kind: WidgetKind::Root,
            name: "__ui_root".to_owned(),
            parent: None,
            visible: true,
            depth: DepthTier::GameUi,
            receiver: None,
            sequence: 0,
            call: None,
        });
        Self {
            widgets,
            by_name: FxHashMap::default(),
            root,
            next_sequence: 1,
            drop_creations: false,
            input_mode: FxHashMap::default(),
        }
    }

    /// Make subsequent creation calls register nothing.
    ///
    /// Simulates a host that fails silently, for exercising the
    /// creation-failure path.
    pub fn drop_creations(&mut self, drop: bool) {
        self.drop_creations = drop;
    }

    /// Record for a widget, if it still exists.
    pub fn record(&self, handle: WidgetHandle) -> Option<&WidgetRecord> {
        self.widgets.get(handle)
    }

    /// Number of live widgets, excluding the synthetic root.
    pub fn widget_count(&self) -> usize {
        self.widgets.len() - 1
    }

    /// Whether UI input mode is currently enabled for a player.
    pub fn input_mode_enabled(&self, player: PlayerId) -> bool {
        self.input_mode.get(&player).copied().unwrap_or(false)
    }

    fn insert(&mut self, kind: WidgetKind, receiver: Option<Receiver>, call: CreateCall) {
        if self.drop_creations {
            tracing::warn!(name = %call.common().name, "dropping creation call");
            return;
        }
        let common = call.common();
        let record = WidgetRecord {
            kind,
            name: common.name.clone(),
            parent: Some(common.parent),
            visible: common.visible,
            depth: DepthTier::default(),
            receiver,
            sequence: self.next_sequence,
            call: Some(call.clone()),
        };
        self.next_sequence += 1;
        let name = record.name.clone();
        let handle = self.widgets.insert(record);
        self.by_name.insert(name, handle);
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for HeadlessHost {
    fn create_container(&mut self, params: &CommonParams, receiver: Option<Receiver>) {
        self.insert(
            WidgetKind::Container,
            receiver,
            CreateCall::Container(params.clone()),
        );
    }

    fn create_button(&mut self, params: &ButtonParams, receiver: Option<Receiver>) {
        self.insert(
            WidgetKind::Button,
            receiver,
            CreateCall::Button(params.clone()),
        );
    }

    fn create_text(&mut self, params: &TextParams, receiver: Option<Receiver>) {
        self.insert(WidgetKind::Text, receiver, CreateCall::Text(params.clone()));
    }

    fn create_image(&mut self, params: &ImageParams, receiver: Option<Receiver>) {
        self.insert(
            WidgetKind::Image,
            receiver,
            CreateCall::Image(params.clone()),
        );
    }

    fn find_widget_by_name(&self, name: &str) -> Option<WidgetHandle> {
        self.by_name.get(name).copied()
    }

    fn set_widget_name(&mut self, handle: WidgetHandle, name: &str) {
        if let Some(record) = self.widgets.get_mut(handle) {
            self.by_name.remove(&record.name);
            record.name = name.to_owned();
            self.by_name.insert(name.to_owned(), handle);
        }
    }

    fn set_widget_visible(&mut self, handle: WidgetHandle, visible: bool) {
        if let Some(record) = self.widgets.get_mut(handle) {
            record.visible = visible;
        }
    }

    fn set_widget_depth(&mut self, handle: WidgetHandle, tier: DepthTier) {
        if let Some(record) = self.widgets.get_mut(handle) {
            record.depth = tier;
        }
    }

    fn delete_widget(&mut self, handle: WidgetHandle) {
        if let Some(record) = self.widgets.remove(handle) {
            self.by_name.remove(&record.name);
        }
    }

    fn widget_name(&self, handle: WidgetHandle) -> Option<String> {
        self.widgets.get(handle).map(|record| record.name.clone())
    }

    fn set_input_mode(&mut self, player: PlayerId, enabled: bool) {
        self.input_mode.insert(player, enabled);
    }

    fn root_handle(&self) -> WidgetHandle {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Anchor, BgFill};
    use scrim_core::UiVec;

    fn common(name: &str, parent: WidgetHandle) -> CommonParams {
        CommonParams {
            name: name.to_owned(),
            position: UiVec::ZERO,
            size: UiVec::new(100.0, 100.0, 0.0),
            anchor: Anchor::TopLeft,
            parent,
            visible: true,
            padding: 0.0,
            bg_color: UiVec::new(0.25, 0.25, 0.25),
            bg_alpha: 0.5,
            bg_fill: BgFill::Solid,
        }
    }

    #[test]
    fn test_create_then_find_by_name() {
        let mut host = HeadlessHost::new();
        let root = host.root_handle();
        host.create_container(&common("panel", root), None);

        let handle = host.find_widget_by_name("panel").expect("widget exists");
        let record = host.record(handle).unwrap();
        assert_eq!(record.kind, WidgetKind::Container);
        assert_eq!(record.parent, Some(root));
        assert_eq!(record.sequence, 1);
    }

    #[test]
    fn test_rename_moves_name_index() {
        let mut host = HeadlessHost::new();
        let root = host.root_handle();
        host.create_container(&common("before", root), None);
        let handle = host.find_widget_by_name("before").unwrap();

        host.set_widget_name(handle, "after");
        assert!(host.find_widget_by_name("before").is_none());
        assert_eq!(host.find_widget_by_name("after"), Some(handle));
        assert_eq!(host.widget_name(handle).as_deref(), Some("after"));
    }

    #[test]
    fn test_delete_removes_widget_and_name() {
        let mut host = HeadlessHost::new();
        let root = host.root_handle();
        host.create_container(&common("doomed", root), None);
        let handle = host.find_widget_by_name("doomed").unwrap();

        host.delete_widget(handle);
        assert!(host.record(handle).is_none());
        assert!(host.find_widget_by_name("doomed").is_none());
        assert_eq!(host.widget_count(), 0);
    }

    #[test]
    fn test_dropped_creations_are_unfindable() {
        let mut host = HeadlessHost::new();
        let root = host.root_handle();
        host.drop_creations(true);
        host.create_container(&common("ghost", root), None);

        assert!(host.find_widget_by_name("ghost").is_none());
        assert_eq!(host.widget_count(), 0);
    }

    #[test]
    fn test_input_mode_per_player() {
        let mut host = HeadlessHost::new();
        assert!(!host.input_mode_enabled(PlayerId(1)));
        host.set_input_mode(PlayerId(1), true);
        assert!(host.input_mode_enabled(PlayerId(1)));
        assert!(!host.input_mode_enabled(PlayerId(2)));
    }
}
