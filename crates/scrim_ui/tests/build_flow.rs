//! End-to-end build and dispatch flow against the headless host.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use scrim_core::{BuildError, ButtonPhase, PlayerId};
use scrim_host::{BgFill, CreateCall, HeadlessHost, Host, WidgetKind};
use scrim_ui::{ButtonProps, ContainerProps, TextProps, UiBuilder, UiNode};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn container_with_child_button_end_to_end() {
    init_logging();
    let mut host = HeadlessHost::new();
    let mut ui = UiBuilder::new();

    let clicked_by = Arc::new(AtomicU32::new(0));
    let clicks = Arc::new(AtomicU32::new(0));
    let by = Arc::clone(&clicked_by);
    let count = Arc::clone(&clicks);

    let tree = ui
        .build_tree(
            &mut host,
            UiNode::container(ContainerProps::new()).child(UiNode::button(
                ButtonProps::new().on_click(move |player| {
                    by.store(player.0, Ordering::SeqCst);
                    count.fetch_add(1, Ordering::SeqCst);
                }),
            )),
        )
        .expect("tree builds");

    // The container resolved to the documented defaults.
    let container = host.record(tree.handle).unwrap();
    assert_eq!(container.kind, WidgetKind::Container);
    assert_eq!(container.parent, Some(host.root_handle()));
    let Some(CreateCall::Container(params)) = &container.call else {
        panic!("expected container creation call");
    };
    assert_eq!(params.bg_fill, BgFill::Solid);
    assert_eq!(params.bg_alpha, 0.5);

    // Press invokes nothing; release invokes exactly once with the actor.
    let button = tree.children[0].handle;
    assert!(!ui.dispatch(PlayerId(7), button, ButtonPhase::Press));
    assert_eq!(clicks.load(Ordering::SeqCst), 0);
    assert!(ui.dispatch(PlayerId(7), button, ButtonPhase::Release));
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert_eq!(clicked_by.load(Ordering::SeqCst), 7);

    // A handle nobody registered for is a miss, not an error.
    assert!(!ui.dispatch(PlayerId(7), tree.handle, ButtonPhase::Release));
}

#[test]
fn handler_survives_widget_deletion_until_unregistered() {
    init_logging();
    let mut host = HeadlessHost::new();
    let mut ui = UiBuilder::new();
    let clicks = Arc::new(AtomicU32::new(0));
    let count = Arc::clone(&clicks);

    let button = ui
        .button(
            &mut host,
            ButtonProps::new().on_click(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .unwrap();

    host.delete_widget(button);

    // Stale entry still routes; handles are never reused, so this is
    // caller-managed cleanup territory.
    assert!(ui.dispatch(PlayerId(1), button, ButtonPhase::Release));
    assert_eq!(clicks.load(Ordering::SeqCst), 1);

    assert!(ui.dispatcher_mut().unregister(button));
    assert!(!ui.dispatch(PlayerId(1), button, ButtonPhase::Release));
}

#[test]
fn creation_failure_reports_all_issued_names() {
    init_logging();
    let mut host = HeadlessHost::new();
    let mut ui = UiBuilder::new();

    ui.container(&mut host, ContainerProps::new().name("hud"))
        .unwrap();
    host.drop_creations(true);

    let err = ui
        .text(&mut host, TextProps::new("oops").name("status"))
        .unwrap_err();

    let BuildError::CreationFailed { name, issued } = err else {
        panic!("expected CreationFailed");
    };
    assert!(name.ends_with("_status"));
    assert_eq!(issued.len(), 2);
    assert!(issued[0].ends_with("_hud"));
    assert_eq!(issued[1], name);
    let rendered = format!("creation failed: {}", BuildError::CreationFailed { name, issued });
    assert!(rendered.contains("_status"));
    assert!(rendered.contains("_hud"));
}
