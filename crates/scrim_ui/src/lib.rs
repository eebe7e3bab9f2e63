//! Scrim Declarative Layer
//!
//! Describe a widget, or a whole tree of widgets, declaratively and let
//! this crate turn the description into correctly-ordered, correctly-
//! parented host creation calls:
//!
//! - **Props**: partial per-kind configurations with builder methods
//! - **Default Resolution**: every unset field gets its documented default
//!   before the host sees it
//! - **Factories**: one host creation call per widget, name re-stamping,
//!   click handler registration
//! - **Tree Building**: depth-first creation with parent injection
//! - **Reveal Watch**: tick-driven deferred reveal of hidden trees
//!
//! # Example
//!
//! ```rust
//! use scrim_core::{ButtonPhase, PlayerId};
//! use scrim_host::{Anchor, HeadlessHost};
//! use scrim_ui::{ButtonProps, ContainerProps, TextProps, UiBuilder, UiNode};
//!
//! let mut host = HeadlessHost::new();
//! let mut ui = UiBuilder::new();
//!
//! let tree = ui
//!     .build_tree(
//!         &mut host,
//!         UiNode::container(ContainerProps::new().size([600.0, 300.0]).anchor(Anchor::Center))
//!             .child(UiNode::button(
//!                 ButtonProps::new()
//!                     .size([200.0, 60.0])
//!                     .on_click(|player| println!("play chosen by {:?}", player)),
//!             ))
//!             .child(UiNode::text(TextProps::new("Welcome!"))),
//!     )
//!     .unwrap();
//!
//! // Wire the host's button-event callback to `dispatch`.
//! let button = tree.children[0].handle;
//! assert!(ui.dispatch(PlayerId(1), button, ButtonPhase::Release));
//! ```

pub mod builder;
pub mod props;
pub mod tree;
pub mod watch;

mod resolve;

pub use builder::UiBuilder;
pub use props::{BaseProps, ButtonProps, ContainerProps, ImageProps, TextProps};
pub use tree::{HandleNode, UiNode};
pub use watch::{RevealWatch, WatchState};
