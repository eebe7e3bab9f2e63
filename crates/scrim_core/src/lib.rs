//! Scrim Core
//!
//! This crate provides the foundational primitives for the scrim UI layer:
//!
//! - **Widget Handles**: Opaque references to host-managed UI elements
//! - **Name Allocation**: Process-unique widget names with a diagnostic trail
//! - **Click Dispatch**: Routing host button events to registered handlers
//!
//! # Example
//!
//! ```rust
//! use scrim_core::{ButtonPhase, EventDispatcher, PlayerId, WidgetHandle};
//! use slotmap::SlotMap;
//!
//! // Handles normally come from the host; a slotmap stands in here.
//! let mut widgets: SlotMap<WidgetHandle, ()> = SlotMap::with_key();
//! let button = widgets.insert(());
//!
//! let mut dispatcher = EventDispatcher::new();
//! dispatcher.register(button, |player| {
//!     println!("clicked by {:?}", player);
//! });
//!
//! // Press phases are filtered out; only the release routes.
//! assert!(!dispatcher.dispatch(PlayerId(1), button, ButtonPhase::Press));
//! assert!(dispatcher.dispatch(PlayerId(1), button, ButtonPhase::Release));
//! ```

pub mod actor;
pub mod dispatch;
pub mod error;
pub mod handle;
pub mod names;
pub mod vec;

pub use actor::{PlayerId, Receiver, TeamId};
pub use dispatch::{ButtonPhase, ClickHandler, EventDispatcher};
pub use error::{BuildError, Result};
pub use handle::WidgetHandle;
pub use names::NameAllocator;
pub use vec::UiVec;
