//! Presentation-state models.
//!
//! Plain Rust values with no DOM or timer access, so every transition is
//! unit-testable on the host. Components hold them in signals and call
//! their methods from event handlers.
//!
//! - [`essay`] - Essay request form and its submitted snapshot
//! - [`upload`] - Detector upload box and simulated detection
//! - [`handoff`] - Single-slot transfer of the snapshot between pages
//! - [`pricing`] - Base package, add-ons and totals
//! - [`presentation`] - Locale and view mode
//! - [`carousel`] - Showcase carousel, preview modal, click hint

pub mod carousel;
pub mod essay;
pub mod handoff;
pub mod presentation;
pub mod pricing;
pub mod upload;

pub use carousel::*;
pub use essay::*;
pub use handoff::*;
pub use presentation::*;
pub use pricing::*;
pub use upload::*;
