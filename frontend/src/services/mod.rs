//! Browser services.
//!
//! # Services
//!
//! - [`storage`] - `sessionStorage` slot for the order hand-off
//! - [`timer`] - cancelable one-shot and repeating timers
//! - [`dialog`] - native alert for placeholder notices
//!
//! Detection and payment are simulated; there is no network service.

pub mod dialog;
pub mod storage;
pub mod timer;

pub use dialog::*;
pub use storage::*;
pub use timer::*;
