//! UI components for the EssayPass site.
//!
//! # Layout Components
//! - [`Header`] - Navigation, language switch and view-mode switch
//! - [`Hero`] - Headline with the deliverables carousel
//! - [`ViewModeFrame`] - Full-width or phone-frame wrapper
//!
//! # Feature Components
//! - [`DeliveryCarousel`] - Auto-advancing deliverable showcase
//! - [`EssayForm`] - Essay request composer
//! - [`OrderConfirmation`] - Add-ons, totals and sample previews
//! - [`DetectorUpload`] - Drag & drop upload with simulated detection
//! - [`WhyBanner`] - Detector page comparison banner

mod carousel;
mod detector;
mod essay_form;
mod header;
mod hero;
mod mobile_frame;
mod order;
mod why;

pub use carousel::*;
pub use detector::*;
pub use essay_form::*;
pub use header::*;
pub use hero::*;
pub use mobile_frame::*;
pub use order::*;
pub use why::*;
