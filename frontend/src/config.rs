//! Application configuration.
//!
//! Centralized configuration for the EssayPass front end.
//! Everything here is compile-time: the demo has no backend to ask.

/// Session-storage key holding the submitted essay request.
///
/// One writer (the composer page), one reader (the order page).
pub const HANDOFF_KEY: &str = "essayFormData";

/// Route of the composer page.
pub const ESSAY_WRITER_PATH: &str = "/ai-essay-writer";

/// Route the composer navigates to after submission.
pub const ORDER_PATH: &str = "/ai-essay-writer/task/123456";

/// Route of the AI detector page.
pub const DETECTOR_PATH: &str = "/ai-detector";

/// Simulated latency of the AI detection run (in milliseconds).
pub const DETECTION_DELAY_MS: u32 = 3_000;

/// Carousel autoplay period (in milliseconds).
pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;

/// Resolution of the carousel countdown.
///
/// The countdown is driven in ticks of this size so that a manual
/// selection can restart it without recreating the timer.
pub const CAROUSEL_TICK_MS: u32 = 250;

/// Delay before the "tap here" hint on the order page disappears.
pub const CLICK_HINT_DELAY_MS: u32 = 3_000;

/// Document extensions accepted by the detector upload box.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = [".docx", ".pdf"];

/// Maximum file size for the detector upload box (in bytes).
///
/// 10 MB limit.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Value of the `viewport` query parameter that marks an embedded mobile render.
pub const EMBEDDED_VIEWPORT: &str = "mobile";
