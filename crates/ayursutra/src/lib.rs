//! AyurSutra dosha scoring library.
//!
//! Turns a questionnaire submission (seven fixed categories, two to three
//! enumerated answers each) into a constitution report: vata/pitta/kapha
//! percentages, the dominant dosha, a balance classification, and the
//! static guidance attached to the dominant dosha.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
