//! Application-level configuration.
//!
//! - [`DetectionParams`] — threshold and reporting limits for detection calls

pub mod detection_params;

pub use detection_params::DetectionParams;
