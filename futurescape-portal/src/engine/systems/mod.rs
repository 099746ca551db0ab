//! Runtime systems shared by the scene and the page.

/// Window resize handling: viewport size and camera aspect ratio.
pub mod viewport;
