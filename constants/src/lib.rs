/// Shared tunables for the FutureScape landing page.
///
/// Scene geometry and animation rates, wizard timings and copy, and page
/// runtime thresholds live here so the portal crate has no magic numbers.
pub mod page;
pub mod scene;
pub mod wizard;
