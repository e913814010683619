//! Doughnut chart of incident counts for the Techo dashboard.
//!
//! This crate is compiled to WebAssembly as part of the `widgets` bundle. It
//! turns the three counters published on the `statusChart` canvas
//! (`data-cerradas`, `data-abiertas`, `data-vencidas`) into ring segments and
//! paints them with the browser's 2D context. Geometry is kept separate from
//! drawing so it can be tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`dataset`] | Counter parsing with dashboard defaults |
//! | [`doughnut`] | Segment angles and ring layout |
//! | [`render`] | Canvas2D drawing |
//! | [`consts`] | Colors, labels, defaults, cutout ratio |

pub mod consts;
pub mod dataset;
pub mod doughnut;
pub mod render;
