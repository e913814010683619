//! Per-page widget wiring.
//!
//! ARCHITECTURE
//! ============
//! Each module finds its DOM contract points, drives the matching `state`
//! machine, and writes results back. A module whose elements are absent
//! installs nothing, so every page can run the full boot sequence.

pub mod cascade;
pub mod dashboard;
pub mod incidencias;
pub mod theme;
pub mod usuario_form;
