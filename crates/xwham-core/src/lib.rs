//! Extraction of radius and potential-energy columns from molecular-dynamics
//! logs into frame-indexed tables for weighted-histogram analysis.

pub mod common;
pub mod domain;
pub mod modules;
