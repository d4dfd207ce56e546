//! Foundation module - Core utilities and types
//!
//! This module provides the fundamental utilities the bounding layer is
//! built on:
//! - 2D math types and affine-matrix helpers
//! - Logging utilities

pub mod math;
pub mod logging;
