//! Rendering systems

pub mod lighting;
