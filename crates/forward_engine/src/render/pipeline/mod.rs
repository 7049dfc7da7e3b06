//! Pipeline state requests
//!
//! Blend, depth and cull settings are modelled as plain values. Each draw step
//! computes the state it needs and hands it to the backend, so every
//! transition is visible in a recording.

mod pipeline_state;

pub use pipeline_state::{BlendFactor, BlendMode, CullMode, DepthFunc, PipelineState};
