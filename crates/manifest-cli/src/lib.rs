//! CLI library components for the latent manifest filler.

pub mod logging;
pub mod pipeline;
