//! Simulation systems, leaves first: rasterizer -> sampler -> motion /
//! repulsion -> render. Each system is a free function over the particle
//! slice plus an explicit `SimConfig`; none of them keeps hidden state.

pub mod motion;
pub mod raster;
pub mod render;
pub mod repulsion;
pub mod sampler;
