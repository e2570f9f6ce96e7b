pub mod config;
pub mod particle;
