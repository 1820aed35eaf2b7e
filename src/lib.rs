pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod journal;
pub mod mood;
pub mod projector;
pub mod scenes;
pub mod surface;
pub mod visualizer;
