//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the async runtime and the menu, maps window input to
//! pointer events and reports menu notifications to the log.

mod core;
mod event_handler;
mod init;
mod input;
mod render;
mod shutdown;
mod types;

pub use core::OrbitApp;
