//! Celeritas application framework.
//!
//! Provides the configuration dialog, the fixed-timestep frame loop, and the
//! winit application shell that drives the engine setup sequence.

pub mod app;
pub mod dialog;
pub mod frame_loop;
