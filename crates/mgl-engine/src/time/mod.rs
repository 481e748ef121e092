//! Time subsystem.
//!
//! Provides frame pacing and frame-rate reporting without coupling to the runtime.
//! Intended usage:
//! - one `FramePacer` per window, asked each loop iteration whether a frame is due
//! - one `FpsCounter` per window, ticked once per presented frame

mod pacer;

pub use pacer::{FpsCounter, FramePacer};
