//! Port definitions for the explorer session.

pub mod frame_sink;
