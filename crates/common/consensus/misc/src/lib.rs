#![warn(clippy::unwrap_used)]

pub mod constants;
pub mod fork_data;
pub mod misc;
pub mod signing_data;
