//! Browser-independent effect logic.
//!
//! Nothing in here touches `web-sys`; the DOM layer feeds pointer, scroll,
//! visibility and frame events in and writes the results back out.

pub mod click;
pub mod constants;
pub mod cooldown;
pub mod counter;
pub mod gate;
pub mod ink;
pub mod motion;
pub mod rng;
pub mod scramble;
pub mod typewriter;
pub mod visibility;
