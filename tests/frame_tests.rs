// Host-side build of the frame scheduling helpers.
// The main crate is wasm-only, so we include the module directly. `web-sys`
// compiles on the host but its calls panic off-wasm, so nothing here runs a frame.

#![allow(dead_code)]
#[path = "../src/frame.rs"]
mod frame;

#[test]
fn frame_helpers_accept_plain_callbacks() {
    let endless: fn(fn()) = frame::start_loop;
    let bounded: fn(fn() -> bool) = frame::run_frames;
    let once: fn(fn()) -> Option<i32> = frame::next_frame;
    assert!(endless as usize != 0);
    assert!(bounded as usize != 0);
    assert!(once as usize != 0);
}
