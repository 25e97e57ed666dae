pub mod click;
pub mod pointer;
pub mod scroll;

pub use click::wire_document_clicks;
pub use pointer::{
    wire_card_tilt, wire_hero_spotlight, wire_ink_trail, wire_magnetic_buttons, wire_mouse_trail,
};
pub use scroll::{wire_header_and_progress, wire_parallax};
