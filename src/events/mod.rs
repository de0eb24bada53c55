pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_escape_closes_modal;
pub use pointer::{wire_card_clicks, wire_modal_dismiss};
