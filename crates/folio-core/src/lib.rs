pub mod config;
pub mod constants;
pub mod contact;
pub mod content;
pub mod menu;
pub mod particles;
pub mod scroll;
pub mod showcase;
pub mod typing;

pub use config::*;
pub use contact::*;
pub use menu::*;
pub use particles::*;
pub use scroll::*;
pub use showcase::*;
pub use typing::*;
