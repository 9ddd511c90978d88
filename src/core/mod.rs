pub mod content;
pub mod placeholder;
pub mod scroll;
