pub mod color;
pub mod constants;
pub mod error;
pub mod rect;
