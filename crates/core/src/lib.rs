pub mod detection;
pub mod drawing;
pub mod shared;
pub mod wake;
