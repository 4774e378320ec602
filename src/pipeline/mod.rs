pub mod load;
pub mod render;
pub mod sample;
pub mod source;
