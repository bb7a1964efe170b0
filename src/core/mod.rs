pub mod grid;
pub mod overlay;
pub mod resolver;
