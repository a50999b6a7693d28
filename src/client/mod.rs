pub mod base;
pub mod polygon;
