pub mod arc;
pub mod fill;
pub mod text;
