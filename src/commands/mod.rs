pub mod check;
pub mod options;
pub mod render;

pub use check::*;
pub use options::*;
pub use render::*;
