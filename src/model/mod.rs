mod label;
mod model;
mod skeleton;

pub use label::*;
pub use model::*;
pub use skeleton::*;
