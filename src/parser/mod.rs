mod load;
mod sections;

pub use load::*;
