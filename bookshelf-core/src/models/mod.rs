mod book;
mod validation;

pub use book::*;
pub use validation::*;
