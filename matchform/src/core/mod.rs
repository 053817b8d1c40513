mod element;
mod error;

pub use element::*;
pub use error::*;
