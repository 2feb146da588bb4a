pub mod analysis;
pub use analysis::*;

pub mod classifier;
pub use classifier::*;

pub mod combo;
pub use combo::*;

pub mod error;
pub use error::*;

pub mod search;
pub use search::*;

pub mod shape;
pub use shape::*;
