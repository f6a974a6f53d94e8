pub use error::{Result, SeqError};

pub mod alignment;
pub mod alphabet;
pub mod consensus;
pub mod error;
pub mod num;
pub mod seq;
pub mod translation;
