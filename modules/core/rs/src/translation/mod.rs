//! Conversions between molecule types following the standard genetic code.

pub mod codons;
pub mod complementation;
pub mod protein;
pub mod transcription;
