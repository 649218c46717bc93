//! Core matching pipeline: tokenization, resume structuring, scoring,
//! and per-posting content tailoring

pub mod profile;
pub mod scorer;
pub mod tailor;
pub mod tokenizer;
