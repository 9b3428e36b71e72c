//! Data models produced by the extraction pipeline.

pub mod quotation;
