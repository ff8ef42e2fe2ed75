//! Custom extractors whose rejections are rendered as envelopes.

pub mod json_body;

pub use json_body::JsonBody;
