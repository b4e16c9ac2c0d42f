//! JSON codec for the tonlib TL object model.

/// Typed tonlib_api object model and the JSON client envelope.
pub mod api;
/// Schema registry, field and variant codecs, discriminator resolution, and typed dispatch.
pub mod tl;
