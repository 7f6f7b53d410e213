//! User photo loading.

/// Photo decoding into premultiplied RGBA8.
pub mod decode;
