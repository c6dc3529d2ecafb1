//! Native value model type aliases.

/// A value in the native MessagePack data model.
///
/// Superset of the JSON model: binary blobs, extension values, and f32 are
/// representable here but not in [`MessageValue`](crate::MessageValue).
pub type NativeValue = rmpv::Value;

/// Message metadata as an ordered mapping over the native value model.
pub type NativeData = Vec<(String, NativeValue)>;
