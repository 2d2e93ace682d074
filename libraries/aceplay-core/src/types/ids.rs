/// ID types for Aceplay entities
///
/// All ids are server-assigned SQLite rowids. AUTOINCREMENT guarantees ids
/// are never reused, so two entities are the same record iff their assigned
/// ids are equal.

/// User identifier
pub type UserId = i64;

/// Track identifier
pub type TrackId = i64;

/// Playlist identifier
pub type PlaylistId = i64;
