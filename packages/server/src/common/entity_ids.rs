//! Typed ID definitions for the rank-tracking entities.

pub use super::id::Id;

/// Marker type for the account that owns locations.
pub struct User;

/// Marker type for business locations.
pub struct Location;

/// Marker type for tracked keywords.
pub struct Keyword;

/// Marker type for stored ranking rows.
pub struct Ranking;

pub type UserId = Id<User>;
pub type LocationId = Id<Location>;
pub type KeywordId = Id<Keyword>;
pub type RankingId = Id<Ranking>;
