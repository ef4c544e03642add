//! Validators for the three entity kinds of a marketplace: the manifest,
//! protocol directories, and skill documents.
//!
//! Each validator records its checks on a [`Reporter`](crate::Reporter) and
//! returns `true` only if none of them failed.

pub mod marketplace;
pub mod protocol;
pub mod skill;

pub use marketplace::validate_marketplace;
pub use protocol::validate_protocol;
pub use skill::validate_skill;
