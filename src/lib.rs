//! soapbox: a persistent, immutable social-graph engine.
//!
//! Users post to timelines, follow each other, and read walls that merge
//! their own posts with everyone they follow. Nothing is mutated in place:
//! every write takes a [`Snapshot`] and returns the next one (or the
//! [`Applied::Unchanged`] sentinel for no-ops), with all history shared
//! between snapshots by `Arc`.
//!
//! Modules in type dependency order:
//! - [`time`]: timestamps, the ordering primitive
//! - [`identity`]: validated usernames
//! - [`error`]: boundary validation errors
//! - [`post`]: the post chain, the total post order, timeline views
//! - [`user`]: immutable user records
//! - [`wall`]: the k-way wall merge
//! - [`state`]: snapshots and their operations

#![forbid(unsafe_code)]

pub mod error;
pub mod identity;
pub mod post;
pub mod state;
pub mod time;
pub mod user;
pub mod wall;

pub use error::{Error, InvalidUsername};
pub type Result<T> = std::result::Result<T, Error>;

// Re-export the working set at crate root for convenience
pub use crate::identity::Username;
pub use crate::post::{Post, PostView, Posts, Timeline};
pub use crate::state::{Applied, Snapshot};
pub use crate::time::Timestamp;
pub use crate::user::User;
pub use crate::wall::Wall;
