//! Layer 3: The user record.
//!
//! A [`User`] is name plus followed records plus newest post. Records are
//! never mutated; posting or following a user swaps in a replacement record
//! built from the old one.

use std::sync::Arc;

use crate::identity::Username;
use crate::post::Post;

/// One immutable user record.
///
/// `following` keeps follow order and permits duplicates: each follow
/// appends the followee's record as captured at that moment, so an entry is
/// a point-in-time value, not a live reference. Equality is structural over
/// name, follow list, and the whole post chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    name: Username,
    following: Vec<Arc<User>>,
    timeline: Option<Arc<Post>>,
}

impl User {
    pub(crate) fn new(
        name: Username,
        following: Vec<Arc<User>>,
        timeline: Option<Arc<Post>>,
    ) -> Self {
        Self {
            name,
            following,
            timeline,
        }
    }

    pub fn name(&self) -> &Username {
        &self.name
    }

    /// Followed records in follow order, duplicates included.
    pub fn following(&self) -> impl Iterator<Item = &User> {
        self.following.iter().map(|captured| captured.as_ref())
    }

    /// The user's newest post, if they ever posted.
    pub fn latest_post(&self) -> Option<&Post> {
        self.timeline.as_deref()
    }

    pub(crate) fn following_arcs(&self) -> &[Arc<User>] {
        &self.following
    }

    pub(crate) fn timeline_arc(&self) -> Option<&Arc<Post>> {
        self.timeline.as_ref()
    }

    /// Replacement record with a new timeline head.
    pub(crate) fn with_post(&self, head: Arc<Post>) -> Self {
        Self {
            name: self.name.clone(),
            following: self.following.clone(),
            timeline: Some(head),
        }
    }

    /// Replacement record with `captured` appended to the follow list.
    pub(crate) fn with_follow(&self, captured: Arc<User>) -> Self {
        let mut following = self.following.clone();
        following.push(captured);
        Self {
            name: self.name.clone(),
            following,
            timeline: self.timeline.clone(),
        }
    }
}
