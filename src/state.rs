//! Layer 5: The social snapshot.
//!
//! A [`Snapshot`] is one immutable username-to-record map for the whole
//! system. Mutations return the next snapshot instead of editing in place:
//! the map is shallow-cloned with a single entry replaced, and every record
//! and post is behind an `Arc`, so consecutive snapshots share almost all of
//! their structure and old snapshots stay valid for as long as anyone holds
//! them.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::identity::Username;
use crate::post::{Post, Timeline};
use crate::time::Timestamp;
use crate::user::User;
use crate::wall::Wall;

/// Outcome of a mutation: the next snapshot, or the sentinel that the call
/// was a no-op and the input snapshot is still current.
///
/// An enum rather than `Option` because "nothing happened" is a real answer
/// callers branch on (unknown user, empty post text), not a missing value.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Applied {
    /// The operation produced this next snapshot.
    Updated(Snapshot),
    /// The operation did not apply; keep using the input snapshot.
    Unchanged,
}

impl Applied {
    pub fn is_updated(&self) -> bool {
        matches!(self, Applied::Updated(_))
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Applied::Unchanged)
    }

    /// The next snapshot, if the operation applied.
    pub fn updated(self) -> Option<Snapshot> {
        match self {
            Applied::Updated(next) => Some(next),
            Applied::Unchanged => None,
        }
    }

    /// The snapshot to keep working with: the next one, or `current` when
    /// the operation was a no-op.
    pub fn unwrap_or(self, current: Snapshot) -> Snapshot {
        match self {
            Applied::Updated(next) => next,
            Applied::Unchanged => current,
        }
    }
}

/// One immutable point-in-time state of the whole social graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    users: BTreeMap<Username, Arc<User>>,
}

impl Snapshot {
    /// The empty system: no users, no posts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a post to `author`'s timeline. An unknown author is created
    /// by their first post.
    ///
    /// Empty text is discarded with [`Applied::Unchanged`]. Timestamps are
    /// the caller's: posts are expected to arrive in time order and the
    /// engine neither reorders nor rejects them.
    pub fn post(&self, author: &Username, text: &str, at: Timestamp) -> Applied {
        if text.is_empty() {
            return Applied::Unchanged;
        }
        let existing = self.users.get(author);
        let previous = existing.and_then(|user| user.timeline_arc().cloned());
        let head = Arc::new(Post::new(author.clone(), text.to_string(), at, previous));
        let user = match existing {
            Some(user) => user.with_post(head),
            None => User::new(author.clone(), Vec::new(), Some(head)),
        };
        Applied::Updated(self.with_user(user))
    }

    /// Append `followee`'s record to `follower`'s follow list.
    ///
    /// Both users must already exist, otherwise [`Applied::Unchanged`]. The
    /// appended record is the followee as of this snapshot: posts they make
    /// later enter the follower's wall only through a fresh follow. Repeat
    /// follows append again; the wall merge shows each post once regardless.
    pub fn follow(&self, follower: &Username, followee: &Username) -> Applied {
        let (Some(user), Some(captured)) =
            (self.users.get(follower), self.users.get(followee))
        else {
            return Applied::Unchanged;
        };
        Applied::Updated(self.with_user(user.with_follow(Arc::clone(captured))))
    }

    pub fn user_exists(&self, name: &Username) -> bool {
        self.users.contains_key(name)
    }

    /// The named user's own posts, newest first. `None` for unknown users.
    pub fn timeline(&self, name: &Username) -> Option<Timeline> {
        let user = self.users.get(name)?;
        user.timeline_arc().cloned().map(Timeline::new)
    }

    /// The named user's wall: own posts merged with every followed record's
    /// posts as captured at follow time, newest first. `None` for unknown
    /// users; a known user always gets a wall, even an empty one.
    pub fn wall(&self, name: &Username) -> Option<Wall> {
        let user = self.users.get(name)?;
        let own = user.timeline_arc().cloned();
        let followed = user
            .following_arcs()
            .iter()
            .filter_map(|captured| captured.timeline_arc().cloned());
        Some(Wall::merge(own.into_iter().chain(followed)))
    }

    /// The named user's current record.
    pub fn user(&self, name: &Username) -> Option<&User> {
        self.users.get(name).map(|user| user.as_ref())
    }

    /// All user records, in name order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values().map(|user| user.as_ref())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Copy-on-write entry replacement: shallow map clone, one entry swapped.
    fn with_user(&self, user: User) -> Snapshot {
        let mut users = self.users.clone();
        users.insert(user.name().clone(), Arc::new(user));
        Snapshot { users }
    }
}
