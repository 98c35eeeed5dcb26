//! Layer 4: The wall merge engine.
//!
//! Combines any number of backward-linked post chains, each newest first,
//! into one newest-first sequence. The merge keeps a frontier of chain
//! heads in an ordered set: pop the greatest, emit it, push its `previous`
//! back into the frontier, repeat. Chains are walked lazily, never
//! materialized up front.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::post::{Post, PostView};

/// Merged, newest-first view over a user's own posts plus the posts of
/// everyone they follow. Entries are shared handles on the original posts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Wall {
    posts: Vec<Arc<Post>>,
}

impl Wall {
    /// Priority-merge the given chain heads.
    ///
    /// The frontier is a set under the total post order, so structurally
    /// equal heads occupy one slot: a chain contributed twice yields each
    /// post once, and a stale capture of a chain folds into the longer
    /// capture at their shared tail. Each iteration removes one post and
    /// pushes at most one post from deeper in the same chain, so the posts
    /// left to visit shrink every step and the merge terminates.
    pub(crate) fn merge(heads: impl IntoIterator<Item = Arc<Post>>) -> Self {
        let mut frontier: BTreeSet<Arc<Post>> = heads.into_iter().collect();
        let mut posts = Vec::new();
        while let Some(newest) = frontier.pop_last() {
            if let Some(previous) = newest.previous_arc() {
                frontier.insert(Arc::clone(previous));
            }
            posts.push(newest);
        }
        Self { posts }
    }

    /// Walk the wall newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().map(|post| post.as_ref())
    }

    /// The most recent post on the wall.
    pub fn newest(&self) -> Option<&Post> {
        self.posts.first().map(|post| post.as_ref())
    }

    /// Flat projections of every post, newest first.
    pub fn views(&self) -> Vec<PostView> {
        self.iter().map(PostView::from).collect()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
