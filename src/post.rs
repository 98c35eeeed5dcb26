//! Layer 2: The post chain.
//!
//! A [`Post`] is one immutable message node, linked backward to the author's
//! previous post. A user's history is just the newest post; everything older
//! hangs off `previous` links and is shared between snapshots by `Arc`.
//!
//! The total "more recent" order over posts also lives here. It is the merge
//! key for walls and the equality notion for whole chains, so it has to be a
//! genuine total order with deterministic tiebreaks.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::identity::Username;
use crate::time::Timestamp;

/// One immutable post.
///
/// Built only by [`Snapshot::post`](crate::Snapshot::post), which maintains
/// the chain invariant: `previous` belongs to the same author and carries the
/// timestamps the caller appended in order. Equality is structural over the
/// whole chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    author: Username,
    text: String,
    posted_at: Timestamp,
    previous: Option<Arc<Post>>,
}

impl Post {
    pub(crate) fn new(
        author: Username,
        text: String,
        posted_at: Timestamp,
        previous: Option<Arc<Post>>,
    ) -> Self {
        Self {
            author,
            text,
            posted_at,
            previous,
        }
    }

    pub fn author(&self) -> &Username {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn posted_at(&self) -> Timestamp {
        self.posted_at
    }

    /// The author's previous post, toward the old end of the chain.
    pub fn previous(&self) -> Option<&Post> {
        self.previous.as_deref()
    }

    pub(crate) fn previous_arc(&self) -> Option<&Arc<Post>> {
        self.previous.as_ref()
    }
}

/// Greater means "ranks more recent".
///
/// Timestamp first, then author, then text, and finally the previous chain:
/// a post with history outranks an otherwise-equal post without, and two
/// posts with history recurse the full comparison. `None < Some` on the
/// `previous` link gives exactly that ranking. The wall merge relies on this
/// order being total and agreeing with structural equality.
impl Ord for Post {
    fn cmp(&self, other: &Self) -> Ordering {
        self.posted_at
            .cmp(&other.posted_at)
            .then_with(|| self.author.cmp(&other.author))
            .then_with(|| self.text.cmp(&other.text))
            .then_with(|| self.previous.cmp(&other.previous))
    }
}

impl PartialOrd for Post {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One user's own post history, newest first.
///
/// A cheap handle on the newest post. The chain stays alive for as long as
/// the timeline, or any snapshot or wall sharing it, does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timeline {
    head: Arc<Post>,
}

impl Timeline {
    pub(crate) fn new(head: Arc<Post>) -> Self {
        Self { head }
    }

    /// The newest post.
    pub fn head(&self) -> &Post {
        &self.head
    }

    /// Walk the chain newest to oldest. Always yields at least one post: a
    /// timeline only exists once its user has posted.
    pub fn iter(&self) -> Posts<'_> {
        Posts {
            next: Some(&self.head),
        }
    }
}

/// Iterator over a backward-linked post chain, newest first.
#[derive(Clone, Debug)]
pub struct Posts<'a> {
    next: Option<&'a Post>,
}

impl<'a> Iterator for Posts<'a> {
    type Item = &'a Post;

    fn next(&mut self) -> Option<Self::Item> {
        let post = self.next?;
        self.next = post.previous();
        Some(post)
    }
}

/// Flat projection of a post for presentation and serialization.
///
/// The chain types stay off the wire: a timeline or wall crosses a process
/// boundary as a sequence of these, so arbitrarily deep chains never hit
/// recursive encode or decode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    pub author: Username,
    pub text: String,
    pub posted_at: Timestamp,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            author: post.author.clone(),
            text: post.text.clone(),
            posted_at: post.posted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn name(raw: &str) -> Username {
        Username::parse(raw).expect("valid username")
    }

    fn at(ms: u64) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    /// Build a chain oldest-to-newest and return the newest post.
    fn chain(author: &str, posts: &[(&str, u64)]) -> Arc<Post> {
        let author = name(author);
        let mut head: Option<Arc<Post>> = None;
        for (text, ms) in posts {
            head = Some(Arc::new(Post::new(
                author.clone(),
                (*text).to_string(),
                at(*ms),
                head,
            )));
        }
        head.expect("chain needs at least one post")
    }

    #[test]
    fn later_timestamp_ranks_higher() {
        let early = chain("alice", &[("hello", 1)]);
        let late = chain("alice", &[("hello", 2)]);
        assert!(late > early);
    }

    #[test]
    fn timestamp_outweighs_author_and_text() {
        let early = chain("zoe", &[("zzz", 1)]);
        let late = chain("alice", &[("aaa", 2)]);
        assert!(late > early);
    }

    #[test]
    fn author_breaks_timestamp_ties() {
        let alice = chain("alice", &[("hello", 5)]);
        let bob = chain("bob", &[("hello", 5)]);
        assert!(bob > alice);
    }

    #[test]
    fn text_breaks_author_ties() {
        let apples = chain("alice", &[("apples", 5)]);
        let pears = chain("alice", &[("pears", 5)]);
        assert!(pears > apples);
    }

    #[test]
    fn history_outranks_no_history() {
        let bare = chain("alice", &[("hello", 5)]);
        let with_history = chain("alice", &[("old", 1), ("hello", 5)]);
        assert!(with_history > bare);
        assert_ne!(with_history, bare);
    }

    #[test]
    fn equal_heads_recurse_into_history() {
        let a = chain("alice", &[("apples", 1), ("hello", 5)]);
        let b = chain("alice", &[("pears", 1), ("hello", 5)]);
        assert!(b > a, "tie on heads must fall through to the older posts");
    }

    #[test]
    fn identical_chains_are_equal() {
        let a = chain("alice", &[("old", 1), ("hello", 5)]);
        let b = chain("alice", &[("old", 1), ("hello", 5)]);
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
    }

    #[test]
    fn timeline_iterates_newest_first() {
        let head = chain("alice", &[("one", 1), ("two", 2), ("three", 3)]);
        let timeline = Timeline::new(head);
        let texts: Vec<&str> = timeline.iter().map(Post::text).collect();
        assert_eq!(texts, ["three", "two", "one"]);
        assert_eq!(timeline.head().text(), "three");
    }

    #[test]
    fn view_projects_the_post() {
        let head = chain("alice", &[("hello", 7)]);
        let view = PostView::from(head.as_ref());
        assert_eq!(view.author.as_str(), "alice");
        assert_eq!(view.text, "hello");
        assert_eq!(view.posted_at, at(7));
    }

    #[test]
    fn view_serde_roundtrip() {
        let view = PostView::from(chain("alice", &[("hello", 7)]).as_ref());
        let json = serde_json::to_string(&view).expect("serialize");
        let back: PostView = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, view);
    }

    /// Small pools plus zero gaps so ties and shared structure show up often.
    fn post_strategy() -> impl Strategy<Value = Arc<Post>> {
        let author = prop_oneof![Just("alice"), Just("bob"), Just("carol")];
        let step = (0u64..3, prop_oneof![Just("ping"), Just("pong"), Just("hum")]);
        (author, proptest::collection::vec(step, 1..5)).prop_map(|(author, steps)| {
            let author = name(author);
            let mut head: Option<Arc<Post>> = None;
            let mut now = 0u64;
            for (gap, text) in steps {
                now += gap;
                head = Some(Arc::new(Post::new(
                    author.clone(),
                    text.to_string(),
                    at(now),
                    head,
                )));
            }
            head.expect("at least one step")
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            .. ProptestConfig::default()
        })]

        #[test]
        fn order_is_antisymmetric(a in post_strategy(), b in post_strategy()) {
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }

        #[test]
        fn order_agrees_with_equality(a in post_strategy(), b in post_strategy()) {
            prop_assert_eq!(a.cmp(&b) == std::cmp::Ordering::Equal, a == b);
        }

        #[test]
        fn order_is_transitive(
            a in post_strategy(),
            b in post_strategy(),
            c in post_strategy(),
        ) {
            if a <= b && b <= c {
                prop_assert!(a <= c);
            }
            if a >= b && b >= c {
                prop_assert!(a >= c);
            }
        }
    }
}
