//! The rotating identity word
//!
//! The hero section reads "I am a <word>" and cycles through the role catalog
//! one step at a time. Each step updates three display surfaces together: the
//! word itself, the article ("a" vs "an"), and which role description is
//! active. It also tells the project filter about the new role so the page
//! never shows a word and a filter that disagree.
//!
//! A step is animated: the word enters a brief "changing" state, the text
//! swaps after a short delay, and the changing state clears after a longer
//! one. Both deadlines live in a single pending [`Transition`] that the tick
//! clock commits, so starting a new step replaces (and thereby cancels) any
//! deadline still outstanding. A step requested before the current swap has
//! committed is ignored rather than queued; rapid triggering can therefore
//! never leave a stale word on screen.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::page::content::RoleCatalog;

/// Delay before the displayed text swaps to the new role.
pub const SWAP_DELAY: Duration = Duration::from_millis(150);
/// Delay before the transitional "changing" state clears.
pub const SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Indefinite article shown before the identity word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Article {
    A,
    An,
}

impl Article {
    pub fn as_str(&self) -> &'static str {
        match self {
            Article::A => "a",
            Article::An => "an",
        }
    }
}

/// Receiver for filter updates. The rotator knows nothing about the
/// collaborator beyond this: it accepts a string value.
pub trait FilterSink {
    fn set_filter(&mut self, value: &str);
}

/// The three display surfaces the rotator owns, plus the transitional flag.
///
/// During a transition the word lags the selection until the swap deadline
/// commits; everything here reflects what is on screen, not what was chosen.
#[derive(Debug, Clone)]
pub struct RoleDisplay {
    pub word: String,
    pub article: Article,
    /// Index of the single active description.
    pub active_description: usize,
    /// True while the word is in its transitional visual state.
    pub changing: bool,
}

/// An in-flight role switch with its two deadlines.
#[derive(Debug, Clone, Copy)]
struct Transition {
    target: usize,
    swap_at: Instant,
    settle_at: Instant,
    swapped: bool,
}

/// Rotates the identity word through the role catalog.
///
/// The selection only ever advances by one, wrapping modulo the catalog
/// length; there is no way to jump to an arbitrary role. The catalog must be
/// validated (non-empty) before construction.
pub struct IdentityRotator {
    catalog: RoleCatalog,
    selection: usize,
    display: RoleDisplay,
    transition: Option<Transition>,
}

impl IdentityRotator {
    /// Create a rotator starting on a uniformly random role and render it
    /// immediately, with no transitional animation.
    pub fn new(catalog: RoleCatalog, sink: &mut dyn FilterSink) -> Self {
        let start = rand::thread_rng().gen_range(0..catalog.len());
        Self::with_selection(catalog, start, sink)
    }

    /// Create a rotator starting on a specific role.
    pub fn with_selection(
        catalog: RoleCatalog,
        selection: usize,
        sink: &mut dyn FilterSink,
    ) -> Self {
        let mut rotator = Self {
            display: RoleDisplay {
                word: String::new(),
                article: Article::A,
                active_description: 0,
                changing: false,
            },
            catalog,
            selection,
            transition: None,
        };
        rotator.apply(selection, sink);
        rotator
    }

    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn display(&self) -> &RoleDisplay {
        &self.display
    }

    /// Whether a step is still waiting for its text swap.
    pub fn swap_pending(&self) -> bool {
        matches!(self.transition, Some(t) if !t.swapped)
    }

    /// Advance to the next role, wrapping at the end of the catalog.
    ///
    /// Returns false (and does nothing) if the current step's text swap has
    /// not committed yet. A step whose swap has committed but whose changing
    /// state is still clearing is replaced outright, which cancels the stale
    /// clear deadline.
    pub fn advance(&mut self, now: Instant) -> bool {
        if self.swap_pending() {
            return false;
        }
        self.selection = (self.selection + 1) % self.catalog.len();
        self.display.changing = true;
        self.transition = Some(Transition {
            target: self.selection,
            swap_at: now + SWAP_DELAY,
            settle_at: now + SETTLE_DELAY,
            swapped: false,
        });
        true
    }

    /// Commit any deadline that has passed.
    pub fn tick(&mut self, now: Instant, sink: &mut dyn FilterSink) {
        let Some(mut transition) = self.transition.take() else {
            return;
        };
        if !transition.swapped && now >= transition.swap_at {
            transition.swapped = true;
            self.apply(transition.target, sink);
        }
        if transition.swapped && now >= transition.settle_at {
            self.display.changing = false;
            return;
        }
        self.transition = Some(transition);
    }

    /// The render step: update word, article, and active description for
    /// `index`, and notify the filter collaborator.
    fn apply(&mut self, index: usize, sink: &mut dyn FilterSink) {
        let name = self.catalog.role(index);
        self.display.word = name.to_string();
        self.display.article = if self.catalog.takes_an(index) {
            Article::An
        } else {
            Article::A
        };
        self.display.active_description = index;
        sink.set_filter(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::content::sample_profile;

    /// Records every filter value it is handed.
    struct RecordingSink {
        values: Vec<String>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self { values: Vec::new() }
        }

        fn last(&self) -> &str {
            self.values.last().map(String::as_str).unwrap_or("")
        }
    }

    impl FilterSink for RecordingSink {
        fn set_filter(&mut self, value: &str) {
            self.values.push(value.to_string());
        }
    }

    fn rotator_at(selection: usize) -> (IdentityRotator, RecordingSink) {
        let mut sink = RecordingSink::new();
        let catalog = sample_profile().roles;
        let rotator = IdentityRotator::with_selection(catalog, selection, &mut sink);
        (rotator, sink)
    }

    /// Drive a full transition to completion.
    fn settle(rotator: &mut IdentityRotator, sink: &mut RecordingSink, from: Instant) -> Instant {
        let after = from + SETTLE_DELAY + Duration::from_millis(10);
        rotator.tick(after, sink);
        after
    }

    #[test]
    fn test_initial_render_consistent() {
        let catalog = sample_profile().roles;
        for i in 0..catalog.len() {
            let (rotator, sink) = rotator_at(i);
            let display = rotator.display();
            assert_eq!(display.word, catalog.role(i));
            assert_eq!(display.active_description, i);
            assert_eq!(
                display.article,
                if catalog.takes_an(i) { Article::An } else { Article::A }
            );
            assert!(!display.changing);
            assert_eq!(sink.values, vec![catalog.role(i).to_string()]);
        }
    }

    #[test]
    fn test_random_start_in_range() {
        let mut sink = RecordingSink::new();
        for _ in 0..50 {
            let rotator = IdentityRotator::new(sample_profile().roles, &mut sink);
            assert!(rotator.selection() < rotator.catalog().len());
        }
    }

    #[test]
    fn test_advance_increments_and_wraps() {
        let n = sample_profile().roles.len();
        for i in 0..n {
            let (mut rotator, mut sink) = rotator_at(i);
            let now = Instant::now();
            assert!(rotator.advance(now));
            assert_eq!(rotator.selection(), (i + 1) % n);
        }
    }

    #[test]
    fn test_swap_commits_after_delay() {
        let (mut rotator, mut sink) = rotator_at(0);
        let now = Instant::now();
        rotator.advance(now);

        // Before the swap deadline the old word is still displayed.
        rotator.tick(now + Duration::from_millis(50), &mut sink);
        assert_eq!(rotator.display().word, "designer");
        assert!(rotator.display().changing);

        // After the swap deadline the new word and article appear, but the
        // changing state holds until the settle deadline.
        rotator.tick(now + SWAP_DELAY, &mut sink);
        assert_eq!(rotator.display().word, "engineer");
        assert_eq!(rotator.display().article, Article::An);
        assert!(rotator.display().changing);

        rotator.tick(now + SETTLE_DELAY, &mut sink);
        assert!(!rotator.display().changing);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        // designer -> engineer -> ... -> developer -> designer
        let (mut rotator, mut sink) = rotator_at(0);
        assert_eq!(rotator.display().article, Article::A);

        let mut now = Instant::now();
        for _ in 0..6 {
            assert!(rotator.advance(now));
            now = settle(&mut rotator, &mut sink, now);
        }
        assert_eq!(rotator.selection(), 0);
        assert_eq!(rotator.display().word, "designer");
        assert_eq!(rotator.display().article, Article::A);
    }

    #[test]
    fn test_exactly_one_active_description() {
        let (mut rotator, mut sink) = rotator_at(4);
        let now = Instant::now();
        rotator.advance(now);
        settle(&mut rotator, &mut sink, now);
        assert_eq!(rotator.display().active_description, rotator.selection());
    }

    #[test]
    fn test_filter_receives_each_rendered_role_once() {
        let (mut rotator, mut sink) = rotator_at(0);
        let now = Instant::now();
        rotator.advance(now);
        settle(&mut rotator, &mut sink, now);
        assert_eq!(sink.values, vec!["designer".to_string(), "engineer".to_string()]);
    }

    #[test]
    fn test_reentrant_advance_ignored_before_swap() {
        let (mut rotator, mut sink) = rotator_at(0);
        let now = Instant::now();
        assert!(rotator.advance(now));
        // Second trigger inside the swap window is dropped, not queued.
        assert!(!rotator.advance(now + Duration::from_millis(10)));
        assert_eq!(rotator.selection(), 1);

        settle(&mut rotator, &mut sink, now);
        assert_eq!(rotator.display().word, "engineer");
        assert_eq!(sink.last(), "engineer");
    }

    #[test]
    fn test_advance_after_swap_cancels_stale_settle() {
        let (mut rotator, mut sink) = rotator_at(0);
        let start = Instant::now();
        rotator.advance(start);

        // Commit the swap but not the settle.
        let mid = start + SWAP_DELAY;
        rotator.tick(mid, &mut sink);
        assert!(rotator.display().changing);

        // A new step is allowed now. The replaced transition's settle
        // deadline (still in the future at this point) must not clear the
        // new step's changing state once it lapses.
        assert!(rotator.advance(mid));
        rotator.tick(start + SETTLE_DELAY + Duration::from_millis(50), &mut sink);
        assert!(rotator.display().changing);
        assert_eq!(rotator.display().word, "writer");

        rotator.tick(mid + SETTLE_DELAY, &mut sink);
        assert!(!rotator.display().changing);
        assert_eq!(rotator.display().word, "writer");
        assert_eq!(rotator.selection(), 2);
        assert_eq!(sink.last(), "writer");
    }

    #[test]
    fn test_display_matches_selection_once_settled() {
        let (mut rotator, mut sink) = rotator_at(0);
        let now = Instant::now();
        rotator.advance(now);
        rotator.advance(now + Duration::from_millis(1));
        rotator.advance(now + Duration::from_millis(2));
        let settled = settle(&mut rotator, &mut sink, now);
        let _ = settled;
        assert_eq!(
            rotator.display().word,
            rotator.catalog().role(rotator.selection())
        );
        assert_eq!(rotator.display().active_description, rotator.selection());
    }

    #[test]
    fn test_late_tick_commits_swap_and_settle_together() {
        let (mut rotator, mut sink) = rotator_at(2);
        let now = Instant::now();
        rotator.advance(now);
        // One very late tick covers both deadlines.
        rotator.tick(now + Duration::from_secs(1), &mut sink);
        assert_eq!(rotator.display().word, "scientist");
        assert!(!rotator.display().changing);
        assert!(!rotator.swap_pending());
    }
}
