//! Include/exclude instance filtering
//!
//! [`InstanceFilter`] combines two candidate lists with a fixed policy:
//!
//! | includes | excludes | result |
//! | --- | --- | --- |
//! | empty | empty | `match_if_empty` |
//! | empty | set | not excluded |
//! | set | empty | included |
//! | set | set | included and not excluded |
//!
//! What "matches a candidate" means is decided separately by a [`Matcher`]:
//! value equality by default, glob matching with [`GlobMatcher`], or any
//! `Fn(&T, &T) -> bool`.

pub mod config;
pub mod glob;

pub use config::FilterConfig;
pub use glob::GlobMatcher;

use std::fmt;

/// Decides whether an instance matches a single candidate of a filter.
pub trait Matcher<T> {
    fn matches(&self, instance: &T, candidate: &T) -> bool;
}

/// Default matcher: `instance == candidate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Equality;

impl<T: PartialEq> Matcher<T> for Equality {
    fn matches(&self, instance: &T, candidate: &T) -> bool {
        instance == candidate
    }
}

impl<T, F> Matcher<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn matches(&self, instance: &T, candidate: &T) -> bool {
        self(instance, candidate)
    }
}

/// Filter over include and exclude candidates
///
/// When an instance matches both lists, the exclude wins.
#[derive(Clone)]
pub struct InstanceFilter<T, M = Equality> {
    includes: Vec<T>,
    excludes: Vec<T>,
    match_if_empty: bool,
    matcher: M,
}

impl<T: PartialEq> InstanceFilter<T, Equality> {
    /// Filter comparing instances to candidates by equality.
    ///
    /// `match_if_empty` is the result for every instance when both lists are
    /// empty.
    pub fn new(
        includes: impl IntoIterator<Item = T>,
        excludes: impl IntoIterator<Item = T>,
        match_if_empty: bool,
    ) -> Self {
        Self::with_matcher(includes, excludes, match_if_empty, Equality)
    }

    /// Like [`InstanceFilter::new`], treating absent lists as empty.
    pub fn from_optional(
        includes: Option<Vec<T>>,
        excludes: Option<Vec<T>>,
        match_if_empty: bool,
    ) -> Self {
        Self::new(
            includes.unwrap_or_default(),
            excludes.unwrap_or_default(),
            match_if_empty,
        )
    }
}

impl<T, M: Matcher<T>> InstanceFilter<T, M> {
    /// Filter with a custom per-candidate matcher.
    pub fn with_matcher(
        includes: impl IntoIterator<Item = T>,
        excludes: impl IntoIterator<Item = T>,
        match_if_empty: bool,
        matcher: M,
    ) -> Self {
        Self {
            includes: includes.into_iter().collect(),
            excludes: excludes.into_iter().collect(),
            match_if_empty,
            matcher,
        }
    }

    /// Whether `instance` passes this filter.
    pub fn matches(&self, instance: &T) -> bool {
        let has_includes = !self.includes.is_empty();
        let has_excludes = !self.excludes.is_empty();
        if !has_includes && !has_excludes {
            return self.match_if_empty;
        }

        let matched_includes = self.matches_any(instance, &self.includes);
        let matched_excludes = self.matches_any(instance, &self.excludes);

        if !has_includes {
            return !matched_excludes;
        }
        if !has_excludes {
            return matched_includes;
        }
        matched_includes && !matched_excludes
    }

    fn matches_any(&self, instance: &T, candidates: &[T]) -> bool {
        candidates
            .iter()
            .any(|candidate| self.matcher.matches(instance, candidate))
    }

    pub fn includes(&self) -> &[T] {
        &self.includes
    }

    pub fn excludes(&self) -> &[T] {
        &self.excludes
    }

    pub fn match_if_empty(&self) -> bool {
        self.match_if_empty
    }
}

impl<T: fmt::Debug, M> fmt::Debug for InstanceFilter<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceFilter")
            .field("includes", &self.includes)
            .field("excludes", &self.excludes)
            .field("match_if_empty", &self.match_if_empty)
            .finish_non_exhaustive()
    }
}

impl<T: fmt::Display, M> fmt::Display for InstanceFilter<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "includes=[{}], excludes=[{}], match_if_empty={}",
            join(&self.includes),
            join(&self.excludes),
            self.match_if_empty
        )
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
