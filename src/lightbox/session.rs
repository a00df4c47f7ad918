// SPDX-License-Identifier: MPL-2.0
//! Snapshot of the gallery being browsed in the lightbox.

/// The items of one container and the index currently shown.
///
/// A session is created by every `open` and dropped when the overlay is
/// fully closed; layout changes never touch it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxSession<S> {
    sources: Vec<S>,
    index: usize,
}

impl<S> LightboxSession<S> {
    /// Creates a session positioned at `index` (wrapped into range).
    ///
    /// Returns `None` for an empty item list.
    #[must_use]
    pub fn new(sources: Vec<S>, index: usize) -> Option<Self> {
        if sources.is_empty() {
            return None;
        }
        let index = index % sources.len();
        Some(Self { sources, index })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    #[must_use]
    pub fn current(&self) -> &S {
        &self.sources[self.index]
    }

    #[must_use]
    pub fn sources(&self) -> &[S] {
        &self.sources
    }

    /// Moves one item forward, wrapping after the last.
    pub fn advance(&mut self) -> usize {
        self.step(1)
    }

    /// Moves one item back, wrapping before the first.
    pub fn retreat(&mut self) -> usize {
        self.step(-1)
    }

    /// `(index + delta + len) mod len`, for any delta.
    fn step(&mut self, delta: isize) -> usize {
        let len = self.sources.len() as isize;
        self.index = (self.index as isize + delta).rem_euclid(len) as usize;
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(len: usize, index: usize) -> LightboxSession<usize> {
        LightboxSession::new((0..len).collect(), index).expect("non-empty session")
    }

    #[test]
    fn empty_sources_produce_no_session() {
        assert!(LightboxSession::<&str>::new(Vec::new(), 0).is_none());
    }

    #[test]
    fn advance_wraps_to_first() {
        let mut session = session(3, 0);
        assert_eq!(session.advance(), 1);
        assert_eq!(session.advance(), 2);
        assert_eq!(session.advance(), 0);
    }

    #[test]
    fn retreat_wraps_to_last() {
        let mut session = session(3, 0);
        assert_eq!(session.retreat(), 2);
        assert_eq!(*session.current(), 2);
    }

    #[test]
    fn advancing_len_times_is_identity() {
        for len in 1..7 {
            for start in 0..len {
                let mut session = session(len, start);
                for _ in 0..len {
                    session.advance();
                }
                assert_eq!(session.index(), start);
            }
        }
    }

    #[test]
    fn retreat_then_advance_is_identity() {
        for len in 1..7 {
            for start in 0..len {
                let mut session = session(len, start);
                session.retreat();
                session.advance();
                assert_eq!(session.index(), start);
            }
        }
    }

    #[test]
    fn single_item_session_stays_put() {
        let mut session = session(1, 0);
        assert_eq!(session.advance(), 0);
        assert_eq!(session.retreat(), 0);
    }

    #[test]
    fn start_index_is_wrapped_into_range() {
        assert_eq!(session(3, 7).index(), 1);
    }
}
