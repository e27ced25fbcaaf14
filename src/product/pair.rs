//! Pair type - exactly two values held together.

use std::fmt;

use super::focus::{FirstFocus, SecondFocus};

/// Two values, `first` and `second`, always both populated.
///
/// Equality and hashing are structural and are shared with the focused views
/// built over a pair: a `Pair`, its [`FirstFocus`] and its [`SecondFocus`] all
/// compare equal and hash alike.
///
/// # Examples
///
/// ```rust
/// use curie::product::Pair;
///
/// let pair = Pair::of("String").and(5).map_first(str::len);
/// assert_eq!(pair, Pair::new(6, 5));
/// assert_eq!(Pair::first(1).second('a'), Pair::second('a').first(1));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<F, S> {
    first: F,
    second: S,
}

// =============================================================================
// Staged Construction
// =============================================================================

impl Pair<(), ()> {
    /// Starts a pair from its first value; finish with [`PairOf::and`].
    #[inline]
    pub const fn of<F>(first: F) -> PairOf<F> {
        PairOf { first }
    }

    /// Starts a pair from its first value; finish with
    /// [`PairMissingSecond::second`].
    #[inline]
    pub const fn first<F>(first: F) -> PairMissingSecond<F> {
        PairMissingSecond { first }
    }

    /// Starts a pair from its second value; finish with
    /// [`PairMissingFirst::first`].
    #[inline]
    pub const fn second<S>(second: S) -> PairMissingFirst<S> {
        PairMissingFirst { second }
    }
}

/// A pair under construction from `Pair::of`.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct PairOf<F> {
    first: F,
}

impl<F> PairOf<F> {
    /// Supplies the second value.
    #[inline]
    pub fn and<S>(self, second: S) -> Pair<F, S> {
        Pair::new(self.first, second)
    }
}

/// A pair under construction that still needs its second value.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct PairMissingSecond<F> {
    first: F,
}

impl<F> PairMissingSecond<F> {
    /// Supplies the second value.
    #[inline]
    pub fn second<S>(self, second: S) -> Pair<F, S> {
        Pair::new(self.first, second)
    }
}

/// A pair under construction that still needs its first value.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct PairMissingFirst<S> {
    second: S,
}

impl<S> PairMissingFirst<S> {
    /// Supplies the first value.
    #[inline]
    pub fn first<F>(self, first: F) -> Pair<F, S> {
        Pair::new(first, self.second)
    }
}

impl<F, S> Pair<F, S> {
    /// Creates a pair directly from both values.
    #[inline]
    pub const fn new(first: F, second: S) -> Self {
        Self { first, second }
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Borrows the first value.
    #[inline]
    pub const fn isolate_first(&self) -> &F {
        &self.first
    }

    /// Borrows the second value.
    #[inline]
    pub const fn isolate_second(&self) -> &S {
        &self.second
    }

    /// Splits the pair into a tuple.
    #[inline]
    pub fn into_parts(self) -> (F, S) {
        (self.first, self.second)
    }

    // =========================================================================
    // Replacement and Mapping
    // =========================================================================

    /// Returns a new pair with the first value substituted.
    #[inline]
    pub fn replace_first<T>(self, first: T) -> Pair<T, S> {
        Pair::new(first, self.second)
    }

    /// Returns a new pair with the second value substituted.
    #[inline]
    pub fn replace_second<T>(self, second: T) -> Pair<F, T> {
        Pair::new(self.first, second)
    }

    /// Transforms the first value; the second is kept as is.
    #[inline]
    pub fn map_first<T, G>(self, function: G) -> Pair<T, S>
    where
        G: FnOnce(F) -> T,
    {
        Pair::new(function(self.first), self.second)
    }

    /// Transforms the second value; the first is kept as is.
    #[inline]
    pub fn map_second<T, G>(self, function: G) -> Pair<F, T>
    where
        G: FnOnce(S) -> T,
    {
        Pair::new(self.first, function(self.second))
    }

    // =========================================================================
    // Collapse and Predicates
    // =========================================================================

    /// Reduces both values to one result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use curie::product::Pair;
    ///
    /// assert_eq!(Pair::new(2, 3).collapse(|a, b| a * b), 6);
    /// ```
    #[inline]
    pub fn collapse<T, G>(self, function: G) -> T
    where
        G: FnOnce(F, S) -> T,
    {
        function(self.first, self.second)
    }

    /// Tests both values together.
    #[inline]
    pub fn satisfies<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&F, &S) -> bool,
    {
        predicate(&self.first, &self.second)
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs `effect` on the first value and returns `self`.
    #[inline]
    pub fn with_first_do<G>(self, effect: G) -> Self
    where
        G: FnOnce(&F),
    {
        effect(&self.first);
        self
    }

    /// Runs `effect` on the second value and returns `self`.
    #[inline]
    pub fn with_second_do<G>(self, effect: G) -> Self
    where
        G: FnOnce(&S),
    {
        effect(&self.second);
        self
    }

    /// Runs `effect` on both values and returns `self`.
    #[inline]
    pub fn with_both_do<G>(self, effect: G) -> Self
    where
        G: FnOnce(&F, &S),
    {
        effect(&self.first, &self.second);
        self
    }

    // =========================================================================
    // Focusing
    // =========================================================================

    /// Views this pair through its first slot.
    #[inline]
    pub const fn focus_first(self) -> FirstFocus<F, S> {
        FirstFocus::on(self)
    }

    /// Views this pair through its second slot.
    #[inline]
    pub const fn focus_second(self) -> SecondFocus<F, S> {
        SecondFocus::on(self)
    }
}

impl<F, S> From<(F, S)> for Pair<F, S> {
    fn from((first, second): (F, S)) -> Self {
        Self::new(first, second)
    }
}

impl<F, S> From<Pair<F, S>> for (F, S) {
    fn from(pair: Pair<F, S>) -> Self {
        pair.into_parts()
    }
}

impl<F: fmt::Display, S: fmt::Display> fmt::Display for Pair<F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Pair{{{},{}}}", self.first, self.second)
    }
}
