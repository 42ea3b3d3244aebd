//! Flattening ranges and the positions within them.
//!
//! A [`FlatRange`] borrows a nested structure and presents its leaves as one flat forward sequence, without copying anything. Positions ([`Position`]) are full triplet stacks and can be compared, cloned and advanced independently; [`Iter`] wraps a pair of positions into a regular iterator.
//!
//! [`FlatRangeMut`] and [`PositionMut`] are the counterparts for a mutably borrowed structure, which allow modifying the leaves in place as long as no level of the chain is read-only.
//!
//! [`FlatRange`]: struct.FlatRange.html " "
//! [`Position`]: struct.Position.html " "
//! [`Iter`]: struct.Iter.html " "
//! [`FlatRangeMut`]: struct.FlatRangeMut.html " "
//! [`PositionMut`]: struct.PositionMut.html " "


use core::{
    fmt::{self, Formatter, Debug},
    iter::FusedIterator,
};
use crate::{
    chain::Chain,
    engine::{self, Stack, StackMut},
    level::LevelMut,
    PastTheEndError,
};

type Leaf<R> = <<R as Chain>::Stack as Stack<R>>::Leaf;

/// Creates a flattening range over the leaves of the specified structure.
///
/// The structure's type must be traversable all the way down to a leaf type; flattening a leaf is rejected at compile time:
/// ```compile_fail
/// # use recursed::flatten;
/// let scalar = 42_i32;
/// let range = flatten(&scalar);
/// ```
#[inline(always)]
pub fn flatten<R: Chain + ?Sized>(root: &R) -> FlatRange<'_, R> {
    FlatRange::new(root)
}
/// Creates a flattening range over the leaves of the specified *mutably borrowed* structure.
#[inline(always)]
pub fn flatten_mut<R: Chain + ?Sized>(root: &mut R) -> FlatRangeMut<'_, R> {
    FlatRangeMut::new(root)
}

/// Returns the number of increments it takes to get from `first` to `last`.
///
/// # Panics
/// Will panic if `last` is not reachable from `first`, i.e. the end position is reached first.
pub fn distance<'a, R: Chain + ?Sized>(first: &Position<'a, R>, last: &Position<'a, R>) -> usize {
    let mut position = first.clone();
    let mut steps = 0;
    while position != *last {
        position.advance();
        steps += 1;
    }
    steps
}

/// A view over the leaves of a nested structure as one flat sequence.
///
/// The range only keeps a borrow of the structure. Nothing is cached: every call to [`begin`], [`end`] or [`size`] recomputes the result from the structure.
///
/// ```
/// # use recursed::flatten;
/// let data = vec![vec![1_i32, 2], vec![], vec![3]];
/// let range = flatten(&data);
/// assert_eq!(range.size(), 3);
/// assert_eq!(range.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
/// ```
///
/// [`begin`]: #method.begin " "
/// [`end`]: #method.end " "
/// [`size`]: #method.size " "
pub struct FlatRange<'a, R: Chain + ?Sized> {
    root: &'a R,
}
impl<'a, R: Chain + ?Sized> FlatRange<'a, R> {
    /// Creates a flattening range over the specified structure.
    #[inline(always)]
    pub const fn new(root: &'a R) -> Self {
        Self { root }
    }
    /// Returns a reference to the structure the range covers.
    #[inline(always)]
    pub const fn root(&self) -> &'a R {
        self.root
    }
    /// Returns the position of the leftmost leaf, or the end position if the structure has no leaves.
    #[inline]
    pub fn begin(&self) -> Position<'a, R> {
        Position::new(self.root, self.root.cursor_to_first())
    }
    /// Returns the canonical end position.
    ///
    /// This walks the whole structure, since the end state of the inner levels depends on which path through the structure is valid last.
    #[inline]
    pub fn end(&self) -> Position<'a, R> {
        trace!(depth = crate::chain::depth::<R>(), "canonicalizing end position");
        Position::new(self.root, self.root.cursor_past_last())
    }
    /// Counts the leaves by walking from [`begin`] to [`end`].
    ///
    /// [`begin`]: #method.begin " "
    /// [`end`]: #method.end " "
    pub fn size(&self) -> usize {
        let size = distance(&self.begin(), &self.end());
        trace!(size, "counted leaves");
        size
    }
    /// Returns `true` if the structure has no leaves at all, `false` otherwise.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin().is_end()
    }
    /// Returns an iterator over the leaves.
    #[inline]
    pub fn iter(&self) -> Iter<'a, R> {
        Iter::new(self.begin(), self.end())
    }
}
impl<R: Chain + ?Sized> Clone for FlatRange<'_, R> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
impl<R: Chain + ?Sized> Copy for FlatRange<'_, R> {}
impl<R: Chain + Debug + ?Sized> Debug for FlatRange<'_, R> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatRange")
            .field("root", &self.root)
            .finish()
    }
}
impl<'a, R: Chain + ?Sized> IntoIterator for FlatRange<'a, R> {
    type Item = &'a Leaf<R>;
    type IntoIter = Iter<'a, R>;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, R: Chain + ?Sized> IntoIterator for &FlatRange<'a, R> {
    type Item = &'a Leaf<R>;
    type IntoIter = Iter<'a, R>;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A position within the flattened leaves of a structure.
///
/// Two positions are equal if their whole triplet stacks are equal, not just their innermost cursors. Comparing positions over different structures is a logic error and gives meaningless results.
pub struct Position<'a, R: Chain + ?Sized> {
    root: &'a R,
    stack: R::Stack,
}
impl<'a, R: Chain + ?Sized> Position<'a, R> {
    /// Creates a position in the specified structure with its outermost cursor at `cursor`.
    ///
    /// If `cursor` is the first cursor of the structure, the position is the leftmost leaf; if it's the past-the-end cursor, the position is the canonical end. Empty containers are skipped, so the position never points into one.
    #[inline]
    pub fn new(root: &'a R, cursor: R::Cursor) -> Self {
        Self {
            root,
            stack: engine::seat(root, cursor),
        }
    }
    /// Returns a reference to the leaf at the position.
    ///
    /// # Panics
    /// Will panic if this is the end position.
    #[inline]
    #[cfg_attr(debug_assertions, track_caller)]
    pub fn get(&self) -> &'a Leaf<R> {
        self.try_get()
            .unwrap_or_else(|e| panic!("cannot dereference position: {}", e))
    }
    /// Returns a reference to the leaf at the position, or an error if this is the end position.
    ///
    /// # Errors
    /// Returns `PastTheEndError` if the position is the end position.
    #[inline]
    pub fn try_get(&self) -> Result<&'a Leaf<R>, PastTheEndError> {
        self.stack.leaf(self.root).ok_or(PastTheEndError)
    }
    /// Moves to the next leaf, or to the end position if there are no leaves left.
    ///
    /// # Panics
    /// Will panic if this already is the end position.
    #[inline]
    #[cfg_attr(debug_assertions, track_caller)]
    pub fn advance(&mut self) -> &mut Self {
        assert!(!self.is_end(), "cannot advance position: {}", PastTheEndError);
        self.stack.increment(self.root);
        self
    }
    /// Moves to the next leaf like [`advance`], returning the position as it was before the move.
    ///
    /// # Panics
    /// Will panic if this already is the end position.
    ///
    /// [`advance`]: #method.advance " "
    #[inline]
    #[cfg_attr(debug_assertions, track_caller)]
    pub fn advance_post(&mut self) -> Self {
        let previous = self.clone();
        self.advance();
        previous
    }
    /// Returns `true` if this is the end position, `false` otherwise.
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.stack.outer().is_exhausted()
    }
    /// Returns the triplet stack of the position.
    #[inline(always)]
    pub const fn triplets(&self) -> &R::Stack {
        &self.stack
    }
}
impl<R: Chain + ?Sized> Clone for Position<'_, R> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            stack: self.stack.clone(),
        }
    }
}
impl<R: Chain + ?Sized> PartialEq for Position<'_, R> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.stack == other.stack
    }
}
impl<R: Chain + ?Sized> Eq for Position<'_, R> {}
impl<R: Chain + ?Sized> Debug for Position<'_, R> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("stack", &self.stack)
            .finish()
    }
}

/// An iterator over the leaves between two positions.
///
/// Produced by [`FlatRange::iter`].
///
/// [`FlatRange::iter`]: struct.FlatRange.html#method.iter " "
pub struct Iter<'a, R: Chain + ?Sized> {
    front: Position<'a, R>,
    back: Position<'a, R>,
}
impl<'a, R: Chain + ?Sized> Iter<'a, R> {
    /// Creates an iterator which yields leaves starting at `front` and stopping when it becomes equal to `back`.
    ///
    /// `back` must be reachable from `front` by advancing, otherwise the iterator will panic upon running past the end of the structure.
    #[inline(always)]
    pub const fn new(front: Position<'a, R>, back: Position<'a, R>) -> Self {
        Self { front, back }
    }
    /// Returns the position of the next leaf to be yielded.
    #[inline(always)]
    pub const fn position(&self) -> &Position<'a, R> {
        &self.front
    }
}
impl<'a, R: Chain + ?Sized> Iterator for Iter<'a, R> {
    type Item = &'a Leaf<R>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let leaf = self.front.get();
        self.front.advance();
        Some(leaf)
    }
}
impl<R: Chain + ?Sized> FusedIterator for Iter<'_, R> {}
impl<R: Chain + ?Sized> Clone for Iter<'_, R> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}
impl<R: Chain + ?Sized> Debug for Iter<'_, R> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

/// A view over the leaves of a *mutably borrowed* nested structure.
///
/// Positions of a mutable range hold the unique borrow of the structure, so only one of them can exist at a time. Leaves can be modified through [`PositionMut::get_mut`] or [`for_each_mut`] if every level of the chain implements [`LevelMut`].
///
/// ```
/// # use recursed::flatten_mut;
/// let mut data = [vec![1_i32, 2], vec![3]];
/// flatten_mut(&mut data).for_each_mut(|x| *x *= 10);
/// assert_eq!(data, [vec![10, 20], vec![30]]);
/// ```
///
/// [`PositionMut::get_mut`]: struct.PositionMut.html#method.get_mut " "
/// [`for_each_mut`]: #method.for_each_mut " "
/// [`LevelMut`]: ../level/trait.LevelMut.html " "
pub struct FlatRangeMut<'a, R: Chain + ?Sized> {
    root: &'a mut R,
}
impl<'a, R: Chain + ?Sized> FlatRangeMut<'a, R> {
    /// Creates a flattening range over the specified mutably borrowed structure.
    #[inline(always)]
    pub fn new(root: &'a mut R) -> Self {
        Self { root }
    }
    /// Returns a read-only flattening range over the same structure.
    #[inline(always)]
    pub fn as_flat(&self) -> FlatRange<'_, R> {
        FlatRange::new(self.root)
    }
    /// Consumes the range, giving back the borrow of the structure.
    #[inline(always)]
    pub fn into_inner(self) -> &'a mut R {
        self.root
    }
    /// Returns the position of the leftmost leaf, or the end position if the structure has no leaves.
    #[inline]
    pub fn begin(&mut self) -> PositionMut<'_, R> {
        let cursor = self.root.cursor_to_first();
        PositionMut::new(self.root, cursor)
    }
    /// Returns the canonical end position.
    #[inline]
    pub fn end(&mut self) -> PositionMut<'_, R> {
        let cursor = self.root.cursor_past_last();
        PositionMut::new(self.root, cursor)
    }
    /// Counts the leaves by walking the structure.
    #[inline]
    pub fn size(&self) -> usize {
        self.as_flat().size()
    }
    /// Returns `true` if the structure has no leaves at all, `false` otherwise.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_flat().is_empty()
    }
    /// Calls the closure on every leaf in order, with mutable access.
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Leaf<R>),
        R: LevelMut,
        R::Stack: StackMut<R>,
    {
        let mut position = self.begin();
        while !position.is_end() {
            f(position.get_mut());
            position.advance();
        }
    }
}
impl<R: Chain + Debug + ?Sized> Debug for FlatRangeMut<'_, R> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatRangeMut")
            .field("root", &self.root)
            .finish()
    }
}

/// A position within the flattened leaves of a mutably borrowed structure.
///
/// Unlike [`Position`], this type holds the unique borrow of the structure and thus is not `Clone`.
///
/// [`Position`]: struct.Position.html " "
pub struct PositionMut<'a, R: Chain + ?Sized> {
    root: &'a mut R,
    stack: R::Stack,
}
impl<'a, R: Chain + ?Sized> PositionMut<'a, R> {
    /// Creates a position in the specified structure with its outermost cursor at `cursor`, with the same semantics as [`Position::new`].
    ///
    /// [`Position::new`]: struct.Position.html#method.new " "
    #[inline]
    pub fn new(root: &'a mut R, cursor: R::Cursor) -> Self {
        let stack = engine::seat(&*root, cursor);
        Self { root, stack }
    }
    /// Returns a reference to the leaf at the position.
    ///
    /// # Panics
    /// Will panic if this is the end position.
    #[inline]
    #[cfg_attr(debug_assertions, track_caller)]
    pub fn get(&self) -> &Leaf<R> {
        self.try_get()
            .unwrap_or_else(|e| panic!("cannot dereference position: {}", e))
    }
    /// Returns a reference to the leaf at the position, or an error if this is the end position.
    ///
    /// # Errors
    /// Returns `PastTheEndError` if the position is the end position.
    #[inline]
    pub fn try_get(&self) -> Result<&Leaf<R>, PastTheEndError> {
        self.stack.leaf(&*self.root).ok_or(PastTheEndError)
    }
    /// Returns a *mutable* reference to the leaf at the position.
    ///
    /// Only available if no level of the chain is read-only.
    ///
    /// # Panics
    /// Will panic if this is the end position.
    #[inline]
    #[cfg_attr(debug_assertions, track_caller)]
    pub fn get_mut(&mut self) -> &mut Leaf<R>
    where
        R: LevelMut,
        R::Stack: StackMut<R>,
    {
        self.try_get_mut()
            .unwrap_or_else(|e| panic!("cannot dereference position: {}", e))
    }
    /// Returns a *mutable* reference to the leaf at the position, or an error if this is the end position.
    ///
    /// # Errors
    /// Returns `PastTheEndError` if the position is the end position.
    #[inline]
    pub fn try_get_mut(&mut self) -> Result<&mut Leaf<R>, PastTheEndError>
    where
        R: LevelMut,
        R::Stack: StackMut<R>,
    {
        self.stack.leaf_mut(&mut *self.root).ok_or(PastTheEndError)
    }
    /// Moves to the next leaf, or to the end position if there are no leaves left.
    ///
    /// # Panics
    /// Will panic if this already is the end position.
    #[inline]
    #[cfg_attr(debug_assertions, track_caller)]
    pub fn advance(&mut self) -> &mut Self {
        assert!(!self.is_end(), "cannot advance position: {}", PastTheEndError);
        self.stack.increment(&*self.root);
        self
    }
    /// Returns `true` if this is the end position, `false` otherwise.
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.stack.outer().is_exhausted()
    }
    /// Returns the triplet stack of the position.
    #[inline(always)]
    pub const fn triplets(&self) -> &R::Stack {
        &self.stack
    }
}
impl<R: Chain + ?Sized> PartialEq for PositionMut<'_, R> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.stack == other.stack
    }
}
impl<R: Chain + ?Sized> Eq for PositionMut<'_, R> {}
impl<'a, R: Chain + ?Sized> PartialEq<Position<'a, R>> for PositionMut<'_, R> {
    #[inline]
    fn eq(&self, other: &Position<'a, R>) -> bool {
        self.stack == other.stack
    }
}
impl<R: Chain + ?Sized> Debug for PositionMut<'_, R> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionMut")
            .field("stack", &self.stack)
            .finish()
    }
}
