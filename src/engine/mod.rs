//! The traversal engine: a stack of cursor triplets, one per nesting level.
//!
//! A traversal position is a multi-digit odometer. Every level holds a [`Triplet`]: the start and end cursors, along with the current one, over the container the parent level currently points at. Stacks are built out of two node types:
//! - [`Link`] for every level whose elements are containers themselves; it owns the stack of the level below it
//! - [`Bottom`] for the innermost level, whose elements are leaves
//!
//! Both implement [`Stack`], which provides initialization, increment and dereference. Since the node types nest according to the structure's type, a stack has a fixed depth and keeps a distinct cursor type for every level without any dynamic dispatch.
//!
//! [`Triplet`]: struct.Triplet.html " "
//! [`Link`]: struct.Link.html " "
//! [`Bottom`]: struct.Bottom.html " "
//! [`Stack`]: trait.Stack.html " "

#[cfg(all(test, feature = "std"))]
mod tests;

use core::fmt::Debug;
use crate::level::{Level, LevelMut};

/// The start, current and end cursors of one level of a traversal.
///
/// `current` always lies between `start` and `end` in traversal order; `current == end` means that the level is exhausted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Triplet<C> {
    /// The cursor to the first element of the level's container.
    pub start: C,
    /// The cursor to the element the level currently points at.
    pub current: C,
    /// The past-the-end cursor of the level's container.
    pub end: C,
}
impl<C: Clone + Eq> Triplet<C> {
    /// Creates a triplet spanning the whole specified container, with the current cursor at its start.
    #[inline]
    pub fn open<R>(range: &R) -> Self
    where R: Level<Cursor = C> + ?Sized,
    {
        let start = range.cursor_to_first();
        Self {
            current: start.clone(),
            start,
            end: range.cursor_past_last(),
        }
    }
    /// Returns `true` if the current cursor has reached the end, `false` otherwise.
    #[inline(always)]
    pub fn is_exhausted(&self) -> bool {
        self.current == self.end
    }
    /// Returns `true` if the level's container has no elements at all.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
    /// The cursor which initialization dereferences: `start` while the whole stack is being built for the first time, `current` otherwise.
    #[inline(always)]
    fn reference(&self, initial: bool) -> &C {
        if initial {
            &self.start
        } else {
            &self.current
        }
    }
    /// Moves the current cursor one step forward, unless it already is at the end.
    #[inline]
    fn step<R>(&mut self, range: &R)
    where R: Level<Cursor = C> + ?Sized,
    {
        if !self.is_exhausted() {
            self.current = range.advance_cursor(&self.current);
        }
    }
}

/// A stack of triplets covering a level of type `R` and every level nested inside it.
///
/// Implemented by [`Bottom`] and [`Link`]; the stack type for a whole structure is picked by [`Chain`].
///
/// [`Bottom`]: struct.Bottom.html " "
/// [`Link`]: struct.Link.html " "
/// [`Chain`]: ../chain/trait.Chain.html " "
pub trait Stack<R: Level + ?Sized>: Clone + Debug + Eq {
    /// The type of the values at the innermost level.
    type Leaf;
    /// The number of levels in the stack.
    const DEPTH: usize;

    /// Creates a stack for the specified container with the outermost triplet spanning it and every inner level vacant.
    fn open(range: &R) -> Self;
    /// Returns the triplet of the outermost level of the stack.
    fn outer(&self) -> &Triplet<R::Cursor>;
    /// Returns a *mutable* reference to the triplet of the outermost level of the stack.
    fn outer_mut(&mut self) -> &mut Triplet<R::Cursor>;
    /// Builds the inner levels top-down, starting from the outermost triplet as it currently is.
    ///
    /// Every level dereferences its *reference cursor* (the start cursor if `initial` is `true`, the current one otherwise) and opens the level below over the resulting container. Returns `false` if some level turned out to be empty; all levels below it are left vacant then.
    fn initialize(&mut self, range: &R, initial: bool) -> bool;
    /// Moves the innermost cursor to the next leaf, backtracking over exhausted levels and skipping empty containers at any depth. Returns `false` if the stack has been exhausted.
    fn increment(&mut self, range: &R) -> bool;
    /// Returns a reference to the leaf the stack points at, or `None` if the stack is exhausted or has not reached a leaf.
    fn leaf<'a>(&self, range: &'a R) -> Option<&'a Self::Leaf>;
}

/// A version of [`Stack`] with an added ability to acquire mutable access to the leaves.
///
/// Only implemented if every level of the stack implements [`LevelMut`], which makes everything below a read-only level read-only as well.
///
/// [`Stack`]: trait.Stack.html " "
/// [`LevelMut`]: ../level/trait.LevelMut.html " "
pub trait StackMut<R: LevelMut + ?Sized>: Stack<R> {
    /// Returns a *mutable* reference to the leaf the stack points at, or `None` if the stack is exhausted or has not reached a leaf.
    fn leaf_mut<'a>(&self, range: &'a mut R) -> Option<&'a mut Self::Leaf>;
}

/// The innermost level of a stack, whose elements are leaves.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bottom<C> {
    triplet: Triplet<C>,
}
impl<C> Bottom<C> {
    /// Returns the triplet of the level.
    #[inline(always)]
    pub const fn triplet(&self) -> &Triplet<C> {
        &self.triplet
    }
}
impl<R: Level + ?Sized> Stack<R> for Bottom<R::Cursor> {
    type Leaf = R::Element;
    const DEPTH: usize = 1;

    #[inline]
    fn open(range: &R) -> Self {
        Self {
            triplet: Triplet::open(range),
        }
    }
    #[inline(always)]
    fn outer(&self) -> &Triplet<R::Cursor> {
        &self.triplet
    }
    #[inline(always)]
    fn outer_mut(&mut self) -> &mut Triplet<R::Cursor> {
        &mut self.triplet
    }
    #[inline]
    fn initialize(&mut self, _range: &R, initial: bool) -> bool {
        *self.triplet.reference(initial) != self.triplet.end
    }
    #[inline]
    fn increment(&mut self, range: &R) -> bool {
        self.triplet.step(range);
        !self.triplet.is_exhausted()
    }
    #[inline]
    fn leaf<'a>(&self, range: &'a R) -> Option<&'a R::Element> {
        if self.triplet.is_exhausted() {
            None
        } else {
            Some(range.value_of(&self.triplet.current))
        }
    }
}
impl<R: LevelMut + ?Sized> StackMut<R> for Bottom<R::Cursor> {
    #[inline]
    fn leaf_mut<'a>(&self, range: &'a mut R) -> Option<&'a mut R::Element> {
        if self.triplet.is_exhausted() {
            None
        } else {
            Some(range.value_mut_at(&self.triplet.current))
        }
    }
}

/// A level of a stack whose elements are containers, together with the stack of the level below.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Link<C, S> {
    triplet: Triplet<C>,
    // None while vacant, i.e. before the level committed to a non-empty container.
    inner: Option<S>,
}
impl<C, S> Link<C, S> {
    /// Returns the triplet of the level.
    #[inline(always)]
    pub const fn triplet(&self) -> &Triplet<C> {
        &self.triplet
    }
    /// Returns the stack of the level below, or `None` if it's vacant.
    #[inline(always)]
    pub const fn inner(&self) -> Option<&S> {
        self.inner.as_ref()
    }
}
impl<R, S> Stack<R> for Link<R::Cursor, S>
where
    R: Level + ?Sized,
    R::Element: Level,
    S: Stack<R::Element>,
{
    type Leaf = S::Leaf;
    const DEPTH: usize = 1 + S::DEPTH;

    #[inline]
    fn open(range: &R) -> Self {
        Self {
            triplet: Triplet::open(range),
            inner: None,
        }
    }
    #[inline(always)]
    fn outer(&self) -> &Triplet<R::Cursor> {
        &self.triplet
    }
    #[inline(always)]
    fn outer_mut(&mut self) -> &mut Triplet<R::Cursor> {
        &mut self.triplet
    }
    fn initialize(&mut self, range: &R, initial: bool) -> bool {
        let reference = self.triplet.reference(initial);
        if *reference == self.triplet.end {
            self.inner = None;
            return false;
        }
        let sub_range = range.value_of(reference);
        self.inner
            .insert(S::open(sub_range))
            .initialize(sub_range, initial)
    }
    fn increment(&mut self, range: &R) -> bool {
        // After a failed initialization the inner stack is partially built and may still hold
        // leaves past its empty containers, so it always gets to move first.
        loop {
            if self.triplet.is_exhausted() {
                return false;
            }
            if let Some(inner) = &mut self.inner {
                if inner.increment(range.value_of(&self.triplet.current)) {
                    return true;
                }
            }
            self.triplet.step(range);
            if self.triplet.is_exhausted() {
                return false;
            }
            if self.initialize(range, false) {
                return true;
            }
        }
    }
    #[inline]
    fn leaf<'a>(&self, range: &'a R) -> Option<&'a S::Leaf> {
        if self.triplet.is_exhausted() {
            return None;
        }
        self.inner
            .as_ref()?
            .leaf(range.value_of(&self.triplet.current))
    }
}
impl<R, S> StackMut<R> for Link<R::Cursor, S>
where
    R: LevelMut + ?Sized,
    R::Element: LevelMut,
    S: StackMut<R::Element>,
{
    #[inline]
    fn leaf_mut<'a>(&self, range: &'a mut R) -> Option<&'a mut S::Leaf> {
        if self.triplet.is_exhausted() {
            return None;
        }
        self.inner
            .as_ref()?
            .leaf_mut(range.value_mut_at(&self.triplet.current))
    }
}

/// Builds a fully initialized stack over `range` with the outermost current cursor at `cursor`.
///
/// - If `cursor` is the first cursor, the stack is initialized as the leftmost position.
/// - If `cursor` is the past-the-end cursor, the stack is initialized as the leftmost position and then incremented until exhaustion, producing the canonical end state. There is no way to build the end state of the inner levels directly without knowing which path through the structure was valid last.
/// - Otherwise, initialization starts from the element at `cursor`.
///
/// If initialization runs into empty containers, the stack is incremented once, landing either on the next leaf or on the canonical end.
pub fn seat<R, S>(range: &R, cursor: R::Cursor) -> S
where
    R: Level + ?Sized,
    S: Stack<R>,
{
    let mut stack = S::open(range);
    if cursor == stack.outer().end {
        // The current cursor is at the start after opening, so this is the leftmost position.
        stack.initialize(range, true);
        exhaust(&mut stack, range);
        return stack;
    }
    let initial = cursor == stack.outer().start;
    stack.outer_mut().current = cursor;
    if !stack.initialize(range, initial) {
        stack.increment(range);
    }
    stack
}

/// Increments the stack until it's exhausted, returning the number of successful increments.
pub fn exhaust<R, S>(stack: &mut S, range: &R) -> usize
where
    R: Level + ?Sized,
    S: Stack<R>,
{
    let mut steps = 0;
    while stack.increment(range) {
        steps += 1;
    }
    steps
}
