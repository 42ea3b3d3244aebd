//! Classification of types into traversable levels and leaves.
//!
//! The module is home to the following items:
//! - [`Level`] and its optional extension, [`LevelMut`] — *traits for containers which expose a cursor over their elements*
//! - [`Classify`], together with the [`Nested`] and [`Terminal`] markers — *the type-level answer to "is this a container or a leaf?"*
//! - [`Frozen`] — a read-only wrapper which makes everything below it read-only
//! - [`Branch`] — a level which is one of two container kinds with the same element type, used for heterogeneous nesting
//!
//! [`Level`]: trait.Level.html " "
//! [`LevelMut`]: trait.LevelMut.html " "
//! [`Classify`]: trait.Classify.html " "
//! [`Nested`]: enum.Nested.html " "
//! [`Terminal`]: enum.Terminal.html " "
//! [`Frozen`]: struct.Frozen.html " "
//! [`Branch`]: enum.Branch.html " "

#[cfg(feature = "alloc")]
mod alloc_impl;
mod arrayvec_impl;
#[cfg(feature = "smallvec")]
mod smallvec_impl;
mod leaf;

#[cfg(all(test, feature = "std"))]
mod tests;

use core::{
    fmt::Debug,
    ops::Deref,
};

/// Containers which can be walked element by element with a cursor.
///
/// A level does not own any traversal state: cursors are plain values produced and consumed by the level, which makes them trivially copyable into the triplet stack of a traversal.
pub trait Level {
    /// The type of the values in the container.
    type Element;
    /// The type for the cursor which will be used for keeping track of positions within the container.
    ///
    /// Must be very cheaply clonable, but not required to be `Copy`. Two cursors obtained from the same container compare equal if and only if they point to the same position.
    type Cursor: Clone + Debug + Eq;

    /// Returns the cursor pointing to the first element, or the same value as `cursor_past_last` if the container is empty.
    fn cursor_to_first(&self) -> Self::Cursor;
    /// Returns the cursor pointing one step past the last element.
    fn cursor_past_last(&self) -> Self::Cursor;
    /// Returns the cursor one step further than the specified one.
    ///
    /// It's a logic error to advance the `cursor_past_last` cursor, which may panic.
    fn advance_cursor(&self, cursor: &Self::Cursor) -> Self::Cursor;
    /// Returns a reference to the element at the specified cursor.
    ///
    /// # Panics
    /// Required to panic if the cursor does not point to an element of the container.
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Element;

    /// Returns `true` if the container has no elements, `false` otherwise.
    #[inline]
    fn is_empty_level(&self) -> bool {
        self.cursor_to_first() == self.cursor_past_last()
    }
}

/// Levels which additionally provide mutable access to their elements.
///
/// Only the elements can be modified through this trait, never the container itself, i.e. cursors stay valid across calls to `value_mut_at`.
pub trait LevelMut: Level {
    /// Returns a *mutable* reference to the element at the specified cursor.
    ///
    /// # Panics
    /// Required to panic if the cursor does not point to an element of the container.
    fn value_mut_at(&mut self, cursor: &Self::Cursor) -> &mut Self::Element;
}

/// Marker for types which are traversable levels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Nested {}
/// Marker for leaf types, at which a chain of levels ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Terminal {}

/// Type-level classification of a type as either a traversable level or a leaf.
///
/// Every element type stored in a flattened structure needs this trait: containers implement it with `Kind = Nested` (alongside [`Level`]), leaves with `Kind = Terminal`. Types without an implementation cannot be flattened, which is caught at compile time. Use the [`impl_leaf!`] macro to register your own leaf types.
///
/// [`Level`]: trait.Level.html " "
/// [`impl_leaf!`]: ../macro.impl_leaf.html " "
pub trait Classify {
    /// Either [`Nested`] or [`Terminal`].
    ///
    /// [`Nested`]: enum.Nested.html " "
    /// [`Terminal`]: enum.Terminal.html " "
    type Kind;
}

/// Registers one or more types as leaves, i.e. implements [`Classify`] for them with `Kind = Terminal`.
///
/// ```
/// # use recursed::{impl_leaf, flatten};
/// #[derive(Debug, PartialEq)]
/// struct Celsius(f32);
/// impl_leaf!(Celsius);
///
/// let readings = [[Celsius(20.5), Celsius(21.0)], [Celsius(19.0), Celsius(18.5)]];
/// assert_eq!(flatten(&readings).size(), 4);
/// ```
///
/// [`Classify`]: level/trait.Classify.html " "
#[macro_export]
macro_rules! impl_leaf {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::level::Classify for $ty {
                type Kind = $crate::level::Terminal;
            }
        )+
    };
}

/// A read-only wrapper around a level.
///
/// `Frozen` delegates [`Level`] to the wrapped container but deliberately does not implement [`LevelMut`]: whatever is reachable only through a frozen level is read-only for a traversal, even if the inner containers are mutable by themselves.
///
/// ```compile_fail
/// # use recursed::{flatten_mut, Frozen};
/// let mut grid = vec![Frozen(vec![1, 2]), Frozen(vec![3])];
/// let mut range = flatten_mut(&mut grid);
/// *range.begin().get_mut() += 1;
/// ```
///
/// [`Level`]: trait.Level.html " "
/// [`LevelMut`]: trait.LevelMut.html " "
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Frozen<T: ?Sized>(pub T);
impl<T> Frozen<T> {
    /// Wraps the specified level.
    #[inline(always)]
    pub const fn new(inner: T) -> Self {
        Self(inner)
    }
    /// Unwraps the level, making it mutable again.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_inner(self) -> T {
        self.0
    }
}
impl<T: ?Sized> Deref for Frozen<T> {
    type Target = T;
    #[inline(always)]
    fn deref(&self) -> &T {
        &self.0
    }
}
impl<T: ?Sized> AsRef<T> for Frozen<T> {
    #[inline(always)]
    fn as_ref(&self) -> &T {
        &self.0
    }
}
impl<T> From<T> for Frozen<T> {
    #[inline(always)]
    fn from(inner: T) -> Self {
        Self(inner)
    }
}
impl<T: Level + ?Sized> Level for Frozen<T> {
    type Element = T::Element;
    type Cursor = T::Cursor;

    #[inline(always)]
    fn cursor_to_first(&self) -> Self::Cursor {
        self.0.cursor_to_first()
    }
    #[inline(always)]
    fn cursor_past_last(&self) -> Self::Cursor {
        self.0.cursor_past_last()
    }
    #[inline(always)]
    fn advance_cursor(&self, cursor: &Self::Cursor) -> Self::Cursor {
        self.0.advance_cursor(cursor)
    }
    #[inline(always)]
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Element {
        self.0.value_of(cursor)
    }
}
impl<T: ?Sized> Classify for Frozen<T> {
    type Kind = Nested;
}

/// Shared references to levels are read-only levels themselves, like [`Frozen`].
///
/// ```compile_fail
/// # use recursed::flatten_mut;
/// let (first, second) = (vec![1_i32, 2], vec![3_i32]);
/// let mut borrowed = vec![&first, &second];
/// let mut range = flatten_mut(&mut borrowed);
/// *range.begin().get_mut() += 1;
/// ```
///
/// [`Frozen`]: struct.Frozen.html " "
impl<T: Level + ?Sized> Level for &T {
    type Element = T::Element;
    type Cursor = T::Cursor;

    #[inline(always)]
    fn cursor_to_first(&self) -> Self::Cursor {
        (**self).cursor_to_first()
    }
    #[inline(always)]
    fn cursor_past_last(&self) -> Self::Cursor {
        (**self).cursor_past_last()
    }
    #[inline(always)]
    fn advance_cursor(&self, cursor: &Self::Cursor) -> Self::Cursor {
        (**self).advance_cursor(cursor)
    }
    #[inline(always)]
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Element {
        (**self).value_of(cursor)
    }
}
impl<T: Level + ?Sized> Classify for &T {
    type Kind = Nested;
}

/// A level which is one of two container kinds sharing the same element type.
///
/// This is how sibling branches of a structure can use different concrete containers at the same depth: a `Vec<Branch<[i32; 2], Vec<i32>>>` has fixed-size and growable sequences side by side. The cursor of a `Branch` is a `Branch` of the cursors of its variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Branch<A, B> {
    /// The first container kind.
    Left(A),
    /// The second container kind.
    Right(B),
}
impl<A, B> Branch<A, B> {
    /// Converts from `&Branch<A, B>` to `Branch<&A, &B>`.
    #[inline]
    pub const fn as_ref(&self) -> Branch<&A, &B> {
        match self {
            Self::Left(x) => Branch::Left(x),
            Self::Right(x) => Branch::Right(x),
        }
    }
    /// Converts from `&mut Branch<A, B>` to `Branch<&mut A, &mut B>`.
    #[inline]
    pub fn as_mut(&mut self) -> Branch<&mut A, &mut B> {
        match self {
            Self::Left(x) => Branch::Left(x),
            Self::Right(x) => Branch::Right(x),
        }
    }
    /// Returns `true` if this is the `Left` variant, `false` otherwise.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(..))
    }
}

#[cold]
#[inline(never)]
#[cfg_attr(debug_assertions, track_caller)]
fn mismatched_branch_cursor() -> ! {
    panic!("a cursor for one variant of a Branch was used on the other variant")
}

impl<A, B> Level for Branch<A, B>
where
    A: Level,
    B: Level<Element = A::Element>,
{
    type Element = A::Element;
    type Cursor = Branch<A::Cursor, B::Cursor>;

    #[inline]
    fn cursor_to_first(&self) -> Self::Cursor {
        match self {
            Self::Left(x) => Branch::Left(x.cursor_to_first()),
            Self::Right(x) => Branch::Right(x.cursor_to_first()),
        }
    }
    #[inline]
    fn cursor_past_last(&self) -> Self::Cursor {
        match self {
            Self::Left(x) => Branch::Left(x.cursor_past_last()),
            Self::Right(x) => Branch::Right(x.cursor_past_last()),
        }
    }
    #[inline]
    fn advance_cursor(&self, cursor: &Self::Cursor) -> Self::Cursor {
        match (self, cursor) {
            (Self::Left(x), Branch::Left(c)) => Branch::Left(x.advance_cursor(c)),
            (Self::Right(x), Branch::Right(c)) => Branch::Right(x.advance_cursor(c)),
            _ => mismatched_branch_cursor(),
        }
    }
    #[inline]
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Element {
        match (self, cursor) {
            (Self::Left(x), Branch::Left(c)) => x.value_of(c),
            (Self::Right(x), Branch::Right(c)) => x.value_of(c),
            _ => mismatched_branch_cursor(),
        }
    }
}
impl<A, B> LevelMut for Branch<A, B>
where
    A: LevelMut,
    B: LevelMut<Element = A::Element>,
{
    #[inline]
    fn value_mut_at(&mut self, cursor: &Self::Cursor) -> &mut Self::Element {
        match (self, cursor) {
            (Self::Left(x), Branch::Left(c)) => x.value_mut_at(c),
            (Self::Right(x), Branch::Right(c)) => x.value_mut_at(c),
            _ => mismatched_branch_cursor(),
        }
    }
}
impl<A, B> Classify for Branch<A, B> {
    type Kind = Nested;
}

//─────────────────────────────────────┐
// Slices, arrays and pointer types    │
//─────────────────────────────────────┘
impl<T> Level for [T] {
    type Element = T;
    type Cursor = usize;

    #[inline(always)]
    fn cursor_to_first(&self) -> usize {
        0
    }
    #[inline(always)]
    fn cursor_past_last(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn advance_cursor(&self, cursor: &usize) -> usize {
        cursor + 1
    }
    #[inline(always)]
    fn value_of(&self, cursor: &usize) -> &T {
        &self[*cursor]
    }
}
impl<T> LevelMut for [T] {
    #[inline(always)]
    fn value_mut_at(&mut self, cursor: &usize) -> &mut T {
        &mut self[*cursor]
    }
}
impl<T> Classify for [T] {
    type Kind = Nested;
}

impl<T, const N: usize> Level for [T; N] {
    type Element = T;
    type Cursor = usize;

    #[inline(always)]
    fn cursor_to_first(&self) -> usize {
        0
    }
    #[inline(always)]
    fn cursor_past_last(&self) -> usize {
        N
    }
    #[inline(always)]
    fn advance_cursor(&self, cursor: &usize) -> usize {
        cursor + 1
    }
    #[inline(always)]
    fn value_of(&self, cursor: &usize) -> &T {
        &self[*cursor]
    }
}
impl<T, const N: usize> LevelMut for [T; N] {
    #[inline(always)]
    fn value_mut_at(&mut self, cursor: &usize) -> &mut T {
        &mut self[*cursor]
    }
}
impl<T, const N: usize> Classify for [T; N] {
    type Kind = Nested;
}
