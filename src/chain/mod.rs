//! Derivation of the chain of levels for a nested structure.
//!
//! Starting from the root type, the chain unwraps element types level by level until it reaches a type classified as a leaf. The result is a [`Stack`] type with one triplet per level, picked at compile time: there is no runtime walk over the structure's shape.
//!
//! ```
//! use recursed::chain::depth;
//! assert_eq!(depth::<Vec<[[u8; 4]; 4]>>(), 3);
//! assert_eq!(depth::<[i32]>(), 1);
//! ```
//!
//! [`Stack`]: ../engine/trait.Stack.html " "


use crate::{
    engine::{Bottom, Link, Stack},
    level::{Classify, Level, Nested, Terminal},
};

/// Traversable structures with a statically known nesting shape.
///
/// Implemented automatically for every [`Level`] whose element type implements [`Classify`], recursively through all nested levels. A structure for which this trait is not implemented cannot be flattened.
///
/// [`Level`]: ../level/trait.Level.html " "
/// [`Classify`]: ../level/trait.Classify.html " "
pub trait Chain: Level {
    /// The triplet stack covering every level of the structure.
    type Stack: Stack<Self>;
}
impl<R> Chain for R
where
    R: Level + ChainStep<<<R as Level>::Element as Classify>::Kind> + ?Sized,
    <R as Level>::Element: Classify,
{
    type Stack = <R as ChainStep<<<R as Level>::Element as Classify>::Kind>>::Stack;
}

/// One step of chain derivation, dispatched on the classification `K` of the level's element type.
///
/// For `K = Terminal` the level is the innermost one; for `K = Nested` the derivation continues into the element type.
pub trait ChainStep<K>: Level {
    /// The triplet stack starting at this level.
    type Stack: Stack<Self>;
}
impl<R: Level + ?Sized> ChainStep<Terminal> for R {
    type Stack = Bottom<R::Cursor>;
}
impl<R> ChainStep<Nested> for R
where
    R: Level + ?Sized,
    R::Element: Chain,
{
    type Stack = Link<R::Cursor, <R::Element as Chain>::Stack>;
}

/// The type of the leaves of a structure.
pub type LeafOf<R> = <<R as Chain>::Stack as Stack<R>>::Leaf;

/// Returns the nesting depth of the structure type, i.e. the number of triplets in its stack.
#[inline(always)]
pub const fn depth<R: Chain + ?Sized>() -> usize {
    <R::Stack as Stack<R>>::DEPTH
}
