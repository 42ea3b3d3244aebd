//! Flat forward traversal over the leaves of statically nested containers.
//!
//! ------------------------
//!
//! # Overview
//! Recursed lets you walk a container of containers (of any depth, with a different container kind on every level) as if it was one flat sequence of its innermost elements, without copying anything into new storage. The nesting shape is taken from the structure's type at compile time, so a `Vec<[VecDeque<u32>; 4]>` is known to be three levels deep with `u32` leaves before the program ever runs.
//!
//! A traversal position works like an odometer: it keeps one *triplet* of cursors (start, current and end) per level. Advancing moves the innermost cursor; when that level runs out, the level above moves on and every level below it is rebuilt from the new element. Empty containers at any depth are skipped transparently, so they never show up as positions.
//!
//! # Example
//! ```rust
//! use recursed::{flatten, flatten_mut, Branch};
//!
//! // Sibling branches may use different containers, as long as their elements agree.
//! let data: Vec<Branch<[i32; 2], Vec<i32>>> = vec![
//!     Branch::Left([1, 2]),
//!     Branch::Right(vec![]),
//!     Branch::Right(vec![3, 4, 5]),
//! ];
//! let range = flatten(&data);
//! assert_eq!(range.size(), 5);
//! assert_eq!(range.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
//!
//! // Positions can be stepped through manually too; the end position is always the same
//! // value, no matter how it was reached.
//! let mut position = range.begin();
//! while position != range.end() {
//!     position.advance();
//! }
//! assert!(position.is_end());
//!
//! // Mutably borrowed structures allow modifying the leaves, never the nesting itself.
//! let mut grid = [[1_i32, 2], [3, 4]];
//! flatten_mut(&mut grid).for_each_mut(|x| *x += 1);
//! assert_eq!(grid, [[2, 3], [4, 5]]);
//! ```
//!
//! # Levels and leaves
//! A container takes part in a traversal by implementing [`Level`] (and [`LevelMut`] to allow modifying its elements) together with [`Classify`]. Element types at the bottom of the structure need [`Classify`] as leaves, which is what the [`impl_leaf!`] macro does. Read-only levels, such as [`Frozen`] and shared references to levels, make everything below them read-only.
//!
//! Implementations provided out of the box:
//! - Levels: arrays, slices, [`ArrayVec`], [`Frozen`], [`Branch`], `&T` for any level `T`; with `alloc` also [`Vec`], [`VecDeque`] and [`Box`]; with `smallvec` also [`SmallVec`]
//! - Leaves: all primitive numeric types, `bool`, `char`, `()`, `str` and `&str`; with `alloc` also [`String`]
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std` for the crate. Currently, this only adds an [`Error`] trait implementation for [`PastTheEndError`].
//! - `alloc` (**enabled by default**) — adds `Level` implementations for standard library containers. *This does not require standard library support.*
//! - `smallvec` — adds a `Level` implementation for [`SmallVec`].
//! - `tracing` — emits `trace`-level events through the `tracing` crate when end positions are canonicalized and leaves are counted.
//! - `doc_cfg` — marks feature-gated items in the documentation. **Requires a nightly compiler.**
//!
//! # Public dependencies
//! - `arrayvec` (**required**) — `^0.5`
//! - `smallvec` (*optional*) — `^1.4`
//!
//! [`Level`]: level/trait.Level.html " "
//! [`LevelMut`]: level/trait.LevelMut.html " "
//! [`Classify`]: level/trait.Classify.html " "
//! [`Frozen`]: level/struct.Frozen.html " "
//! [`Branch`]: level/enum.Branch.html " "
//! [`impl_leaf!`]: macro.impl_leaf.html " "
//! [`PastTheEndError`]: struct.PastTheEndError.html " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`VecDeque`]: https://doc.rust-lang.org/std/collections/struct.VecDeque.html " "
//! [`Box`]: https://doc.rust-lang.org/std/boxed/struct.Box.html " "
//! [`String`]: https://doc.rust-lang.org/std/string/struct.String.html " "
//! [`SmallVec`]: https://docs.rs/smallvec/*/smallvec/struct.SmallVec.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_if_let_else,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)] // FIXME reenable when it gets fixed
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod util;

pub mod level;
#[doc(no_inline)]
pub use level::{Level, LevelMut, Classify, Frozen, Branch};

pub mod chain;
#[doc(no_inline)]
pub use chain::{Chain, LeafOf};

pub mod engine;

pub mod range;
pub use range::{
    flatten,
    flatten_mut,
    distance,
    FlatRange,
    FlatRangeMut,
    Position,
    PositionMut,
    Iter,
};

/// A prelude for using Recursed, containing the most used items for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::level::{Level, LevelMut, Classify, Frozen, Branch};
    #[doc(no_inline)]
    pub use crate::chain::Chain;
    #[doc(no_inline)]
    pub use crate::range::{flatten, flatten_mut, FlatRange, FlatRangeMut};
}

use core::fmt::{self, Formatter, Display};

/// The error type returned by fallible accessors of positions when used on the end position, which does not point to any leaf.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PastTheEndError;
impl Display for PastTheEndError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("the position is past the last leaf of the structure")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for PastTheEndError {}
