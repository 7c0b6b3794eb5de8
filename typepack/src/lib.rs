//! An algebra over ordered lists of types.
//!
//! There are two layers. [`list`] holds type-level lists, resolved by the
//! trait solver: misuse such as taking the head of the empty list doesn't
//! compile. [`TypePack`] is a descriptor of a list of types, built from
//! [`TypeToken`]s, that carries the full set of algorithms: indexed access,
//! search, structural edits, deduplication and sorting under a
//! [`Comparator`].
//!
//! ```
//! use typepack::{pack, SizeOrderLess, TypeToken};
//!
//! let pack = pack![u64, u8, u32, u16, u8];
//! assert_eq!(pack.find(TypeToken::of::<u32>()), 2);
//! assert_eq!(pack.unique().sort(SizeOrderLess), pack![u8, u16, u32, u64]);
//! ```

extern crate self as typepack;

mod compare;
mod error;
pub mod list;
mod logic;
mod macros;
mod pack;
mod partial;

pub use typepack_macros::Token;
pub use typepack_token::{Token, TypeToken};

pub use compare::{
    And, BaseIsLess, Comparator, DerivedIsLess, IsBaseOf, IsSame, Mapper, NameOrderLess, Not, Or,
    Predicate, SizeOrderLess, SizeOrderMore,
};
pub use error::{Error, Result};
pub use logic::{conjunction, disjunction, negation, Condition};
pub use pack::{
    concat, concatenate, is_equal, is_not_equal, Just, Piece, TypePack, MAXIMUM_GENERATE_SIZE,
};
pub use partial::{partial_apply, partial_apply_last, same_as, PartCaller};
