//! A singly-linked list with indexed access and forward cursors.
//!
//! Every element lives in its own heap node owned through the chain, so
//! front operations are O(1) while anything touching the back or an index
//! walks the chain. Out-of-contract calls surface as [`ListError`] before
//! any mutation happens.

mod error;
mod iter;
mod list;
#[cfg(feature = "serde")]
mod serde_impls;

pub use error::{ListError, Result};
pub use iter::{IntoIter, Iter, IterMut};
pub use list::LinkedList;
