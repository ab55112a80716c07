//! Vertex identifiers.

use core::fmt;
use core::hash::Hash;

use num_traits::{FromPrimitive, PrimInt};

/// An integer type usable as a vertex identifier.
///
/// Signed types are allowed: a neighbor value is never checked against the
/// vertex range, so negative ids travel through conversion untouched.
pub trait VertexId: PrimInt + FromPrimitive + Hash + fmt::Debug + fmt::Display + Send + Sync {
    /// Returns the id of the vertex stored at `position`, if the type can hold it.
    #[inline]
    fn from_position(position: usize) -> Option<Self> {
        Self::from_usize(position)
    }
}

impl<T> VertexId for T where
    T: PrimInt + FromPrimitive + Hash + fmt::Debug + fmt::Display + Send + Sync
{
}
