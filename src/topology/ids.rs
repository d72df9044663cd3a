//! `VertexId`, `EdgeId`, `FaceId`: strong, zero-cost handles for mesh elements
//!
//! Every vertex, edge and face of a polygon mesh is addressed by a dense,
//! zero-based index into its table. The three newtypes keep those index
//! spaces apart at compile time so a face id can never be used to index the
//! edge arena by accident.
//!
//! Each handle:
//! - is `repr(transparent)` over `u32`, so it has the layout of a plain index;
//! - converts to `usize` for slice indexing via [`index`](VertexId::index);
//! - prints as `VertexId(3)` with `Debug` and as `3` with `Display`;
//! - (de)serializes as a bare integer.

use std::fmt;

macro_rules! mesh_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Creates a handle from a raw table index.
            #[inline]
            pub const fn new(raw: u32) -> Self {
                $name(raw)
            }

            /// Returns the raw table index.
            #[inline]
            pub const fn get(self) -> u32 {
                self.0
            }

            /// Returns the table index as `usize`, for slice indexing.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            /// Creates a handle from a `usize` table position.
            ///
            /// Returns `None` if `idx` does not fit into `u32`.
            #[inline]
            pub fn from_index(idx: usize) -> Option<Self> {
                u32::try_from(idx).ok().map($name)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            #[inline]
            fn from(raw: u32) -> Self {
                $name(raw)
            }
        }
    };
}

mesh_id!(
    /// Index into the implicit vertex table.
    VertexId
);
mesh_id!(
    /// Index into the edge arena of a [`MeshTopology`](crate::topology::mesh::MeshTopology).
    EdgeId
);
mesh_id!(
    /// Index into the face arena of a [`MeshTopology`](crate::topology::mesh::MeshTopology).
    FaceId
);

/// Render an optional id the way hosts expect: the raw index, or `-1` when unresolved.
#[inline]
pub fn to_signed<I: Into<u32>>(id: Option<I>) -> i64 {
    id.map_or(-1, |i| i64::from(i.into()))
}

impl From<VertexId> for u32 {
    fn from(v: VertexId) -> u32 {
        v.0
    }
}

impl From<EdgeId> for u32 {
    fn from(e: EdgeId) -> u32 {
        e.0
    }
}

impl From<FaceId> for u32 {
    fn from(f: FaceId) -> u32 {
        f.0
    }
}
