//! Arena identifiers.
//!
//! Every id is a plain index into one of the [`Graph`](super::Graph) stores. Ids are only
//! meaningful for the graph that issued them.

use std::fmt;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(crate) usize);

        impl $name {
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

arena_id!(
    /// Index of a node (real or dummy).
    NodeId,
    "n"
);

arena_id!(
    /// Index of a layout edge, the deduplicated per-pair edge the layering works on.
    EdgeId,
    "e"
);

arena_id!(
    /// Index of a semantic edge, one per domain connection added by the caller.
    SemanticEdgeId,
    "s"
);
