//! Error types for the Relink core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced by graph construction and connectivity runs.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The caller supplied a graph with no nodes.
    #[error("cannot analyse an empty graph")]
    EmptyGraph,
    /// A link or query referenced a node id outside `[0, node_count)`.
    #[error("node {node} is out of range, node_count is {node_count}")]
    InvalidNodeId {
        /// The offending node id.
        node: usize,
        /// The number of nodes in the graph.
        node_count: usize,
    },
    /// A reconnection proposal degenerated into a self-referencing link and
    /// the configured policy rejects such proposals.
    #[error("reconnection proposal degenerated into self-link on node {node}")]
    DegenerateProposal {
        /// The node both endpoints collapsed onto.
        node: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The caller supplied a graph with no nodes.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// A link or query referenced a node id outside `[0, node_count)`.
        InvalidNodeId => InvalidNodeId { .. } => "GRAPH_INVALID_NODE_ID",
        /// A degenerate reconnection proposal was rejected by policy.
        DegenerateProposal => DegenerateProposal { .. } => "GRAPH_DEGENERATE_PROPOSAL",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
