//! Error types for the edgewise core library.
//!
//! Defines the public error enum, its stable machine-readable codes and a
//! convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::layout::LayoutKind;

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
            #[must_use]
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
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when constructing graphs or their derived views.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The requested node count lies outside the supported range.
    #[error("node_count must be within 1..={max} (got {got})")]
    InvalidNodeCount {
        /// Node count supplied by the caller.
        got: usize,
        /// Largest node count the generator accepts.
        max: usize,
    },
    /// An edge endpoint referenced a node that does not exist.
    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange {
        /// Offending node index.
        node: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// An edge joined a node to itself.
    #[error("self-loop on node {node} is not permitted")]
    SelfLoop {
        /// Node carrying the loop.
        node: usize,
    },
    /// The same unordered pair appeared more than once.
    #[error("edge ({left}, {right}) appears more than once")]
    DuplicateEdge {
        /// Lower endpoint of the repeated edge.
        left: usize,
        /// Higher endpoint of the repeated edge.
        right: usize,
    },
    /// A layout provider did not place exactly one coordinate per node.
    #[error("{kind} layout placed {got} nodes but the graph has {expected}")]
    LayoutIncomplete {
        /// Layout algorithm reported by the provider.
        kind: LayoutKind,
        /// Number of nodes in the graph.
        expected: usize,
        /// Number of coordinates returned.
        got: usize,
    },
    /// A layout provider returned a NaN or infinite coordinate.
    #[error("{kind} layout produced a non-finite coordinate for node {node}")]
    NonFiniteCoordinate {
        /// Layout algorithm reported by the provider.
        kind: LayoutKind,
        /// Node whose coordinate was rejected.
        node: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The requested node count lies outside the supported range.
        InvalidNodeCount => InvalidNodeCount { .. } => "GRAPH_INVALID_NODE_COUNT",
        /// An edge endpoint referenced a node that does not exist.
        NodeOutOfRange => NodeOutOfRange { .. } => "GRAPH_NODE_OUT_OF_RANGE",
        /// An edge joined a node to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// The same unordered pair appeared more than once.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
        /// A layout provider did not place exactly one coordinate per node.
        LayoutIncomplete => LayoutIncomplete { .. } => "GRAPH_LAYOUT_INCOMPLETE",
        /// A layout provider returned a NaN or infinite coordinate.
        NonFiniteCoordinate => NonFiniteCoordinate { .. } => "GRAPH_NON_FINITE_COORDINATE",
    }
}

impl GraphError {
    /// Reports whether the error stems from caller-supplied arguments rather
    /// than from a collaborator such as a layout provider.
    ///
    /// # Examples
    /// ```
    /// use edgewise_core::GraphError;
    ///
    /// let err = GraphError::InvalidNodeCount { got: 0, max: 200 };
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidNodeCount { .. }
                | Self::NodeOutOfRange { .. }
                | Self::SelfLoop { .. }
                | Self::DuplicateEdge { .. }
        )
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
