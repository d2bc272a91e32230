use crate::layout::Capacities;
use crate::objects::PrimitiveKind;

/// Errors surfaced by scene construction, per-frame update and packing
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// A collection holds more records than its reserved buffer span
    #[error("{count} {kind} records exceed the buffer capacity of {capacity}")]
    CapacityExceeded {
        kind: PrimitiveKind,
        count: usize,
        capacity: usize,
    },

    /// Motion was bound to a kind without a position field
    #[error("{0} primitives cannot carry a motion binding")]
    NotMovable(PrimitiveKind),

    /// A binding's index does not resolve to a live record
    #[error("no {kind} at index {index}")]
    UnboundTarget { kind: PrimitiveKind, index: usize },

    /// The requested capacities do not fit in one packed buffer
    #[error("capacities {capacities:?} need more than {limit} bytes")]
    LayoutTooLarge { capacities: Capacities, limit: usize },
}

pub type Result<T> = std::result::Result<T, SceneError>;
