use thiserror::Error;

/// Input trees that break the structure the rewrites rely on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// An accessor whose parent is not a class declaration.
    #[error("accessor `{name}` at offset {pos} is not a class member (parent is {parent_kind})")]
    MalformedTree {
        name: String,
        pos: u32,
        parent_kind: &'static str,
    },
    /// A set accessor without its value parameter.
    #[error("set accessor `{name}` at offset {pos} has no parameter")]
    InvariantViolation { name: String, pos: u32 },
}
