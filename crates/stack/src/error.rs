use thiserror::Error;

pub type Result<T, E = StackError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    #[error("invalid capacity: a stack must hold at least one element")]
    InvalidCapacity,
    #[error("stack is full (capacity {capacity}), rejected {value}")]
    Full { value: i32, capacity: usize },
    #[error("stack is empty")]
    Empty,
}
