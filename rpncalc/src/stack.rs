use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("stack underflow")]
    Underflow,
    #[error("stack is empty")]
    Empty,
}

/// LIFO container shared by the compiler (operators and parens) and the
/// evaluator (operands). Each call owns its own stack, nothing outlives it.
#[derive(Debug, Clone, Default)]
pub struct Stack<T>(Vec<T>);

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack(Vec::new())
    }

    pub fn push(&mut self, value: T) {
        self.0.push(value);
    }

    pub fn pop(&mut self) -> Result<T, StackError> {
        self.0.pop().ok_or(StackError::Underflow)
    }

    pub fn peek(&self) -> Result<&T, StackError> {
        self.0.last().ok_or(StackError::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        while self.pop().is_ok() {}
    }
}
