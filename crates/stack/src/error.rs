use std::fmt;

/// Returned by [`Stack::peek`](crate::Stack::peek) and [`Stack::pop`](crate::Stack::pop)
/// when the stack holds no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStackError;

pub type Result<T> = std::result::Result<T, EmptyStackError>;

impl fmt::Display for EmptyStackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Stack is Empty")
    }
}

impl std::error::Error for EmptyStackError {}

#[cfg(test)]
mod tests {
    use super::EmptyStackError;

    #[test]
    fn message() {
        assert_eq!(EmptyStackError.to_string(), "Stack is Empty");
    }

    #[test]
    fn boxes_as_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(EmptyStackError);
        assert_eq!(error.to_string(), "Stack is Empty");
        assert!(error.source().is_none());
    }
}
