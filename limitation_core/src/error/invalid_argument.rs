use std::borrow::Cow;
use thiserror::Error;

/// An argument did not satisfy the operation's contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("Invalid argument '{argument}': {reason}")]
pub struct InvalidArgument {
    pub argument: &'static str,
    pub reason: Cow<'static, str>,
}

impl InvalidArgument {
    pub fn new(argument: &'static str, reason: impl Into<Cow<'static, str>>) -> Self {
        InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}
