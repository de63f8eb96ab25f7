use thiserror::Error;

/// Failures reported by `Maybe` and its field codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MaybeError {
    /// `try_unwrap` was called on `Maybe::Absent`.
    #[error("called `unwrap` on an absent value")]
    UnwrapOnAbsent,
    /// A decoded variant tag named neither `Absent` (0) nor `Present` (1).
    #[error("illegal construction: variant tag {tag} is neither absent nor present")]
    IllegalConstruction { tag: u8 },
    /// A decode needed more bytes than the buffer holds past the offset.
    #[error("buffer truncated: needed {needed} byte(s), {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },
    /// A decoded `bool` byte was neither 0 nor 1.
    #[error("invalid bool byte {byte}")]
    InvalidBool { byte: u8 },
}
