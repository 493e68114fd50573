use thiserror::Error;

/// Errors that can occur when reading a [`Variant`](crate::Variant)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VariantError {
    /// The requested alternative is not the live one, or the variant is valueless
    #[error("requested alternative {requested} but variant holds {}", describe_held(.held))]
    AlternativeMismatch {
        /// Position of the alternative that was asked for
        requested: usize,
        /// Position of the live alternative, `None` when valueless
        held: Option<usize>,
    },
}

fn describe_held(held: &Option<usize>) -> String {
    match held {
        Some(index) => format!("alternative {}", index),
        None => "no value".to_string(),
    }
}
