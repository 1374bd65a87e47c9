use crate::error::Result;

/// Validate the defining invariants of a model entity.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
