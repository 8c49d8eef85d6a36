pub mod consts;
pub mod crypto;
pub mod error;
pub mod verdict;

pub use error::{Error, Result};
pub use verdict::{BreachVerdict, DomainVerdict, UnreachableReason};
