// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DaysortError, DomainError, DomainResult, ErrorContext, InfraResult, InfrastructureError,
    PresentationError, PresentationResult, Result,
};

pub mod error;
