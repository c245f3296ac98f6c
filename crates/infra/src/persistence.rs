// crates/infra/src/persistence.rs
mod file_copier;

pub use file_copier::FileCopier;
