//! Domain vocabulary shared by the job board core, desktop shell and tools.

pub mod domain;
pub mod error;

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
