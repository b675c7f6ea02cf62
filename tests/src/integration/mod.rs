//! Cross-subsystem integration tests.

pub mod support;

#[cfg(test)]
mod concurrency;
#[cfg(test)]
mod flows;
#[cfg(test)]
mod persistence;
