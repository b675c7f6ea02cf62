//! # Domain Layer - Settlement Engine
//!
//! Pure fee arithmetic. Everything here is integer math over micro-units;
//! floats never touch a balance.

pub mod fees;

pub use fees::*;
