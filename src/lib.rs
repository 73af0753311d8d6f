pub mod concat;
pub mod config;
pub mod demo;
pub mod error;
pub mod multiplier;
pub mod version;

pub use concat::{double_concat, normal_concat};
pub use multiplier::{Multiplier, OverflowPolicy};
