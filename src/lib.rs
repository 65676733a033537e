pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod optimizer;
pub mod playstyle;
pub mod roster;
pub mod scorer;
// cmd and reports are binary modules (see main.rs).

pub use crate::error::{TeamForgeError, TfResult};
