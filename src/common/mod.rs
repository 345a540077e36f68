//! Common, shared types.

pub mod layers;
pub mod state;
pub mod tunables;
pub mod viewport;

#[cfg(test)]
pub mod test_utils;
