// Adapters layer: concrete implementations of the domain ports.

pub mod frames;
pub mod warnings;
