// Domain layer: value types and the ports the helpers talk through.

pub mod model;
pub mod ports;
