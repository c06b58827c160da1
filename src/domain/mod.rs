// Domain layer: fixture targets, run/verify reports and the ports the engine depends on.

pub mod model;
pub mod ports;
