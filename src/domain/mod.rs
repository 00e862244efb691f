// Domain layer: flag value types and the asset port. No I/O here.

pub mod model;
pub mod ports;
