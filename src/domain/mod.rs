// Domain layer: country records and the transport ports. No I/O here.

pub mod model;
pub mod ports;
