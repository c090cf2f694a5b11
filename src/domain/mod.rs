// Domain layer: catalog models and ports (interfaces).

pub mod model;
pub mod ports;
