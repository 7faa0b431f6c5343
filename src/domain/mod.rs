// Domain layer: core models and ports (interfaces). std only.

pub mod model;
pub mod ports;
