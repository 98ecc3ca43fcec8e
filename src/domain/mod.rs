// Domain layer: core models and ports (interfaces) used by the core.

pub mod model;
pub mod ports;
