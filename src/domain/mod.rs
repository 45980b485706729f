// Domain layer: triangle models and the rendering port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
