// Domain layer: core value types. No dependencies beyond std/serde.

pub mod model;
