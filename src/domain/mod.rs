// Domain layer: value types and ports. Nothing here touches the file system.

pub mod model;
pub mod ports;
