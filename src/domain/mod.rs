// Domain layer: wire models and ports. No HTTP here beyond serde shapes.

pub mod model;
pub mod paging;
pub mod ports;
