// Domain layer: core models and ports (interfaces). Depends only on std, chrono, serde
// and async-trait; nothing here reaches into core/config.

pub mod model;
pub mod ports;
