// Adapters layer: translates external requests into repository calls.

pub mod http;
