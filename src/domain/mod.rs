// Domain layer: content models, contact form data and ports (interfaces).

pub mod contact;
pub mod model;
pub mod ports;
