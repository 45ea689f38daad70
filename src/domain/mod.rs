// Domain layer: the outcome type, the error classification and the transport ports.

pub mod model;
pub mod outcome;
pub mod ports;
