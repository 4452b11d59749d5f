// Domain layer: the close and logging capabilities. No I/O here.

pub mod ports;
