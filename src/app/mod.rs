// Application layer: wiring CLI commands to the engine port.

pub mod commands;
