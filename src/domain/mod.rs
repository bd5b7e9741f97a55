//! Domain types of an assembly request: the auth block, steps, the payload
//! aggregate, and the ports the builder depends on.

pub mod auth;
pub mod payload;
pub mod ports;
pub mod step;
