//! Application layer: the `AssemblyBuilder` that turns caller input into a
//! request payload.

pub mod builder;
