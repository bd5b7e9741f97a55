//! Adapters for the `FileProbe` port.

pub mod in_memory;
pub mod local_fs;
