//! Input adapters that feed external data into the builder.

pub mod csv;
