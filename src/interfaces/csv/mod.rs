pub mod field_reader;
