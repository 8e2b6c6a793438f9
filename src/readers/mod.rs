pub mod data_reader;
pub mod dump_reader;
