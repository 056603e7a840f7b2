pub mod csv_files;
pub mod in_memory;
