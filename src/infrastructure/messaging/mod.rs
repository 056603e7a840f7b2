pub mod bulkgate;
