pub mod store_sync;

pub use store_sync::use_store_records;
