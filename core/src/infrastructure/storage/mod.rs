pub mod collection;
pub mod file_store;
pub mod memory_store;

pub use collection::KvCollection;
pub use file_store::FileKeyValueStore;
pub use memory_store::InMemoryKeyValueStore;
