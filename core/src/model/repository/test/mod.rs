use super::kv::MemoryStore;

pub mod proptest_arb;

pub fn create_store() -> MemoryStore {
    MemoryStore::default()
}
