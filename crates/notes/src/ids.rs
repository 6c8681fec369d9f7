use notes_core::storage::IdGenerator;
use uuid::Uuid;

/// Generates random v4 UUIDs as note ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
