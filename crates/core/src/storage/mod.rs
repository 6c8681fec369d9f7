mod error;
mod keys;
mod traits;
mod types;

pub use error::{KeyError, RepositoryError, Result};
pub use keys::{id_to_sk, sk_to_id, ItemKind, SortKey, NOTE_PREFIX};
pub use traits::{IdGenerator, ItemTable};
pub use types::StoredItem;
