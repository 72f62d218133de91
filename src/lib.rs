mod car;
mod filter;
mod storage;
mod store;

pub use car::Car;
pub use filter::{Filter, ParseFilterError};
pub use storage::{FileStorage, InMemoryStorage, StorageBackend, StorageError};
pub use store::{CarDraft, CarStore, StoreError, ValidationError, STORAGE_KEY};
