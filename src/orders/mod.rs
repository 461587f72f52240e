mod store;

pub use store::{StoreError, find_order};
