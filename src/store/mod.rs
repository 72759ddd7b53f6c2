// Persistence module - the key/value boundary and the layout store on top.

mod kv;
mod layout_store;

pub use kv::{FileStore, KeyValueStore, MemoryStore, StoreError, StoreResult};
pub use layout_store::{default_layout, Layout, LayoutStore, CURRENT_LAYOUT_KEY, LAYOUTS_KEY};
