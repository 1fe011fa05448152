use parking_lot::RwLock;
use std::{any::Any, collections::HashMap, sync::Arc};

/// A generic registry type using a HashMap.
pub type Registry<K, V> = HashMap<K, V>;

/// A thread-safe shared registry using Arc and RwLock.
pub type SharedRegistry<K, V> = Arc<RwLock<Registry<K, V>>>;

/// A type-erased service value. Services carry no interface of their own;
/// callers downcast back to the concrete type on retrieval.
pub type Service = Arc<dyn Any + Send + Sync>;

/// A registry slot. `Some` holds a registered service, `None` marks a key
/// that was unregistered (the key itself stays in the mapping).
pub type Slot = Option<Service>;

/// Erases a concrete value into a [`Service`].
pub fn service<S: Any + Send + Sync>(service: S) -> Service {
    Arc::new(service)
}
