use crate::{Registry, Service, ServiceRegistry, SharedRegistry, Slot};
use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// The process-wide current registry. Starts out as a fresh empty registry
/// and can be swapped any number of times through `set_current`.
static CURRENT: Lazy<RwLock<ServiceRegistry>> =
    Lazy::new(|| RwLock::new(ServiceRegistry::new()));

/// Returns a handle to the current process-wide registry.
pub fn current() -> ServiceRegistry {
    CURRENT.read().clone()
}

/// Replaces the process-wide registry. The previous registry stays alive for
/// anyone still holding a handle to it; the ambient accessors switch over
/// immediately.
pub fn set_current(registry: ServiceRegistry) {
    tracing::debug!("replacing the current service registry");
    *CURRENT.write() = registry;
}

/// Registers services into the current registry and returns it, so further
/// `register` calls can be chained on the result.
pub fn register_services(services: Registry<String, Service>) -> ServiceRegistry {
    let registry = current();
    registry.register(services);
    registry
}

/// The live shared mapping of the current registry. This is the registry's
/// internal state, not a copy: writes through it bypass
/// `register`/`unregister` and are observed by every subsequent lookup.
pub fn all_services() -> SharedRegistry<String, Slot> {
    current().services()
}
