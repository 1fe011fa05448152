use crate::{Registry, Service, SharedRegistry, Slot};
use parking_lot::RwLock;
use std::{any::Any, collections::HashMap, sync::Arc};

/// The ServiceRegistry holds named services as type-erased values.
/// Registering an already-present key overwrites the stored value;
/// unregistering writes the absent marker in place, keeping the key.
///
/// Cloning is cheap and hands out another handle to the same underlying
/// mapping, so every clone observes the same registrations.
#[derive(Clone)]
pub struct ServiceRegistry {
    services: SharedRegistry<String, Slot>,
}

impl ServiceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            services: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a registry pre-populated from `services`, as if by `register`.
    pub fn with_services(services: Registry<String, Service>) -> Self {
        let registry = Self::new();
        registry.register(services);
        registry
    }

    /// Registers every `name -> service` pair, inserting or overwriting.
    /// Returns `&self` so calls can be chained. An empty map is a no-op.
    pub fn register(&self, services: Registry<String, Service>) -> &Self {
        tracing::trace!(count = services.len(), "registering services");
        let mut slots = self.services.write();
        for (name, service) in services {
            slots.insert(name, Some(service));
        }
        self
    }

    /// Returns the service stored under `name`, downcast to `T`.
    ///
    /// The type parameter is a caller-supplied hint: nothing validates it at
    /// registration time. A missing key, an unregistered key, and a stored
    /// value of a different type all come back as `None`.
    pub fn get<T: Any + Send + Sync>(&self, name: &str) -> Option<Arc<T>> {
        let service = self.services.read().get(name).cloned()??;
        match service.downcast::<T>() {
            Ok(service) => Some(service),
            Err(_) => {
                tracing::debug!(
                    name,
                    expected = %tynm::type_name::<T>(),
                    "registered service does not match the requested type"
                );
                None
            }
        }
    }

    /// Returns the service stored under `name` without downcasting,
    /// `None` for missing or unregistered keys.
    pub fn get_raw(&self, name: impl AsRef<str>) -> Option<Service> {
        self.services.read().get(name.as_ref()).cloned().flatten()
    }

    /// Unregisters every named service by writing the absent marker into its
    /// slot. The keys stay in the mapping and remain enumerable; keys that
    /// were never registered get an absent slot as well. Idempotent.
    pub fn unregister<I>(&self, names: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut slots = self.services.write();
        for name in names {
            let name = name.into();
            tracing::trace!(name = %name, "unregistering service");
            slots.insert(name, None);
        }
    }

    /// Whether `name` has a slot in the mapping. Stays `true` after
    /// `unregister`, which keeps the key around.
    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.services.read().contains_key(name.as_ref())
    }

    /// All keys in the mapping, including unregistered ones.
    pub fn keys(&self) -> Vec<String> {
        self.services.read().keys().cloned().collect()
    }

    /// Number of slots in the mapping, absent ones included.
    pub fn len(&self) -> usize {
        self.services.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.read().is_empty()
    }

    /// The live shared mapping behind this registry. This is a handle, not a
    /// copy: writes through it bypass `register`/`unregister` and are
    /// observed by every subsequent lookup.
    pub fn services(&self) -> SharedRegistry<String, Slot> {
        Arc::clone(&self.services)
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Registry<String, Service>> for ServiceRegistry {
    fn from(services: Registry<String, Service>) -> Self {
        Self::with_services(services)
    }
}

impl std::fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("len", &self.len())
            .finish()
    }
}

/// Macro to build a `Registry<String, Service>` literal, erasing each value.
#[macro_export]
macro_rules! services {
    () => {
        $crate::Registry::<String, $crate::Service>::new()
    };
    ($($name:expr => $service:expr),+ $(,)?) => {{
        let mut services = $crate::Registry::<String, $crate::Service>::new();
        $(services.insert(String::from($name), $crate::service($service));)+
        services
    }};
}
