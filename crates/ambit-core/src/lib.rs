mod container;
mod registry;
mod service_registry;

pub use container::all_services;
pub use container::current;
pub use container::register_services;
pub use container::set_current;
pub use registry::service;
pub use registry::Registry;
pub use registry::Service;
pub use registry::SharedRegistry;
pub use registry::Slot;
pub use service_registry::ServiceRegistry;
