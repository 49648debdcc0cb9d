mod config_entry;
mod resource;

pub use config_entry::ConfigEntry;
pub use resource::ResourceDescriptor;
