mod data_model_version;
mod resource_keys;
mod version_source;

pub use data_model_version::DataModelVersion;
pub use data_model_version::visible_versions;
pub use resource_keys::ContainerKey;
pub use resource_keys::ModelKey;
pub use resource_keys::ViewKey;
pub use version_source::VersionSource;
pub use version_source::load_versions;

#[cfg(test)]
mod tests;
