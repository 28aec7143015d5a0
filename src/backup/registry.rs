use std::collections::BTreeMap;

use crate::backup::{BackupContext, BackupHandler, ConfigHandler, LogHandler};
use crate::error::{Result, VaultError};
use crate::types::TaskGroup;

pub type HandlerFactory = Box<dyn Fn(&BackupContext) -> Box<dyn BackupHandler>>;

/// Maps task `type` strings to handler constructors.
pub struct HandlerRegistry {
    factories: BTreeMap<String, HandlerFactory>,
}

impl HandlerRegistry {
    pub fn empty() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Registers the built-in handlers under their short names and under the
    /// type names used by existing task files.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        for name in ["log", "logFileHandler"] {
            registry.register(name, |ctx| Box::new(LogHandler::new(ctx)));
        }
        for name in ["app-config", "LazyFileHandler"] {
            registry.register(name, |ctx| {
                Box::new(ConfigHandler::new(ctx, TaskGroup::Application.label()))
            });
        }
        for name in ["user-config", "LazyUserFileHandler"] {
            registry.register(name, |ctx| {
                Box::new(ConfigHandler::new(ctx, TaskGroup::User.label()))
            });
        }
        registry
    }

    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn(&BackupContext) -> Box<dyn BackupHandler> + 'static,
    {
        self.factories.insert(name.to_string(), Box::new(factory));
    }

    pub fn create(&self, name: &str, ctx: &BackupContext) -> Result<Box<dyn BackupHandler>> {
        self.factories
            .get(name)
            .map(|factory| factory(ctx))
            .ok_or_else(|| VaultError::UnknownHandler(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn context() -> BackupContext {
        BackupContext {
            base_dir: PathBuf::from("/base"),
            home_dir: PathBuf::from("/home/user"),
        }
    }

    #[test]
    fn defaults_resolve_legacy_and_short_names() {
        let registry = HandlerRegistry::with_defaults();
        let ctx = context();
        assert_eq!(registry.create("logFileHandler", &ctx).expect("log").label(), "log");
        assert_eq!(
            registry.create("LazyFileHandler", &ctx).expect("app").label(),
            "application config"
        );
        assert_eq!(
            registry.create("user-config", &ctx).expect("user").label(),
            "user config"
        );
        assert_eq!(registry.names().count(), 6);
    }

    #[test]
    fn unknown_name_is_reported() {
        let registry = HandlerRegistry::with_defaults();
        match registry.create("ZipEverything", &context()) {
            Err(VaultError::UnknownHandler(name)) => assert_eq!(name, "ZipEverything"),
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("unexpected handler"),
        }
    }
}
