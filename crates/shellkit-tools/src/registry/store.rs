//! Tool registry storage

use std::collections::{BTreeMap, HashMap};

use clap::{ArgMatches, Command};
use tracing::debug;

use super::types::{Tool, ToolDescriptor};
use crate::error::{Error, Result};

/// Central registry for CLI tools.
///
/// Lives in two phases. Registration collects descriptors during
/// bootstrap, before any argument parsing. Initialization then builds
/// each tool's sub-command and instance exactly once; dispatch routes a
/// parsed sub-command name to its instance.
pub struct ToolRegistry {
    descriptors: BTreeMap<String, ToolDescriptor>,
    instances: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            descriptors: BTreeMap::new(),
            instances: HashMap::new(),
        }
    }

    /// Register a tool descriptor.
    ///
    /// Names must be non-empty and unique across the registry; a clash is
    /// a configuration error, not a runtime condition to recover from.
    pub fn register(&mut self, descriptor: ToolDescriptor) -> Result<()> {
        if descriptor.name().is_empty() {
            return Err(Error::InvalidTool {
                reason: "tool name must be non-empty".into(),
            });
        }
        if self.descriptors.contains_key(descriptor.name()) {
            return Err(Error::DuplicateTool {
                name: descriptor.name().to_string(),
            });
        }
        self.descriptors
            .insert(descriptor.name().to_string(), descriptor);
        Ok(())
    }

    /// Check if a tool name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.descriptors.contains_key(name)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// All registered tool names, sorted.
    pub fn list(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }

    /// Build every tool's sub-command and instance, attaching the
    /// sub-commands to `root`.
    ///
    /// Call exactly once, after all registrations are complete and before
    /// dispatch. Factory errors propagate unchanged.
    pub fn initialize(&mut self, mut root: Command) -> Result<Command> {
        debug_assert!(
            self.instances.is_empty(),
            "registry initialized more than once"
        );
        for (name, descriptor) in &self.descriptors {
            let (sub, instance) = descriptor.instantiate()?;
            self.instances.insert(name.clone(), instance);
            root = root.subcommand(sub);
        }
        Ok(root)
    }

    /// Route `name` to its initialized instance and run it.
    ///
    /// The tool's exit code, and any error it raises, pass through
    /// unchanged.
    pub fn dispatch(&self, name: &str, args: &ArgMatches) -> Result<i32> {
        let Some(instance) = self.instances.get(name) else {
            return Err(Error::UnknownTool {
                name: name.to_string(),
            });
        };
        debug!("dispatching tool '{name}'");
        Ok(instance.execute(args)?)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ToolError;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubTool {
        code: i32,
        calls: Arc<AtomicUsize>,
    }

    impl Tool for StubTool {
        fn execute(&self, _args: &ArgMatches) -> std::result::Result<i32, ToolError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.code)
        }
    }

    fn stub_descriptor(name: &str, help: &str, code: i32, calls: Arc<AtomicUsize>) -> ToolDescriptor {
        ToolDescriptor::new(name, help, move |cmd| {
            let tool = StubTool {
                code,
                calls: Arc::clone(&calls),
            };
            Ok((cmd, Box::new(tool) as Box<dyn Tool>))
        })
    }

    fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    #[test]
    fn empty_registry() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.list().is_empty());
    }

    #[test]
    fn register_distinct_names() {
        let mut registry = ToolRegistry::new();
        registry
            .register(stub_descriptor("alpha", "A", 0, counter()))
            .unwrap();
        registry
            .register(stub_descriptor("beta", "B", 0, counter()))
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("alpha"));
        assert!(registry.contains("beta"));
        assert!(!registry.contains("gamma"));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut registry = ToolRegistry::new();
        registry
            .register(stub_descriptor("alpha", "A", 0, counter()))
            .unwrap();

        let err = registry
            .register(stub_descriptor("alpha", "again", 0, counter()))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateTool { name } if name == "alpha"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut registry = ToolRegistry::new();
        let err = registry
            .register(stub_descriptor("", "nameless", 0, counter()))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidTool { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn list_is_sorted_and_idempotent() {
        let mut registry = ToolRegistry::new();
        registry
            .register(stub_descriptor("zeta", "Z", 0, counter()))
            .unwrap();
        registry
            .register(stub_descriptor("alpha", "A", 0, counter()))
            .unwrap();
        registry
            .register(stub_descriptor("mu", "M", 0, counter()))
            .unwrap();

        assert_eq!(registry.list(), vec!["alpha", "mu", "zeta"]);
        assert_eq!(registry.list(), registry.list());
    }

    #[test]
    fn initialize_builds_one_subcommand_per_descriptor() {
        let mut registry = ToolRegistry::new();
        registry
            .register(stub_descriptor("alpha", "First tool", 0, counter()))
            .unwrap();
        registry
            .register(stub_descriptor("beta", "Second tool", 1, counter()))
            .unwrap();

        let root = registry.initialize(Command::new("app")).unwrap();

        let subs: Vec<_> = root
            .get_subcommands()
            .map(|c| {
                (
                    c.get_name().to_string(),
                    c.get_about().map(ToString::to_string),
                )
            })
            .collect();
        assert_eq!(subs.len(), 2);
        assert!(subs.contains(&("alpha".into(), Some("First tool".into()))));
        assert!(subs.contains(&("beta".into(), Some("Second tool".into()))));
    }

    #[test]
    fn initialize_propagates_factory_errors() {
        let mut registry = ToolRegistry::new();
        registry
            .register(ToolDescriptor::new("broken", "never constructs", |_cmd| {
                Err("construction failed".into())
            }))
            .unwrap();

        let err = registry.initialize(Command::new("app")).unwrap_err();
        assert!(err.to_string().contains("construction failed"));
    }

    #[test]
    fn dispatch_passes_exit_codes_through_and_runs_once() {
        let zero_calls = counter();
        let one_calls = counter();
        let mut registry = ToolRegistry::new();
        registry
            .register(stub_descriptor("alpha", "A", 0, Arc::clone(&zero_calls)))
            .unwrap();
        registry
            .register(stub_descriptor("beta", "B", 1, Arc::clone(&one_calls)))
            .unwrap();
        registry.initialize(Command::new("app")).unwrap();

        let args = ArgMatches::default();
        assert_eq!(registry.dispatch("alpha", &args).unwrap(), 0);
        assert_eq!(registry.dispatch("beta", &args).unwrap(), 1);
        assert_eq!(zero_calls.load(Ordering::SeqCst), 1);
        assert_eq!(one_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dispatch_unknown_name_fails_without_side_effect() {
        let calls = counter();
        let mut registry = ToolRegistry::new();
        registry
            .register(stub_descriptor("alpha", "A", 0, Arc::clone(&calls)))
            .unwrap();
        registry.initialize(Command::new("app")).unwrap();

        let err = registry
            .dispatch("gamma", &ArgMatches::default())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownTool { name } if name == "gamma"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn dispatch_before_initialize_is_unknown() {
        let mut registry = ToolRegistry::new();
        registry
            .register(stub_descriptor("alpha", "A", 0, counter()))
            .unwrap();

        let err = registry
            .dispatch("alpha", &ArgMatches::default())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownTool { .. }));
    }

    #[test]
    fn tool_errors_pass_through_dispatch() {
        let mut registry = ToolRegistry::new();
        registry
            .register(ToolDescriptor::new("explode", "always fails", |cmd| {
                struct ExplodingTool;
                impl Tool for ExplodingTool {
                    fn execute(&self, _args: &ArgMatches) -> std::result::Result<i32, ToolError> {
                        Err("tool blew up".into())
                    }
                }
                Ok((cmd, Box::new(ExplodingTool) as Box<dyn Tool>))
            }))
            .unwrap();
        registry.initialize(Command::new("app")).unwrap();

        let err = registry
            .dispatch("explode", &ArgMatches::default())
            .unwrap_err();
        assert!(matches!(err, Error::Tool(_)));
        assert!(err.to_string().contains("tool blew up"));
    }
}
