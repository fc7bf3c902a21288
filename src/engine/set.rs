//! The viewport's collection of active engines.

use std::fmt;

use super::Engine;
use crate::error::StyleError;

/// Engines in registration order, addressed by unique name.
///
/// Several engines may be enabled at once; the viewport layers their output
/// in registration order.
#[derive(Default)]
pub struct EngineSet {
    engines: Vec<Box<dyn Engine>>,
}

impl EngineSet {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The three built-in engines, all enabled.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            engines: vec![
                Box::new(super::WireframeEngine::new()),
                Box::new(super::BallAndStickEngine::new()),
                Box::new(super::SpaceFillEngine::new()),
            ],
        }
    }

    /// Add an engine. Names must be unique.
    pub fn register(
        &mut self,
        engine: Box<dyn Engine>,
    ) -> Result<(), StyleError> {
        if self.contains(engine.name()) {
            return Err(StyleError::DuplicateEngine(engine.name().to_owned()));
        }
        log::debug!("registered engine '{}'", engine.name());
        self.engines.push(engine);
        Ok(())
    }

    /// Remove and return an engine.
    pub fn unregister(
        &mut self,
        name: &str,
    ) -> Result<Box<dyn Engine>, StyleError> {
        let idx = self
            .position(name)
            .ok_or_else(|| StyleError::UnknownEngine(name.to_owned()))?;
        Ok(self.engines.remove(idx))
    }

    /// Whether an engine with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Engine by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Engine> {
        self.position(name).map(|i| self.engines[i].as_ref())
    }

    /// Mutable engine by name.
    pub fn get_mut(
        &mut self,
        name: &str,
    ) -> Option<&mut (dyn Engine + 'static)> {
        let idx = self.position(name)?;
        Some(self.engines[idx].as_mut())
    }

    /// Toggle an engine's enabled flag.
    pub fn set_enabled(
        &mut self,
        name: &str,
        enabled: bool,
    ) -> Result<(), StyleError> {
        let engine = self
            .get_mut(name)
            .ok_or_else(|| StyleError::UnknownEngine(name.to_owned()))?;
        engine.set_enabled(enabled);
        Ok(())
    }

    /// Enabled engines, in registration order.
    pub fn enabled(&self) -> impl Iterator<Item = &dyn Engine> + '_ {
        self.iter().filter(|e| e.is_enabled())
    }

    /// All engines, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Engine> + '_ {
        self.engines.iter().map(AsRef::as_ref)
    }

    /// All engine names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.engines.iter().map(|e| e.name())
    }

    /// Number of registered engines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Whether no engine is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.engines.iter().position(|e| e.name() == name)
    }
}

impl fmt::Debug for EngineSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.engines.iter().map(|e| (e.name(), e.is_enabled())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{SpaceFillEngine, WireframeEngine};

    #[test]
    fn duplicate_names_are_rejected() {
        let mut set = EngineSet::new();
        set.register(Box::new(WireframeEngine::new())).unwrap();
        assert!(matches!(
            set.register(Box::new(WireframeEngine::new())),
            Err(StyleError::DuplicateEngine(name)) if name == "wireframe"
        ));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn toggling_filters_enabled() {
        let mut set = EngineSet::builtin();
        assert_eq!(set.enabled().count(), 3);
        set.set_enabled("ball_and_stick", false).unwrap();
        let names: Vec<_> =
            set.enabled().map(|e| e.name().to_owned()).collect();
        assert_eq!(names, ["wireframe", "space_fill"]);
        assert!(matches!(
            set.set_enabled("cartoon", true),
            Err(StyleError::UnknownEngine(_))
        ));
    }

    #[test]
    fn unregister_removes_by_name() {
        let mut set = EngineSet::new();
        set.register(Box::new(SpaceFillEngine::new())).unwrap();
        let engine = set.unregister("space_fill").unwrap();
        assert_eq!(engine.name(), "space_fill");
        assert!(set.is_empty());
        assert!(set.unregister("space_fill").is_err());
        assert!(set.get("space_fill").is_none());
    }
}
