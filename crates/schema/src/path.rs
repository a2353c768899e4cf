//! Attribute paths used to address diagnostics

use serde::{Serialize, Serializer};
use std::fmt;

/// One step into a configuration value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    Attribute(String),
    Index(usize),
    Key(String),
}

/// Location of a value inside a configuration, e.g. `spec.pools[0].servers`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributePath(Vec<PathStep>);

impl AttributePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn attribute(&self, name: &str) -> Self {
        self.push(PathStep::Attribute(name.to_string()))
    }

    pub fn index(&self, index: usize) -> Self {
        self.push(PathStep::Index(index))
    }

    pub fn key(&self, key: &str) -> Self {
        self.push(PathStep::Key(key.to_string()))
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&self, step: PathStep) -> Self {
        let mut steps = self.0.clone();
        steps.push(step);
        Self(steps)
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, step) in self.0.iter().enumerate() {
            match step {
                PathStep::Attribute(name) if position == 0 => write!(f, "{name}")?,
                PathStep::Attribute(name) => write!(f, ".{name}")?,
                PathStep::Index(index) => write!(f, "[{index}]")?,
                PathStep::Key(key) => write!(f, "[{key:?}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for AttributePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let path = AttributePath::root()
            .attribute("spec")
            .attribute("pools")
            .index(0)
            .attribute("labels")
            .key("app");
        assert_eq!(path.to_string(), r#"spec.pools[0].labels["app"]"#);
    }

    #[test]
    fn test_root_is_empty() {
        assert!(AttributePath::root().is_root());
        assert_eq!(AttributePath::root().to_string(), "");
    }
}
