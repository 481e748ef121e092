use super::{ResourceError, ResourceProvider};

/// Resources compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedResources {
    entries: Vec<(String, &'static [u8])>,
}

impl EmbeddedResources {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shaders shipped with the engine.
    pub fn bundled() -> Self {
        Self::empty()
            .with(
                "shaders/default.vert",
                include_bytes!("../../shaders/default.vert"),
            )
            .with(
                "shaders/default.frag",
                include_bytes!("../../shaders/default.frag"),
            )
    }

    /// Adds (or replaces) an entry.
    pub fn with(mut self, name: impl Into<String>, bytes: &'static [u8]) -> Self {
        let name = name.into();
        self.entries.retain(|(n, _)| *n != name);
        self.entries.push((name, bytes));
        self
    }
}

impl ResourceProvider for EmbeddedResources {
    fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }

    fn read(&self, name: &str) -> Result<Vec<u8>, ResourceError> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, b)| b.to_vec())
            .ok_or_else(|| ResourceError::NotFound(name.to_string()))
    }
}
