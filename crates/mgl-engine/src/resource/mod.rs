//! Resource lookup.
//!
//! Shader sources are addressed by file-name suffix ("default.vert") and
//! resolved against a [`ResourceProvider`]. Two backends exist: resources
//! compiled into the binary and a directory on disk.

mod dir;
mod embedded;
mod error;

pub use dir::DirResources;
pub use embedded::EmbeddedResources;
pub use error::ResourceError;

/// Read-only access to named resources.
pub trait ResourceProvider {
    /// All resource names known to this provider.
    fn names(&self) -> Vec<String>;

    /// Reads a resource by its full name.
    fn read(&self, name: &str) -> Result<Vec<u8>, ResourceError>;

    /// Resolves `suffix` to exactly one resource name.
    ///
    /// Zero matches yields `NotFound`, several yield `Ambiguous`.
    fn find(&self, suffix: &str) -> Result<String, ResourceError> {
        let mut matches: Vec<String> = self
            .names()
            .into_iter()
            .filter(|n| n.ends_with(suffix))
            .collect();

        match matches.len() {
            0 => Err(ResourceError::NotFound(suffix.to_string())),
            1 => Ok(matches.remove(0)),
            _ => {
                matches.sort();
                Err(ResourceError::Ambiguous {
                    suffix: suffix.to_string(),
                    candidates: matches,
                })
            }
        }
    }

    /// Resolves `suffix` and reads the resource as UTF-8 text.
    ///
    /// Returns the resolved name together with the contents.
    fn read_text(&self, suffix: &str) -> Result<(String, String), ResourceError> {
        let name = self.find(suffix)?;
        let bytes = self.read(&name)?;
        let text = String::from_utf8(bytes).map_err(|_| ResourceError::NotUtf8(name.clone()))?;
        Ok((name, text))
    }
}
