use std::path::PathBuf;

use walkdir::WalkDir;

use super::{ResourceError, ResourceProvider};

/// Resources read from a directory tree.
///
/// Names are paths relative to the root, using `/` separators.
#[derive(Debug, Clone)]
pub struct DirResources {
    root: PathBuf,
}

impl DirResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceProvider for DirResources {
    fn names(&self) -> Vec<String> {
        WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| match e {
                Ok(e) => Some(e),
                Err(err) => {
                    log::warn!("skipping unreadable entry under {}: {err}", self.root.display());
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                let rel = e.path().strip_prefix(&self.root).ok()?;
                let parts: Vec<_> = rel.iter().map(|p| p.to_string_lossy()).collect();
                Some(parts.join("/"))
            })
            .collect()
    }

    fn read(&self, name: &str) -> Result<Vec<u8>, ResourceError> {
        let path = self.root.join(name);
        std::fs::read(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(name.to_string())
            } else {
                ResourceError::Io { name: name.to_string(), source }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_relative_with_forward_slashes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("glsl")).unwrap();
        std::fs::write(dir.path().join("glsl/quad.vert"), "void main() {}").unwrap();
        std::fs::write(dir.path().join("quad.frag"), "void main() {}").unwrap();

        let res = DirResources::new(dir.path());
        let mut names = res.names();
        names.sort();
        assert_eq!(names, vec!["glsl/quad.vert", "quad.frag"]);
    }

    #[test]
    fn read_text_by_suffix() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("quad.frag"), "out vec4 c;").unwrap();

        let res = DirResources::new(dir.path());
        let (name, text) = res.read_text("quad.frag").unwrap();
        assert_eq!(name, "quad.frag");
        assert_eq!(text, "out vec4 c;");
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let res = DirResources::new(dir.path());
        assert!(matches!(res.read("nope.vert"), Err(ResourceError::NotFound(_))));
    }
}
