//! go.mod fixtures

use std::path::{Path, PathBuf};

use gomodsync::parser::GoModFile;

/// Builds go.mod content from a go version and requirements
pub struct GoModBuilder {
    module: String,
    go: Option<String>,
    requires: Vec<(String, String)>,
}

impl GoModBuilder {
    pub fn new(module: &str) -> Self {
        Self {
            module: module.to_string(),
            go: None,
            requires: Vec::new(),
        }
    }

    pub fn go(mut self, version: &str) -> Self {
        self.go = Some(version.to_string());
        self
    }

    pub fn require(mut self, path: &str, version: &str) -> Self {
        self.requires.push((path.to_string(), version.to_string()));
        self
    }

    pub fn content(&self) -> String {
        let mut content = format!("module {}\n", self.module);
        if let Some(go) = &self.go {
            content.push_str(&format!("\ngo {}\n", go));
        }
        if !self.requires.is_empty() {
            content.push_str("\nrequire (\n");
            for (path, version) in &self.requires {
                content.push_str(&format!("\t{} {}\n", path, version));
            }
            content.push_str(")\n");
        }
        content
    }

    #[allow(dead_code)]
    pub fn build(&self) -> GoModFile {
        GoModFile::parse("go.mod", &self.content()).unwrap()
    }
}

/// Write `content` to `dir/go.mod` and return its path
#[allow(dead_code)]
pub fn write_go_mod(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("go.mod");
    std::fs::write(&path, content).unwrap();
    path
}
