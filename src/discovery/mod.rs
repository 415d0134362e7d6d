//! Test discovery: directory walk + line-prefix name extraction
//!
//! A test is any declaration whose trimmed line starts with the literal
//! prefix `pub async fn test_`. Discovery is deliberately shallow: no
//! parsing, no signature checking, no de-duplication. Whatever the scan
//! finds is registered verbatim; the generated file either compiles in the
//! harness or it does not.
//!
//! Every error is fatal. An unreadable directory, an unreadable file, or a
//! malformed qualifying line aborts the whole run; there is no partial
//! output mode.

pub mod extractor;
pub mod walker;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort a discovery run
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path}:{line}: test declaration has no parameter list: `{text}`")]
    MissingParen {
        path: PathBuf,
        line: usize,
        text: String,
    },
}

/// One discovered test: a module (source file stem) and a function name.
///
/// The qualified form `module::function` doubles as the test's display
/// name and, pasted verbatim, as the callable path in the generated
/// registry. Neither component is validated against identifier syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub module: String,
    pub function: String,
}

impl TestCase {
    pub fn new(module: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            function: function.into(),
        }
    }

    /// `<module>::<function>`, the name the harness sees.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.module, self.function)
    }
}

/// Walk every file under `dir` and extract the tests each declares.
///
/// Cases accumulate in traversal order (filesystem enumeration order;
/// callers must not depend on it). Any walk, read, or extraction error
/// aborts the run.
pub fn discover_tests(dir: &Path) -> Result<Vec<TestCase>, DiscoveryError> {
    let mut cases = Vec::new();

    for path in walker::walk(dir)? {
        tracing::debug!(path = %path.display(), "scanning");
        cases.extend(extractor::extract_file(&path)?);
    }

    Ok(cases)
}
