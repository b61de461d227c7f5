//! Qualified path construction

/// Separator between qualified path segments, in every language
pub const QUALIFIED_PATH_SEPARATOR: &str = ".";

/// Enclosing scope names, outermost first
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    scopes: Vec<String>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Module name followed by the enclosing declaration names
    pub fn rooted<S: AsRef<str>>(module: &str, segments: &[S]) -> Self {
        let mut stack = Self::new();
        stack.push(module);
        for segment in segments {
            stack.push(segment.as_ref());
        }
        stack
    }

    /// Empty names (anonymous scopes) leave the path unchanged
    pub fn push(&mut self, name: &str) {
        let name = name.trim();
        if !name.is_empty() {
            self.scopes.push(name.to_string());
        }
    }

    pub fn path(&self) -> String {
        self.scopes.join(QUALIFIED_PATH_SEPARATOR)
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}
