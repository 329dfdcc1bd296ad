//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    pub schema_path: PathBuf,
    pub class_count: usize,
    pub roots: Vec<String>,
    /// Class references that will render as `unknown`.
    pub unresolved: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for id in &self.unresolved {
            out.unresolved(id);
        }

        out.valid(&self.schema_path.display().to_string());
        out.blank();
        out.count("classes", self.class_count);
        out.count("roots", self.roots.len());
        for root in &self.roots {
            out.class_id(root);
        }
    }
}
