//! Where reports go.

/// Sink for schema reports.
///
/// Reports say what was found; the sink decides how it looks.
pub trait Output {
    /// The schema passed validation.
    fn valid(&mut self, schema: &str);

    /// A labelled total, e.g. the number of declared classes.
    fn count(&mut self, label: &str, count: usize);

    /// A class id listed under the preceding count.
    fn class_id(&mut self, id: &str);

    /// A class reference that nothing in the schema resolves.
    fn unresolved(&mut self, id: &str);

    fn blank(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Human-readable output: results on stdout, warnings on stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl Output for TerminalOutput {
    fn valid(&mut self, schema: &str) {
        println!("✓ {schema} is valid");
    }

    fn count(&mut self, label: &str, count: usize) {
        println!("  {label}: {count}");
    }

    fn class_id(&mut self, id: &str) {
        println!("    - {id}");
    }

    fn unresolved(&mut self, id: &str) {
        eprintln!("warning: unresolved class reference '{id}' renders as unknown");
    }

    fn blank(&mut self) {
        println!();
    }
}
