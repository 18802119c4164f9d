//! Rendering targets for command reports.

/// Where a report is written.
///
/// Reports call these in order; an implementation owns formatting and the
/// stream each kind of line goes to.
pub trait Output {
    /// Heading followed by `:`.
    fn section(&mut self, name: &str);

    fn key_value(&mut self, key: &str, value: &str);

    /// Indented entry under the last section.
    fn list_item(&mut self, text: &str);

    /// One finished step, e.g. `Writing X.h ... done!`.
    fn progress(&mut self, action: &str, outcome: &str);

    fn warning(&mut self, msg: &str);

    fn error(&mut self, msg: &str);

    /// Labelled separator between preview files.
    fn divider(&mut self, label: &str);

    /// Text written as is.
    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// Data collected by an operation, ready to be rendered.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Writes to stdout, with warnings and errors on stderr.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  {}", text);
    }

    fn progress(&mut self, action: &str, outcome: &str) {
        println!("{} ... {}", action, outcome);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects rendered lines, for asserting on report output.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn section(&mut self, name: &str) {
        self.lines.push(format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.lines.push(format!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.lines.push(format!("  {}", text));
    }

    fn progress(&mut self, action: &str, outcome: &str) {
        self.lines.push(format!("{} ... {}", action, outcome));
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(format!("warning: {}", msg));
    }

    fn error(&mut self, msg: &str) {
        self.lines.push(format!("error: {}", msg));
    }

    fn divider(&mut self, label: &str) {
        self.lines.push(format!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn newline(&mut self) {
        self.lines.push(String::new());
    }
}
