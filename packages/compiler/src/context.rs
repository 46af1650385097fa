use crate::options::SynthesisOptions;
use std::cell::{Cell, RefCell};

const INDENT: &str = "  ";

/// Writer for one generated artifact.
///
/// Templates only hold a shared reference, so the text and the nesting
/// depth live in cells.
pub struct CompilerContext {
    out: RefCell<String>,
    depth: Cell<usize>,
    pub options: SynthesisOptions,
}

impl CompilerContext {
    pub fn new(options: SynthesisOptions) -> Self {
        Self {
            out: RefCell::default(),
            depth: Cell::new(0),
            options,
        }
    }

    /// Raw text, no indentation and no newline
    pub fn add(&self, text: &str) {
        self.out.borrow_mut().push_str(text);
    }

    /// One line at the current depth. Empty lines carry no trailing spaces.
    pub fn add_line(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        if !text.is_empty() {
            out.push_str(&INDENT.repeat(self.depth.get()));
            out.push_str(text);
        }
        out.push('\n');
    }

    /// Multi-line text, every line at the current depth
    pub fn add_block(&self, text: &str) {
        text.lines().for_each(|line| self.add_line(line));
    }

    pub fn indent(&self) {
        self.depth.set(self.depth.get() + 1);
    }

    pub fn dedent(&self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }

    pub fn get_output(&self) -> String {
        self.out.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_is_indented_per_line() {
        let ctx = CompilerContext::new(SynthesisOptions::default());
        ctx.add_line("return (");
        ctx.indent();
        ctx.add_block("<svg>\n<rect/>\n</svg>");
        ctx.dedent();
        ctx.add_line(");");

        assert_eq!(ctx.get_output(), "return (\n  <svg>\n  <rect/>\n  </svg>\n);\n");
    }

    #[test]
    fn test_blank_lines_carry_no_indent() {
        let ctx = CompilerContext::new(SynthesisOptions::default());
        ctx.indent();
        ctx.add_line("");
        ctx.dedent();
        ctx.dedent();
        ctx.add("x");
        ctx.add_line("y");
        assert_eq!(ctx.get_output(), "\nxy\n");
    }
}
