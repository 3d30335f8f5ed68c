use std::fmt::Write;

use treematch_core::Colors;
use treematch_core::utils::escape_token_text;

use super::{ERROR_ELEMENT, INDENT, WHITESPACE};
use crate::syntax::SyntaxNode;

/// Writes any [`SyntaxNode`] tree in the dump format.
///
/// Trees read with [`parse_dump`](super::parse_dump) print back to the
/// text they were read from, blank lines and error messages aside. Line
/// breaks inside token text print escaped and read back escaped, so other
/// trees reach that fixed point after one print.
pub struct DumpPrinter<N> {
    root: N,
    colors: Colors,
}

impl<N: SyntaxNode> DumpPrinter<N> {
    pub fn new(root: N) -> Self {
        Self {
            root,
            colors: Colors::OFF,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colors = Colors::new(value);
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let c = &self.colors;
        writeln!(w, "{}{}{}", c.blue, self.root.rule_name(), c.reset)?;
        for child in self.root.children() {
            self.format_node(w, &child, 1)?;
        }
        Ok(())
    }

    fn format_node(&self, w: &mut impl Write, node: &N, depth: usize) -> std::fmt::Result {
        let c = &self.colors;
        for _ in 0..depth {
            w.write_str(INDENT)?;
        }

        let rule = node.rule_name();
        match node.token_kind() {
            Some(kind) if kind == WHITESPACE => {
                writeln!(w, "{}{rule}({}){}", c.dim, node.text(), c.reset)?;
            }
            Some(kind) if kind == ERROR_ELEMENT => {
                writeln!(w, "{}{rule}{}", c.red, c.reset)?;
            }
            Some(kind) if node.is_terminal() => {
                let text = escape_token_text(&node.text());
                writeln!(
                    w,
                    "{rule}({}{kind}{})('{}{text}{}')",
                    c.dim, c.reset, c.green, c.reset
                )?;
            }
            _ => writeln!(w, "{}{rule}{}", c.blue, c.reset)?,
        }

        for child in node.children() {
            self.format_node(w, &child, depth + 1)?;
        }
        Ok(())
    }
}
