//! Stateless display units: each writes one item's fields and nothing else.

use std::io::{self, Write};

use shared::domain::{Player, Post};

pub trait ItemDisplay {
    fn display(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl ItemDisplay for Post {
    fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "### {}", self.title)?;
        for line in self.body.lines() {
            writeln!(out, "{line}")?;
        }
        writeln!(out)
    }
}

impl ItemDisplay for Player {
    fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} - {}", self.name, self.score)
    }
}

impl ItemDisplay for &str {
    fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "- {self}")
    }
}

/// Heading followed by every item in order.
pub fn display_section<T: ItemDisplay>(
    heading: &str,
    items: &[T],
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out, "## {heading}")?;
    for item in items {
        item.display(out)?;
    }
    writeln!(out)
}

#[cfg(test)]
#[path = "tests/display_tests.rs"]
mod tests;
