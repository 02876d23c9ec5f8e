//! Console presenter.
//!
//! Renders report blocks as plain text. Output goes to any `io::Write`, so
//! the same presenter drives stdout in the binary and a `Vec<u8>` in tests.

use std::io::{BufRead, Write};

use chrono::NaiveDateTime;

use crate::error::Result;
use crate::report::{Block, Report, Section};
use crate::text::normalize;

/// Date part of the prologue sub-header.
pub const FMT_DATE: &str = "%Y-%m-%d";

/// Time part of the prologue sub-header.
pub const FMT_TIME: &str = "%H:%M";

/// Default wrap width in columns.
pub const DEFAULT_WIDTH: usize = 80;

const HOMEPAGE_HINT: &str = "Press Enter to continue, Ctrl+C to quit.";
const BULLET: &str = "  * ";
const BULLET_INDENT: &str = "    ";
const CHOICE_INDENT: &str = "  ";

/// Format a timestamp as the `"{date}\t{time}"` sub-header line.
#[must_use]
pub fn brief(now: &NaiveDateTime) -> String {
    format!("{}\t{}", now.format(FMT_DATE), now.format(FMT_TIME))
}

/// Plain-text report writer.
#[derive(Debug)]
pub struct Console<W> {
    out: W,
    width: usize,
}

impl<W: Write> Console<W> {
    /// Create a presenter wrapping lines at `width` columns (minimum 20).
    pub fn new(out: W, width: usize) -> Self {
        Self {
            out,
            width: width.max(20),
        }
    }

    /// Consume the presenter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Page banner framed by `=` rules.
    pub fn header(&mut self, text: &str) -> Result<()> {
        let rule = "=".repeat(self.width);
        writeln!(self.out)?;
        writeln!(self.out, "{rule}")?;
        for line in wrap(&normalize(text), self.width) {
            writeln!(self.out, "{}", center(&line, self.width))?;
        }
        writeln!(self.out, "{rule}")?;
        Ok(())
    }

    /// Line under a banner. Tabs are kept.
    pub fn sub_header(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text.trim())?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Wrapped paragraph followed by a blank line.
    pub fn para(&mut self, text: &str) -> Result<()> {
        for line in wrap(&normalize(text), self.width) {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    /// Title underlined with `-`.
    pub fn title(&mut self, text: &str) -> Result<()> {
        let text = normalize(text);
        let underline = "-".repeat(text.chars().count().clamp(1, self.width));
        writeln!(self.out, "{text}")?;
        writeln!(self.out, "{underline}")?;
        Ok(())
    }

    /// List item with a hanging indent.
    pub fn bullet(&mut self, text: &str) -> Result<()> {
        let width = self.width - BULLET.len();
        for (i, line) in wrap(&normalize(text), width).iter().enumerate() {
            let lead = if i == 0 { BULLET } else { BULLET_INDENT };
            writeln!(self.out, "{lead}{line}")?;
        }
        Ok(())
    }

    /// Numbered options, starting at 1.
    pub fn multi_choice(&mut self, options: &[String]) -> Result<()> {
        for (i, option) in options.iter().enumerate() {
            writeln!(self.out, "{CHOICE_INDENT}[{}] {}", i + 1, normalize(option))?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    /// Navigation hint.
    pub fn homepage(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{HOMEPAGE_HINT}")?;
        Ok(())
    }

    /// Progress message. `direction` is `>` when starting and `<` when done.
    pub fn loading(&mut self, message: &str, direction: char) -> Result<()> {
        let arrows = direction.to_string().repeat(3);
        writeln!(self.out, "{arrows} {message}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Render one block.
    pub fn render(&mut self, block: &Block) -> Result<()> {
        match block {
            Block::Header(t) => self.header(t),
            Block::SubHeader(t) => self.sub_header(t),
            Block::Para(t) => self.para(t),
            Block::Title(t) => self.title(t),
            Block::Bullet(t) => self.bullet(t),
            Block::MultiChoice(options) => self.multi_choice(options),
            Block::Homepage => self.homepage(),
        }
    }

    /// Render every block of a section.
    pub fn render_section(&mut self, section: &Section) -> Result<()> {
        for block in &section.blocks {
            self.render(block)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Render a report, blocking on `input` for a line between sections.
    ///
    /// With `input` set to `None` the sections are written back to back.
    pub fn render_report<R: BufRead>(&mut self, report: &Report, mut input: Option<R>) -> Result<()> {
        for (i, section) in report.sections.iter().enumerate() {
            if i > 0 {
                if let Some(reader) = input.as_mut() {
                    pause(reader)?;
                }
            }
            self.render_section(section)?;
        }
        Ok(())
    }
}

/// Block until a line (or end of input) is read. The content is ignored.
pub fn pause<R: BufRead>(input: &mut R) -> Result<()> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn center(line: &str, width: usize) -> String {
    let len = line.chars().count();
    let pad = width.saturating_sub(len) / 2;
    format!("{}{line}", " ".repeat(pad))
}
