use crate::ant::AgentState;
use colored::Colorize;

/// Text renderer for one frame of the automaton
#[derive(Clone, Debug)]
pub struct Renderer {
    pub on: char,
    pub off: char,
    pub ant: char,
    /// Colour the header and ant glyph
    pub color: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            on: '.',
            off: ' ',
            ant: 'x',
            color: true,
        }
    }
}

impl Renderer {
    /// Plain ASCII renderer, no escape codes
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }

    /// Tick counter and separator line
    pub fn header(&self, epoch: u32) -> String {
        let title = format!("epoch: {}", epoch);
        let rule = "=".repeat(10);
        if self.color {
            format!("{}\n{}\n", title.green().bold(), rule.bright_blue())
        } else {
            format!("{}\n{}\n", title, rule)
        }
    }

    /// Grid body with the ant overlaid at its column/row
    pub fn body(&self, cells: &[Vec<bool>], agent: &AgentState) -> String {
        let width = cells.first().map_or(0, Vec::len);
        let mut out = String::with_capacity((width + 1) * cells.len() + 16);

        for (y, row) in cells.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if agent.position.x == x && agent.position.y == y {
                    self.push_ant(&mut out);
                } else {
                    out.push(if cell { self.on } else { self.off });
                }
            }
            out.push('\n');
        }
        out
    }

    /// Header, body and a trailing blank line
    pub fn frame(&self, epoch: u32, cells: &[Vec<bool>], agent: &AgentState) -> String {
        let mut out = self.header(epoch);
        out.push_str(&self.body(cells, agent));
        out.push('\n');
        out
    }

    fn push_ant(&self, out: &mut String) {
        if self.color {
            out.push_str(&self.ant.to_string().red().bold().to_string());
        } else {
            out.push(self.ant);
        }
    }
}
