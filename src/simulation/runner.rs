use crate::simulation::automaton::Automaton;
use crate::simulation::render::Renderer;
use colored::Colorize;
use std::io::{self, Write};
use std::time::Duration;

/// ANSI: clear screen and move the cursor home
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Drives the automaton: render, wait, step, once per epoch.
///
/// Each frame is written before its step, so stopping between ticks (or a
/// killed process mid-sleep) never shows a half-applied step.
#[derive(Clone, Debug)]
pub struct Runner {
    pub delay: Duration,
    pub epochs: u32,
    pub clear: bool,
    pub renderer: Renderer,
}

impl Runner {
    pub fn new(delay: Duration, epochs: u32, clear: bool, renderer: Renderer) -> Self {
        Self {
            delay,
            epochs,
            clear,
            renderer,
        }
    }

    /// Run all epochs, sleeping the real delay between frames
    pub fn run<W: Write>(&self, automaton: &mut Automaton, out: &mut W) -> io::Result<()> {
        self.run_with_sleep(automaton, out, std::thread::sleep)
    }

    /// Run all epochs with an injected sleep
    pub fn run_with_sleep<W, S>(
        &self,
        automaton: &mut Automaton,
        out: &mut W,
        mut sleep: S,
    ) -> io::Result<()>
    where
        W: Write,
        S: FnMut(Duration),
    {
        for epoch in 1..=self.epochs {
            if self.clear {
                out.write_all(CLEAR_SCREEN.as_bytes())?;
            }
            let agent = automaton.agent_state();
            let frame = self.renderer.frame(epoch, automaton.snapshot(), &agent);
            out.write_all(frame.as_bytes())?;
            out.flush()?;

            if !self.delay.is_zero() {
                sleep(self.delay);
            }
            automaton.step();
        }
        Ok(())
    }

    /// One-line report of the final state
    pub fn summary(&self, automaton: &Automaton) -> String {
        let agent = automaton.agent_state();
        let epochs = format!("epochs={}", self.epochs);
        let ant = format!("ant=({},{})", agent.position.x, agent.position.y);
        let heading = format!("heading={}", agent.direction);
        let on_cells = format!("on_cells={}", automaton.grid().count_on());

        if self.renderer.color {
            format!(
                "{} {} {} {} {} {} {}",
                "===".bright_blue().bold(),
                "Simulation finished".green().bold(),
                "|".dimmed(),
                epochs.cyan(),
                ant.cyan(),
                heading.cyan(),
                on_cells.cyan(),
            )
        } else {
            format!(
                "=== Simulation finished | {} {} {} {}",
                epochs, ant, heading, on_cells
            )
        }
    }
}
