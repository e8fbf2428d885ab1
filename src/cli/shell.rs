//! Line-driven menu loop.
//!
//! Each cycle prints the menu, reads an option key, reads one identifier per
//! prompt of that option, executes exactly one command and prints its
//! outcome. End of input ends the loop the same way `X` does.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::graph::DiGraph;
use crate::types::VertexId;

use super::commands::{self, Command};
use super::config::{OutputFormat, ShellConfig};
use super::menu::{self, MenuOption};

/// Interactive session over a reader/writer pair, owning its graph.
pub struct Shell<R, W> {
    input: R,
    output: W,
    graph: DiGraph,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a session with an empty graph.
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self::with_graph(input, output, config, DiGraph::new())
    }

    /// Create a session operating on an existing graph.
    pub fn with_graph(input: R, output: W, config: ShellConfig, graph: DiGraph) -> Self {
        Self {
            input,
            output,
            graph,
            config,
        }
    }

    pub fn graph(&self) -> &DiGraph {
        &self.graph
    }

    /// Consume the session, returning the graph and the writer.
    pub fn into_parts(self) -> (DiGraph, W) {
        (self.graph, self.output)
    }

    /// Run until `X` or end of input. Only I/O errors on the streams are returned.
    pub fn run(&mut self) -> io::Result<()> {
        while self.step()? {}
        self.output.flush()
    }

    /// Run one menu cycle. Returns `false` once the loop should stop.
    pub fn step(&mut self) -> io::Result<bool> {
        let text = self.config.format == OutputFormat::Text;
        if text && self.config.show_menu {
            menu::write_menu(&mut self.output)?;
        }

        let Some(key) = self.read_id()? else {
            debug!("input closed");
            return Ok(false);
        };
        if text && self.config.show_menu {
            menu::write_separator(&mut self.output)?;
        }

        let command = match MenuOption::from_key(key) {
            Some(option) => {
                let mut args: Vec<VertexId> = Vec::with_capacity(option.prompts().len());
                for prompt in option.prompts() {
                    if text {
                        write!(self.output, "{prompt}")?;
                        self.output.flush()?;
                    }
                    match self.read_id()? {
                        Some(id) => args.push(id),
                        None => return Ok(false),
                    }
                }
                Command::from_option(option, &args).unwrap_or(Command::Invalid(key))
            }
            None => Command::Invalid(key),
        };

        if text && command == Command::ExportDot {
            writeln!(self.output, "Generating DOT file...")?;
        }
        let outcome = commands::execute(&mut self.graph, &command, &self.config.dot_path);
        debug!("{} -> {:?}", command.name(), outcome);
        commands::write_outcome(&mut self.output, &outcome, self.config.format)?;

        Ok(!outcome.is_quit())
    }

    /// First non-whitespace character of the next non-blank line.
    fn read_id(&mut self) -> io::Result<Option<char>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            if let Some(c) = line.chars().find(|c| !c.is_whitespace()) {
                return Ok(Some(c));
            }
        }
    }
}
