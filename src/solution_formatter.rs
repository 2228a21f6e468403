use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::state::State;
use crate::state_formatter::StateFormatter;

const SEPARATOR: &str = "---------------------------------";

/// Every state of a solution path with the move that led to it
pub struct SolutionFormatter<'a> {
    path: &'a [State],
    format: Format,
}

impl<'a> SolutionFormatter<'a> {
    pub fn new(path: &'a [State], format: Format) -> Self {
        Self { path, format }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", SEPARATOR)?;
        for (i, state) in self.path.iter().enumerate() {
            match state.last_move() {
                Some(dir) => writeln!(f, "Step {} - Move {}:", i, dir.name())?,
                None => writeln!(f, "Step {} - Initial state:", i)?,
            }
            write!(f, "{}", StateFormatter::new(state, self.format))?;
            writeln!(f, "{}", SEPARATOR)?;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
