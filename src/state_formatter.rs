use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::{Occupant, Slot};
use crate::state::State;

/// Draws a state in the format the puzzle was loaded from
pub struct StateFormatter<'a> {
    state: &'a State,
    format: Format,
}

impl<'a> StateFormatter<'a> {
    pub(crate) fn new(state: &'a State, format: Format) -> Self {
        Self { state, format }
    }

    fn tile(&self, occupant: Option<Occupant>) -> char {
        match self.format {
            Format::Native => self.tile_native(occupant),
            Format::Xsb => self.tile_xsb(occupant),
        }
    }

    fn tile_native(&self, occupant: Option<Occupant>) -> char {
        // only the top occupant is visible, a box hides the storage under it
        match occupant {
            None => ' ',
            Some(Occupant::Agent) => 'R',
            Some(Occupant::Wall) => 'O',
            Some(Occupant::Box(slot)) => self.state.box_entity(slot).kind.symbol(),
            Some(Occupant::Storage(Slot::Paired(i))) => self.state.paired_storages[i].kind.symbol(),
            Some(Occupant::Storage(Slot::Generic(i))) => self.state.generic_storages[i].kind.symbol(),
        }
    }

    fn tile_xsb(&self, occupant: Option<Occupant>) -> char {
        match occupant {
            None => ' ',
            Some(Occupant::Wall) => '#',
            Some(Occupant::Storage(_)) => '.',
            Some(Occupant::Agent) => {
                if self.state.agent.standing_on.is_some() {
                    '+'
                } else {
                    '@'
                }
            }
            Some(Occupant::Box(slot)) => {
                if self.state.box_entity(slot).standing_on.is_some() {
                    '*'
                } else {
                    '$'
                }
            }
        }
    }
}

impl Display for StateFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.state.rows() {
            let line: String = self
                .state
                .grid
                .row(r)
                .iter()
                .map(|&occupant| self.tile(occupant))
                .collect();
            // don't print trailing empty tiles to match the input puzzle strings
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

impl Debug for StateFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
