use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::config::Format;
use crate::data::{Entity, Kind, Pos, Tag};
use crate::puzzle::{Puzzle, PuzzleErr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    Puzzle(PuzzleErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::Puzzle(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<PuzzleErr> for ParserErr {
    fn from(err: PuzzleErr) -> Self {
        ParserErr::Puzzle(err)
    }
}

impl FromStr for Puzzle {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Detects the format - only XSB uses `#`
pub fn parse(puzzle: &str) -> Result<Puzzle, ParserErr> {
    if puzzle.contains('#') {
        parse_format(puzzle, Format::Xsb)
    } else {
        parse_format(puzzle, Format::Native)
    }
}

pub fn parse_format(puzzle: &str, format: Format) -> Result<Puzzle, ParserErr> {
    // trim so we can specify puzzles using raw strings more easily
    let puzzle = puzzle.trim_matches('\n').trim_end();

    let symbol: fn(char) -> Option<Symbol> = match format {
        Format::Native => native_symbol,
        Format::Xsb => xsb_symbol,
    };

    let mut entities = Vec::new();
    let mut rows = 0;
    let mut cols = 0;
    for (r, line) in puzzle.lines().enumerate() {
        rows = r + 1;
        for (c, ch) in line.chars().enumerate() {
            cols = cols.max(c + 1);
            let pos = Pos::new(r, c);
            let (first, second) = symbol(ch).ok_or(ParserErr::Pos(r, c))?;
            entities.extend(first.map(|kind| Entity::new(kind, pos)));
            entities.extend(second.map(|kind| Entity::new(kind, pos)));
        }
    }

    Ok(Puzzle::new(rows, cols, entities)?.with_format(format))
}

/// Up to two entities per tile: something standing on a storage
type Symbol = (Option<Kind>, Option<Kind>);

fn native_symbol(ch: char) -> Option<Symbol> {
    let kind = match ch {
        ' ' => return Some((None, None)),
        'R' => Kind::Agent,
        'O' => Kind::Wall,
        'X' => Kind::Box(Tag::Generic),
        'S' => Kind::Storage(Tag::Generic),
        'A'..='Z' => Kind::Box(Tag::Paired(ch.to_ascii_lowercase())),
        'a'..='z' => Kind::Storage(Tag::Paired(ch)),
        _ => return None,
    };
    Some((Some(kind), None))
}

fn xsb_symbol(ch: char) -> Option<Symbol> {
    let goal = Some(Kind::Storage(Tag::Generic));
    let symbol = match ch {
        ' ' | '-' | '_' => (None, None),
        '#' => (Some(Kind::Wall), None),
        '@' | 'p' => (Some(Kind::Agent), None),
        '+' | 'P' => (Some(Kind::Agent), goal),
        '$' | 'b' => (Some(Kind::Box(Tag::Generic)), None),
        '*' | 'B' => (Some(Kind::Box(Tag::Generic)), goal),
        '.' => (goal, None),
        _ => return None,
    };
    Some(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Occupant, Slot};

    #[test]
    fn native() {
        let puzzle = r"
OOOOOOO
ORX  SO
O B b O
OOOOOOO
";
        let puzzle: Puzzle = puzzle.parse().unwrap();
        assert_eq!(puzzle.format(), Format::Native);
        let state = puzzle.state();
        assert_eq!((state.rows(), state.cols()), (4, 7));
        assert_eq!(state.agent().pos, Pos::new(1, 1));
        assert_eq!(state.generic_boxes()[0].pos, Pos::new(1, 2));
        assert_eq!(state.generic_storages()[0].pos, Pos::new(1, 5));
        assert_eq!(state.paired_boxes()[0].kind, Kind::Box(Tag::Paired('b')));
        assert_eq!(state.paired_boxes()[0].pos, Pos::new(2, 2));
        assert_eq!(state.paired_storages()[0].pos, Pos::new(2, 4));
        assert_eq!(state.occupant(Pos::new(0, 0)), Some(Occupant::Wall));
        assert_eq!(state.occupant(Pos::new(2, 1)), None);
    }

    #[test]
    fn xsb() {
        let puzzle = r"
#######
#.@$ $#
#*  + #
#######
";
        let err = puzzle.parse::<Puzzle>().unwrap_err();
        assert_eq!(err, ParserErr::Puzzle(PuzzleErr::MultipleAgents));

        let puzzle = puzzle.replace('@', " ");
        let puzzle: Puzzle = puzzle.parse().unwrap();
        assert_eq!(puzzle.format(), Format::Xsb);
        let state = puzzle.state();
        assert_eq!(state.agent().pos, Pos::new(2, 4));
        assert_eq!(state.agent().standing_on, Some(Slot::Generic(2)));
        assert_eq!(state.generic_boxes().len(), 3);
        assert_eq!(state.generic_storages().len(), 3);
        assert_eq!(state.generic_boxes()[2].standing_on, Some(Slot::Generic(1)));
        assert_eq!(
            state.occupant(Pos::new(2, 1)),
            Some(Occupant::Box(Slot::Generic(2)))
        );
    }

    #[test]
    fn ragged_rows_are_padded() {
        let puzzle: Puzzle = "OOOO\nOR\nOOOO".parse().unwrap();
        assert_eq!(puzzle.state().cols(), 4);
        assert_eq!(puzzle.state().occupant(Pos::new(1, 3)), None);
    }

    #[test]
    fn forcing_format() {
        // `p` is an agent in XSB but a paired storage in the native format
        let puzzle = parse_format("p.$", Format::Xsb).unwrap();
        assert_eq!(puzzle.state().agent().pos, Pos::new(0, 0));
        assert_eq!(
            parse_format("p.$", Format::Native).unwrap_err(),
            ParserErr::Pos(0, 1)
        );
    }

    #[test]
    fn errors() {
        assert_eq!("".parse::<Puzzle>().unwrap_err(), ParserErr::Puzzle(PuzzleErr::NoAgent));
        assert_eq!("OOO\nOR?".parse::<Puzzle>().unwrap_err(), ParserErr::Pos(1, 2));
        assert_eq!(
            "#@$#".parse::<Puzzle>().unwrap_err(),
            ParserErr::Puzzle(PuzzleErr::BoxesStorages)
        );
        assert_eq!(
            "RAb".parse::<Puzzle>().unwrap_err(),
            ParserErr::Puzzle(PuzzleErr::MissingStorage('a'))
        );
        assert_eq!(
            ParserErr::Pos(1, 2).to_string(),
            "Invalid cell at pos: [1, 2]"
        );
    }
}
