use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// `R` agent, `O` wall, `X`/`S` generic box/storage, letters for paired boxes/storages
    Native,
    Xsb,
}

/// Decides the order in which discovered states are explored
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    GreedyBestFirst,
    AStar,
}

impl Algorithm {
    /// Uninformed algorithms ignore heuristic scores when ordering states
    pub fn is_informed(self) -> bool {
        match self {
            Algorithm::BreadthFirst | Algorithm::DepthFirst => false,
            Algorithm::GreedyBestFirst | Algorithm::AStar => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    Null,
    Manhattan,
    /// Manhattan but states with a stuck box are dead ends
    Deadlock,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigErr {
    UnknownAlgorithm(String),
    UnknownHeuristic(String),
}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigErr::UnknownAlgorithm(ref name) => write!(f, "Unknown algorithm: {}", name),
            ConfigErr::UnknownHeuristic(ref name) => write!(f, "Unknown heuristic: {}", name),
        }
    }
}

impl Error for ConfigErr {}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Algorithm::BreadthFirst => write!(f, "bfs"),
            Algorithm::DepthFirst => write!(f, "dfs"),
            Algorithm::GreedyBestFirst => write!(f, "gbfs"),
            Algorithm::AStar => write!(f, "astar"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::BreadthFirst),
            "dfs" => Ok(Algorithm::DepthFirst),
            "gbfs" | "greedy" => Ok(Algorithm::GreedyBestFirst),
            "a*" | "astar" => Ok(Algorithm::AStar),
            _ => Err(ConfigErr::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Heuristic::Null => write!(f, "none"),
            Heuristic::Manhattan => write!(f, "manhattan"),
            Heuristic::Deadlock => write!(f, "deadlock"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "null" => Ok(Heuristic::Null),
            "manhattan" | "man" | "trivial" => Ok(Heuristic::Manhattan),
            "deadlock" | "custom" => Ok(Heuristic::Deadlock),
            _ => Err(ConfigErr::UnknownHeuristic(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_algorithms() {
        assert_eq!("BFS".parse(), Ok(Algorithm::BreadthFirst));
        assert_eq!("dfs".parse(), Ok(Algorithm::DepthFirst));
        assert_eq!("GBFS".parse(), Ok(Algorithm::GreedyBestFirst));
        assert_eq!("A*".parse(), Ok(Algorithm::AStar));
        assert_eq!(" astar ".parse(), Ok(Algorithm::AStar));
        assert_eq!(
            "ida".parse::<Algorithm>(),
            Err(ConfigErr::UnknownAlgorithm("ida".to_string()))
        );
    }

    #[test]
    fn parsing_heuristics() {
        assert_eq!("None".parse(), Ok(Heuristic::Null));
        assert_eq!("Manhattan".parse(), Ok(Heuristic::Manhattan));
        assert_eq!("man".parse(), Ok(Heuristic::Manhattan));
        assert_eq!("trivial".parse(), Ok(Heuristic::Manhattan));
        assert_eq!("custom".parse(), Ok(Heuristic::Deadlock));
        assert_eq!(
            "euclid".parse::<Heuristic>(),
            Err(ConfigErr::UnknownHeuristic("euclid".to_string()))
        );
    }

    #[test]
    fn names_round_trip() {
        for &alg in &[
            Algorithm::BreadthFirst,
            Algorithm::DepthFirst,
            Algorithm::GreedyBestFirst,
            Algorithm::AStar,
        ] {
            assert_eq!(alg.to_string().parse(), Ok(alg));
        }
        for &h in &[Heuristic::Null, Heuristic::Manhattan, Heuristic::Deadlock] {
            assert_eq!(h.to_string().parse(), Ok(h));
        }
    }
}
