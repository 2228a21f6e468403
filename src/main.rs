use std::env;
use std::process;

use clap::{App, Arg, ArgGroup};
use log::info;

use sokoban_search::config::{Algorithm, Format, Heuristic};
use sokoban_search::{LoadPuzzle, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-search")
        .author("martin-t")
        .version("0.1")
        .about("Solves box pushing puzzles by searching the state space")
        .arg(
            Arg::with_name("native")
                .short("n")
                .long("native")
                .help("parse as the native format (R, O, X, S and letters)"),
        )
        .arg(
            Arg::with_name("xsb")
                .short("x")
                .long("xsb")
                .help("parse as XSB format"),
        )
        .group(ArgGroup::with_name("format").arg("native").arg("xsb"))
        .arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .takes_value(true)
                .default_value("bfs")
                .help("bfs, dfs, gbfs or astar"),
        )
        .arg(
            Arg::with_name("heuristic")
                .short("H")
                .long("heuristic")
                .takes_value(true)
                .default_value("manhattan")
                .help("none, manhattan or deadlock - ignored by bfs and dfs"),
        )
        .arg(
            Arg::with_name("max-visited")
                .long("max-visited")
                .takes_value(true)
                .help("give up after visiting this many states"),
        )
        .arg(
            Arg::with_name("status")
                .short("s")
                .long("status")
                .help("print stats every time a new depth is reached"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let format = if matches.is_present("native") {
        Some(Format::Native)
    } else if matches.is_present("xsb") {
        Some(Format::Xsb)
    } else {
        None
    };
    let algorithm: Algorithm = matches
        .value_of("algorithm")
        .unwrap_or("bfs")
        .parse()
        .unwrap_or_else(|err| {
            println!("{}", err);
            process::exit(1);
        });
    let mut heuristic: Heuristic = matches
        .value_of("heuristic")
        .unwrap_or("manhattan")
        .parse()
        .unwrap_or_else(|err| {
            println!("{}", err);
            process::exit(1);
        });
    if !algorithm.is_informed() && heuristic != Heuristic::Null {
        info!("{} doesn't use heuristics, using {}", algorithm, Heuristic::Null);
        heuristic = Heuristic::Null;
    }
    let max_visited = matches.value_of("max-visited").map(|max| {
        max.parse::<u64>().unwrap_or_else(|err| {
            println!("Invalid max-visited {}: {}", max, err);
            process::exit(1);
        })
    });
    let print_status = matches.is_present("status");
    let path = matches.value_of("file").unwrap_or_default();

    let loaded = match format {
        Some(format) => path.load_puzzle_format(format),
        None => path.load_puzzle(),
    };
    let puzzle = loaded.unwrap_or_else(|err| {
        match env::current_dir() {
            Ok(dir) => println!("Can't load puzzle {} in {}: {}", path, dir.display(), err),
            Err(_) => println!("Can't load puzzle {}: {}", path, err),
        }
        process::exit(1);
    });

    println!("Solving {}...", path);
    let solution = match max_visited {
        Some(max) => puzzle.solve_limited(algorithm, heuristic, max, print_status),
        None => puzzle.solve(algorithm, heuristic, print_status),
    };
    println!("{}", solution.stats);

    match (&solution.path, solution.moves()) {
        (Some(path), Some(moves)) => {
            println!("Found solution:");
            print!("{}", puzzle.format_solution(path));
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());
        }
        _ if solution.aborted => println!("Gave up without finding a solution"),
        _ => println!("No solution"),
    }
}
