#![warn(rust_2018_idioms)]
#![warn(clippy::all)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate prettytable;

use std::env;
use std::process;

use clap::{App, Arg};
use prettytable::{format, Table};
use separator::Separatable;

use sokoban_search::fs;
use sokoban_search::parser;
use sokoban_search::{PuzzleState, Solve, SolveResult, Strategy};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-search")
        .author("Martin Taibr")
        .about("Solves sokoban levels in XSB format with uninformed and heuristic searches")
        .arg(
            Arg::with_name("strategy")
                .short("s")
                .long("strategy")
                .takes_value(true)
                .default_value("bfs")
                .help("bfs, dfs, ucs, greedy, astar or custom"),
        )
        .arg(
            Arg::with_name("all")
                .short("a")
                .long("all")
                .help("run every strategy and compare them in a table, ignores --strategy"),
        )
        .arg(
            Arg::with_name("steps")
                .long("steps")
                .help("print the state after every move, not just after pushes"),
        )
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .help("reject levels with different numbers of boxes and goals"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    // both have defaults or are required
    let path = matches.value_of("file").unwrap();
    let strategy_name = matches.value_of("strategy").unwrap();

    let strategy: Strategy = strategy_name.parse().unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(1);
    });

    let level = fs::read_file(path).unwrap_or_else(|err| {
        match env::current_dir() {
            Ok(dir) => eprintln!("Can't read file {} in {}: {}", path, dir.display(), err),
            Err(_) => eprintln!("Can't read file {}: {}", path, err),
        }
        process::exit(1);
    });

    let parsed = if matches.is_present("strict") {
        parser::parse_strict(&level)
    } else {
        parser::parse(&level)
    };
    let puzzle = parsed.unwrap_or_else(|err| {
        eprintln!("Failed to parse: {}", err);
        process::exit(1);
    });

    if matches.is_present("all") {
        compare_all(path, &puzzle);
    } else {
        solve_one(path, &puzzle, strategy, matches.is_present("steps"));
    }
}

fn solve_one(path: &str, puzzle: &PuzzleState, strategy: Strategy, include_steps: bool) {
    println!("Solving {} using {}...", path, strategy);
    let result = puzzle.solve(strategy);
    debug!("Search finished in {:?}", result.elapsed);

    println!("{}", result.stats);
    match result.moves {
        None => println!("No solution"),
        Some(ref moves) => {
            println!("Found solution:");
            print!("{}", puzzle.xsb_solution(moves, include_steps));
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());
        }
    }
    println!(
        "Runtime: {} ms",
        (result.elapsed.as_millis() as u64).separated_string()
    );
}

fn compare_all(path: &str, puzzle: &PuzzleState) {
    println!("Solving {} using all strategies...", path);

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row![
        "Strategy",
        "Moves",
        "Pushes",
        "Generated",
        "Expanded",
        "Duplicates",
        "Time (ms)"
    ]);
    for &strategy in &Strategy::ALL {
        let result = puzzle.solve(strategy);
        table.add_row(result_row(&result));
    }
    table.printstd();
}

fn result_row(result: &SolveResult) -> prettytable::Row {
    let (moves, pushes) = match result.moves {
        Some(ref moves) => (
            moves.move_cnt().separated_string(),
            moves.push_cnt().separated_string(),
        ),
        None => ("-".to_string(), "-".to_string()),
    };
    row![
        result.strategy,
        moves,
        pushes,
        result.generated_states().separated_string(),
        result.expanded_states().separated_string(),
        result.stats.total_reached_duplicates().separated_string(),
        (result.elapsed.as_millis() as u64).separated_string()
    ]
}
