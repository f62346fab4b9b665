use clap::{value_t, App, Arg};

use anyhow::Error;

use searchtree::{Board, SearchEngine, SearchResult};

fn main() -> () {
    match driver() {
        Ok(_) => {}
        Err(e) => eprintln!("{}", e),
    }
}

fn driver() -> Result<(), Error> {
    let matches = App::new("Eight Puzzle")
        .version("1.0")
        .about("Solve the 3x3 sliding-tile puzzle by uninformed search")
        .arg(
            Arg::with_name("start")
                .value_name("START")
                .help("Start board, 9 digits row-major, 0 is the blank")
                .required(false)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("goal")
                .value_name("GOAL")
                .help("Goal board, 9 digits row-major, 0 is the blank")
                .required(false)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("limit")
                .long("limit")
                .value_name("LIMIT")
                .help("Depth limit for the depth-limited search (defaults to the BFS solution depth)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("steps")
                .long("steps")
                .help("Print every board along each solution path"),
        )
        .get_matches();

    let start = matches.value_of("start").unwrap_or("364017852");
    let goal = matches.value_of("goal").unwrap_or("012345678");
    let steps = matches.is_present("steps");

    let engine = SearchEngine::new(start, goal)?;

    println!("Start state:");
    print_grid(&start.parse()?);
    println!("Goal state:");
    print_grid(&goal.parse()?);

    let dfs = engine.depth_first()?;
    report("Depth-First Search (DFS)", &dfs);
    if steps {
        print_steps(&dfs);
    }

    let bfs = engine.breadth_first()?;
    report("Breadth-First Search (BFS)", &bfs);
    if steps {
        print_steps(&bfs);
    }

    let limit = match matches.value_of("limit") {
        Some(_) => value_t!(matches, "limit", usize)?,
        None => bfs.depth().unwrap_or(5),
    };
    let dls = engine.depth_limited(limit)?;
    report(&format!("Depth-Limited Search (limit {})", limit), &dls);
    if steps {
        print_steps(&dls);
    }

    Ok(())
}

fn report(name: &str, result: &SearchResult) {
    println!("--- Report for {} ---", name);
    println!("Elapsed time: {:?}", result.elapsed());
    println!("Distinct states explored: {}", result.visited());
    match (result.depth(), result.moves()) {
        (Some(depth), Some(moves)) => {
            println!("Solution found at depth/cost: {}", depth);
            println!("Moves in the solution: {}", moves);
        }
        _ => println!("No solution found."),
    }
    println!("--------------------------------------");
    println!();
}

fn print_grid(board: &Board) {
    println!("-------");
    for row in board.tiles().chunks(3) {
        println!("|{}|{}|{}|", row[0], row[1], row[2]);
    }
    println!("-------");
}

fn print_steps(result: &SearchResult) {
    for (step, state) in result.path().iter().enumerate() {
        println!("Step {} (depth {}):", step, state.depth());
        print_grid(state.board());
    }
    println!();
}
