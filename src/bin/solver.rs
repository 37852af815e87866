use clap::{Parser, Subcommand};
use itertools::Itertools;
use lazysearch::{
    problems::{
        Connectivity, GridMaze, MazeParseError, PuzzleError, PuzzleHeuristicName, RouteMap,
        RouteMapError, SlidingPuzzle,
    },
    search::{
        heuristics::GridHeuristicName,
        search_engines::{SearchEngineName, SearchResult},
        validate_path, ConfigError, Path, Problem, SearchConfig, SearchError, Verbosity,
    },
};
use std::{convert::Infallible, path::PathBuf, process::ExitCode};
use thiserror::Error;
use tracing::{error, info, warn};

const SEED_MAZE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/demos/seed_maze.txt"
));

#[derive(Parser)]
#[command(version)]
/// Find a path through a maze, a road map or a sliding tile puzzle.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::AStar
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        help = "A TOML search config, its engine takes precedence over --engine",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        help = "The limit of depth-limited search, or the deepest iteration of \
        iterative deepening search",
        short = 'd',
        long = "depth-limit",
        id = "DEPTH_LIMIT"
    )]
    depth_limit: Option<usize>,
    #[arg(
        help = "Stop after expanding this many nodes",
        long = "node-budget",
        id = "NODE_BUDGET"
    )]
    node_budget: Option<u64>,
    #[arg(
        help = "Stop after this much time, e.g. \"30s\" or \"1m 30s\"",
        long = "time-limit",
        id = "TIME_LIMIT"
    )]
    time_limit: Option<String>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a path through a grid maze. The maze is drawn one row per line
    /// with `#` for walls, `.` for free cells, `S` for the start and `G` for
    /// the goal.
    Maze {
        #[arg(help = "The maze file, the built-in 4x4 maze if omitted")]
        file: Option<PathBuf>,
        #[arg(
            value_enum,
            long = "connectivity",
            id = "CONNECTIVITY",
            default_value_t = Connectivity::Four
        )]
        connectivity: Connectivity,
        #[arg(
            help = "The cost of a diagonal step on an 8-connected maze",
            long = "diagonal-cost",
            id = "DIAGONAL_COST",
            default_value_t = std::f64::consts::SQRT_2
        )]
        diagonal_cost: f64,
        #[arg(
            value_enum,
            help = "The heuristic used by informed engines",
            long = "heuristic",
            id = "HEURISTIC",
            default_value_t = GridHeuristicName::Manhattan
        )]
        heuristic_name: GridHeuristicName,
    },
    /// Find the route between two cities of a road map given as TOML.
    Graph {
        #[arg(help = "The road map file")]
        file: PathBuf,
    },
    /// Solve a sliding tile puzzle.
    Puzzle {
        #[arg(
            help = "The tiles in row-major order, 0 being the blank",
            required = true,
            num_args = 4..
        )]
        tiles: Vec<u8>,
        #[arg(
            value_enum,
            help = "The heuristic used by informed engines",
            long = "heuristic",
            id = "HEURISTIC",
            default_value_t = PuzzleHeuristicName::Manhattan
        )]
        heuristic_name: PuzzleHeuristicName,
    },
}

#[derive(Debug, Error)]
enum SolverError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read maze {path}: {source}")]
    MazeFile {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Maze(#[from] MazeParseError),
    #[error(transparent)]
    RouteMap(#[from] RouteMapError),
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
    #[error("{0} tiles do not form a square board")]
    NotSquare(usize),
    #[error(transparent)]
    Search(#[from] SearchError<Infallible>),
    #[error("the returned path is invalid: {0}")]
    InvalidPath(String),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn search_config(cli: &Cli) -> Result<SearchConfig, SolverError> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::from_path(path)?,
        None => SearchConfig::new(cli.search_engine_name),
    };
    if cli.depth_limit.is_some() {
        config.depth_limit = cli.depth_limit;
        config.max_depth = cli.depth_limit;
    }
    if cli.node_budget.is_some() {
        config.node_budget = cli.node_budget;
    }
    if cli.time_limit.is_some() {
        config.time_limit.clone_from(&cli.time_limit);
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<(), SolverError> {
    let config = search_config(&cli)?;

    match cli.command {
        Commands::Maze {
            file,
            connectivity,
            diagonal_cost,
            heuristic_name,
        } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(&path).map_err(|source| {
                    SolverError::MazeFile {
                        path: path.display().to_string(),
                        source,
                    }
                })?,
                None => SEED_MAZE_TEXT.to_string(),
            };
            let maze = GridMaze::from_text(&text)?
                .with_connectivity(connectivity)
                .with_diagonal_cost(diagonal_cost)
                .with_heuristic(heuristic_name);
            solve(&maze, &config, |path| maze.render(&path.states))
        }
        Commands::Graph { file } => {
            let map = RouteMap::from_path(&file)?;
            solve(&map, &config, |path| map.names_of(&path.states).join(" -> "))
        }
        Commands::Puzzle {
            tiles,
            heuristic_name,
        } => {
            let size = (2..=15)
                .find(|size| size * size == tiles.len())
                .ok_or(SolverError::NotSquare(tiles.len()))?;
            let puzzle = SlidingPuzzle::new(size, tiles)?.with_heuristic(heuristic_name);
            if !puzzle.is_solvable() {
                warn!("the puzzle is unsolvable, the search will exhaust the state space");
            }
            solve(&puzzle, &config, |path| {
                path.states
                    .iter()
                    .map(|board| puzzle.to_pretty_string(board))
                    .join("\n\n")
            })
        }
    }
}

fn solve<P>(
    problem: &P,
    config: &SearchConfig,
    describe: impl Fn(&Path<P::State, P::Action>) -> String,
) -> Result<(), SolverError>
where
    P: Problem<Error = Infallible>,
    P::Action: PartialEq,
{
    let mut engine = config.create_engine::<P>()?;
    let mut termination = config.termination_condition()?;
    info!(engine = %config.engine, "starting search");
    let (result, statistics) = engine.search(problem, &mut termination)?;
    termination.finalise();

    match result {
        SearchResult::Success(path) => {
            info!("validating path");
            validate_path(problem, &path).map_err(SolverError::InvalidPath)?;
            info!("path is valid");
            info!(
                path_length = path.len(),
                path_cost = path.cost.into_inner(),
                expanded_nodes = statistics.expanded_nodes()
            );

            println!("Path found:");
            println!("{}", describe(&path));
            println!("Actions: {}", path.actions.iter().map(|a| format!("{:?}", a)).join(", "));
            println!("Path length: {}", path.len());
            println!("Path cost: {}", path.cost);
        }
        result => {
            info!("no path found");
            println!("No path found: {:?}", result);
        }
    }
    Ok(())
}
