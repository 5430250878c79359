// CLI entry point for headless Hexmere map work.
//
// Generates or loads a map, optionally runs a path query, and optionally
// saves the map back out. Useful for poking at saved maps and for
// scripting search experiments without any front end.
//
// Usage:
//   hexmere [OPTIONS]
//     --map <FILE>        Load a map from a JSON save file
//     --width <N>         Generate a flat map N columns wide (default: 16)
//     --height <N>        Generate a flat map N rows tall (default: 16)
//     --from <COL,ROW>    Path query start cell (offset coordinates)
//     --to <COL,ROW>      Path query target cell (offset coordinates)
//     --speed <N>         Movement points per turn (default: 24)
//     --save <FILE>       Write the map to a JSON save file

use hexmere_map::coords::HexCoord;
use hexmere_map::grid::HexGrid;
use hexmere_map::layout::HexLayout;
use hexmere_map::save;
use hexmere_search::pathfinding::HexPathfinder;

struct CliConfig {
    map: Option<String>,
    width: i32,
    height: i32,
    from: Option<(i32, i32)>,
    to: Option<(i32, i32)>,
    speed: i32,
    save: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            map: None,
            width: 16,
            height: 16,
            from: None,
            to: None,
            speed: 24,
            save: None,
        }
    }
}

fn main() {
    let config = parse_args();

    let grid = match &config.map {
        Some(path) => match save::load_from_file(path) {
            Ok(grid) => grid,
            Err(e) => {
                eprintln!("Failed to load map {path}: {e}");
                std::process::exit(1);
            }
        },
        None => HexGrid::new(config.width, config.height, HexLayout::default()),
    };

    println!(
        "Map: {}x{} ({} cells)",
        grid.cell_count_x(),
        grid.cell_count_z(),
        grid.len()
    );

    match (config.from, config.to) {
        (Some(from), Some(to)) => run_query(&grid, from, to, config.speed),
        (None, None) => {}
        _ => {
            eprintln!("--from and --to must be given together");
            std::process::exit(1);
        }
    }

    if let Some(path) = &config.save {
        if let Err(e) = save::save_to_file(&grid, path) {
            eprintln!("Failed to save map {path}: {e}");
            std::process::exit(1);
        }
        println!("Saved map to {path}");
    }
}

fn run_query(grid: &HexGrid, from: (i32, i32), to: (i32, i32), speed: i32) {
    let from_id = cell_at_offset(grid, from);
    let to_id = cell_at_offset(grid, to);

    let mut pathfinder = HexPathfinder::new();
    match pathfinder.find_path(grid, from_id, to_id, speed) {
        Some(path) => {
            println!(
                "Path found: {} steps, total cost {}",
                path.cells.len() - 1,
                path.total_cost
            );
            let steps: Vec<String> = path
                .cells
                .iter()
                .map(|&id| {
                    let (col, row) = grid.cell(id).coords.to_offset();
                    format!("({col},{row})")
                })
                .collect();
            println!("  {}", steps.join(" -> "));
        }
        None => println!("No path found."),
    }
}

fn cell_at_offset(grid: &HexGrid, (col, row): (i32, i32)) -> hexmere_map::cell::CellId {
    match grid.get_cell(HexCoord::from_offset(col, row)) {
        Some(id) => id,
        None => {
            eprintln!(
                "Cell ({col},{row}) is outside the {}x{} map",
                grid.cell_count_x(),
                grid.cell_count_z()
            );
            std::process::exit(1);
        }
    }
}

/// Parse command-line arguments into a `CliConfig`. Uses simple
/// `std::env::args()` matching — no clap dependency.
fn parse_args() -> CliConfig {
    let mut config = CliConfig::default();
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--map" => {
                i += 1;
                config.map = args.get(i).cloned().or_else(|| {
                    eprintln!("--map requires a file path");
                    std::process::exit(1);
                });
            }
            "--width" => {
                i += 1;
                config.width = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--width requires a positive number");
                    std::process::exit(1);
                });
            }
            "--height" => {
                i += 1;
                config.height = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--height requires a positive number");
                    std::process::exit(1);
                });
            }
            "--from" => {
                i += 1;
                config.from = Some(parse_offset(args.get(i), "--from"));
            }
            "--to" => {
                i += 1;
                config.to = Some(parse_offset(args.get(i), "--to"));
            }
            "--speed" => {
                i += 1;
                config.speed = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--speed requires a positive number");
                    std::process::exit(1);
                });
                if config.speed <= 0 {
                    eprintln!("--speed requires a positive number");
                    std::process::exit(1);
                }
            }
            "--save" => {
                i += 1;
                config.save = args.get(i).cloned().or_else(|| {
                    eprintln!("--save requires a file path");
                    std::process::exit(1);
                });
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config
}

/// Parse a "COL,ROW" pair.
fn parse_offset(arg: Option<&String>, flag: &str) -> (i32, i32) {
    let parsed = arg.and_then(|s| {
        let (col, row) = s.split_once(',')?;
        Some((col.trim().parse().ok()?, row.trim().parse().ok()?))
    });
    match parsed {
        Some(pair) => pair,
        None => {
            eprintln!("{flag} requires coordinates in COL,ROW form");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Usage: hexmere [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --map <FILE>        Load a map from a JSON save file");
    println!("  --width <N>         Generate a flat map N columns wide (default: 16)");
    println!("  --height <N>        Generate a flat map N rows tall (default: 16)");
    println!("  --from <COL,ROW>    Path query start cell (offset coordinates)");
    println!("  --to <COL,ROW>      Path query target cell (offset coordinates)");
    println!("  --speed <N>         Movement points per turn (default: 24)");
    println!("  --save <FILE>       Write the map to a JSON save file");
    println!("  --help, -h          Show this help");
}
