use clap::Parser;

use galaxy_generator::{ascii, bulk_tiles, generate_system, GALAXY_SIZE};

#[derive(Parser, Debug)]
#[command(name = "galaxy_generator")]
#[command(about = "Deterministic galaxy map preview and system inspector")]
struct Args {
    /// Galaxy seed string
    #[arg(short, long)]
    seed: String,

    /// Region corners for the map preview (default: the whole galaxy)
    #[arg(long, num_args = 4, value_names = ["X1", "Y1", "X2", "Y2"])]
    region: Option<Vec<i64>>,

    /// Generate the system at these display coordinates and print JSON
    #[arg(long, num_args = 2, value_names = ["X", "Y"])]
    system: Option<Vec<i64>>,
}

fn main() {
    let args = Args::parse();

    if let Some(coords) = &args.system {
        let (x, y) = (coords[0], coords[1]);
        match generate_system(&args.seed, x, y) {
            Some(system) => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&system).expect("system serializes")
                );
            }
            None => println!("No system at ({x}, {y})"),
        }
        return;
    }

    let (corner1, corner2) = match &args.region {
        Some(r) => ((r[0], r[1]), (r[2], r[3])),
        None => ((0, 0), (GALAXY_SIZE - 1, GALAXY_SIZE - 1)),
    };

    println!("Rendering galaxy for seed: {}", args.seed);
    let tiles = bulk_tiles(&args.seed, corner1, corner2);
    let systems = tiles.values().filter(|t| t.has_system).count();
    let hubs = tiles.values().filter(|t| t.has_trade_hub).count();
    let nebula = tiles.values().filter(|t| t.in_nebula).count();

    print!("{}", ascii::render_tiles(&tiles, corner1, corner2));
    println!(
        "{} tiles: {} systems ({} trade hubs), {} in nebulae",
        tiles.len(),
        systems,
        hubs,
        nebula
    );
}
