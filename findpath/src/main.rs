//! findpath — watch A* find a shortest path on a square grid.

use std::env;
use std::error::Error;
use std::fs;
use std::io;
use std::process;
use std::time::{Duration, Instant};

use crossterm::{cursor, execute};
use rand::SeedableRng;
use rand::rngs::StdRng;

use findpath::mapfmt::{self, MapSpec};
use findpath::mapgen;
use findpath::render;
use findpath::view::{StepRecorder, ViewGrid};
use waygrid_core::Point;
use waygrid_search::{SearchOutcome, SearchRange};

const USAGE: &str = "\
usage: findpath [options]
  --map FILE      load an ASCII map ('#' barrier, '.' floor, '@' start, 'x' goal)
  --side N        random map of side N (default 50)
  --density D     barrier probability for random maps (default 0.25)
  --seed S        seed for the random map
  --trace         replay the expansion frame by frame
  --fps N         replay speed (default 30)
  -h, --help      show this help";

struct Options {
    map: Option<String>,
    side: i32,
    density: f64,
    seed: Option<u64>,
    trace: bool,
    fps: u32,
}

fn parse_args() -> Result<Options, Box<dyn Error>> {
    let mut opts = Options {
        map: None,
        side: 50,
        density: 0.25,
        seed: None,
        trace: false,
        fps: 30,
    };
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--map" => opts.map = Some(args.next().ok_or("--map needs a file")?),
            "--side" => opts.side = args.next().ok_or("--side needs a number")?.parse()?,
            "--density" => {
                opts.density = args.next().ok_or("--density needs a number")?.parse()?;
            }
            "--seed" => opts.seed = Some(args.next().ok_or("--seed needs a number")?.parse()?),
            "--trace" => opts.trace = true,
            "--fps" => opts.fps = args.next().ok_or("--fps needs a number")?.parse()?,
            "-h" | "--help" => {
                println!("{USAGE}");
                process::exit(0);
            }
            other => return Err(format!("unknown argument {other:?}\n{USAGE}").into()),
        }
    }
    Ok(opts)
}

fn load_map(opts: &Options) -> Result<MapSpec, Box<dyn Error>> {
    if let Some(path) = &opts.map {
        let text = fs::read_to_string(path)?;
        return Ok(mapfmt::parse_map(&text)?);
    }
    let mut rng = match opts.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let start = Point::ZERO;
    let goal = Point::new(opts.side - 1, opts.side - 1);
    let grid = mapgen::random_barriers(&mut rng, opts.side, opts.density, &[start, goal]);
    Ok(MapSpec { grid, start, goal })
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let opts = parse_args()?;
    let spec = load_map(&opts)?;
    log::info!(
        "grid {side}x{side}, {barriers} barriers, start {start}, goal {goal}",
        side = spec.grid.side(),
        barriers = spec.grid.barrier_count(),
        start = spec.start,
        goal = spec.goal,
    );

    let mut range = SearchRange::new(spec.grid.side());
    let mut recorder = StepRecorder::default();
    let started = Instant::now();
    let outcome = range.astar_path_observed(&spec.grid, spec.start, spec.goal, &mut recorder);
    log::info!(
        "search expanded {} cells in {:?}",
        recorder.steps.len(),
        started.elapsed()
    );

    let mut view = ViewGrid::new(&spec.grid, spec.start, spec.goal);
    let mut out = io::stdout();
    if opts.trace {
        let frame = Duration::from_secs_f64(1.0 / opts.fps.max(1) as f64);
        render::replay(&mut out, &mut view, &recorder.steps, frame)?;
    } else {
        for step in &recorder.steps {
            view.apply(step);
        }
    }

    if let SearchOutcome::Path(path) = &outcome {
        view.overlay_path(path);
    }
    if opts.trace {
        execute!(out, cursor::MoveTo(0, 0))?;
    }
    render::draw(&mut out, &view)?;

    match outcome {
        SearchOutcome::Path(path) => println!("path length: {} steps", path.len() - 1),
        SearchOutcome::Unreachable => println!("no path"),
        SearchOutcome::Aborted => println!("search aborted"),
    }
    Ok(())
}
