use edge_filter::config::{load_options, FilterOptions};
use edge_filter::image::write_json_file;
use edge_filter::{run_batch, ElapsedTotal};
use std::env;
use std::path::{Path, PathBuf};

const USAGE: &str = "Usage: edge-filter filename[s]";

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let inputs: Vec<PathBuf> = env::args().skip(1).map(PathBuf::from).collect();
    if inputs.is_empty() {
        return Err(format!("Not enough arguments.\n{USAGE}"));
    }

    let options = match env::var("EDGE_FILTER_CONFIG") {
        Ok(path) => load_options(Path::new(&path))?,
        Err(_) => FilterOptions::default(),
    };

    let total = ElapsedTotal::new();
    let report = run_batch(&inputs, &options, &total)?;

    if let Ok(path) = env::var("EDGE_FILTER_REPORT") {
        write_json_file(Path::new(&path), &report)?;
    }

    println!("Elapsed time: {:.4} s", report.total_seconds());
    Ok(())
}
