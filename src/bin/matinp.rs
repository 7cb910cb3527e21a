use matinp::prelude::*;
use std::path::PathBuf;
use structopt::StructOpt;
use tracing::{info, Level};

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "matinp",
    about = "Generates INP material records from a JSON file with material batches"
)]
struct Options {
    /// JSON file with the material batches
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Writes the INP text to this file instead of the standard output
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Prints the hardening table of the Hollomon batch at this index instead of the INP text
    #[structopt(long)]
    table: Option<usize>,

    /// Maximum strain of the sampled hardening curves
    #[structopt(long, default_value = "10.0")]
    eps_max: f64,

    /// Number of points of the sampled hardening curves
    #[structopt(long, default_value = "100")]
    npoint: usize,

    /// Shows debug messages
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // logging
    let level = if options.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // load data
    let input = MaterialInput::read_json(&options.input)?;
    info!(nbatch = input.materials.len(), "read material input file");

    // hardening table
    if let Some(index) = options.table {
        let param = input.materials.get(index).ok_or("material index is out of bounds")?;
        let model = match param {
            ParamMaterial::Hollomon(p) => Hollomon::new(p)?,
            _ => return Err("table is only available for Hollomon"),
        };
        let mut tables = Vec::with_capacity(model.sample_count());
        for position in 0..model.sample_count() {
            tables.push(model.get_table(position, options.eps_max, options.npoint)?);
        }
        let json = serde_json::to_string_pretty(&tables).map_err(|_| "cannot serialize table")?;
        println!("{}", json);
        return Ok(());
    }

    // INP text
    let library = MaterialLibrary::from_input(&input)?;
    match &options.output {
        Some(path) => {
            library.write_inp_sampled(path, options.eps_max, options.npoint)?;
            let thin_line = format!("{:─^1$}", "", path.display().to_string().len());
            println!("\n{}", thin_line);
            println!("{} materials written to:", library.sample_count());
            println!("{}", path.display());
            println!("{}\n", thin_line);
        }
        None => println!("{}", library.dump2inp_sampled(options.eps_max, options.npoint)?),
    }
    Ok(())
}
