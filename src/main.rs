use clap::Parser;
use log::info;
use nandsmith::search::synthesize;
use nandsmith::table::TruthTable;

/// Synthesize a minimal NAND-only circuit for a truth table.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Number of circuit inputs
    #[arg(short = 'n', long)]
    inputs: usize,

    /// Target truth table as a '0'/'1' string, one bit per row
    table: String,
}

fn main() {
    colog::init();

    let args = Args::parse();
    let target: TruthTable = match args.table.parse() {
        Ok(table) => table,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    info!("Searching over {} inputs", args.inputs);
    let catalog = synthesize(args.inputs);
    info!("Catalog holds {} functions", catalog.len());

    match catalog.netlist(&target) {
        Ok(netlist) => print!("{netlist}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
