use std::error::Error;

use clap::{Parser, Subcommand};

mod commands;
mod verilator;

use commands::compile::CompileArgs;
use commands::names::{DotArgs, NamesArgs};
use commands::paths::{FanArgs, PathArgs};

#[derive(Parser, Debug)]
#[command(name = "np", about = "Query paths in a flattened netlist")]
struct Cli {
    /// Increase logging verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the external elaborator and produce an XML netlist dump.
    Compile(CompileArgs),
    /// List the named vertices of a lowered netlist.
    Names(NamesArgs),
    /// Report paths between named points.
    Path(PathArgs),
    /// Report all paths fanning out of a start point.
    Fanout(FanArgs),
    /// Report all paths fanning into an end point.
    Fanin(FanArgs),
    /// Dump the lowered graph in GraphViz format.
    Dot(DotArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    match cli.command {
        Command::Compile(args) => commands::compile::run(&args),
        Command::Names(args) => commands::names::run(&args),
        Command::Path(args) => commands::paths::run_path(&args),
        Command::Fanout(args) => commands::paths::run_fanout(&args),
        Command::Fanin(args) => commands::paths::run_fanin(&args),
        Command::Dot(args) => commands::names::run_dot(&args),
    }
}
