use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use np_paths::{NetlistPaths, ReportOptions};

#[derive(Args, Debug)]
pub struct PathArgs {
    /// XML netlist dump produced by `np compile`.
    pub netlist: PathBuf,
    /// Start point of the path.
    #[arg(long)]
    pub from: String,
    /// End point of the path.
    #[arg(long)]
    pub to: String,
    /// Intermediate points the path must visit, in order.
    #[arg(long = "through")]
    pub through: Vec<String>,
    /// Enumerate every simple path instead of reporting one.
    #[arg(long)]
    pub all: bool,
    /// Include logic vertices in the report.
    #[arg(long)]
    pub report_logic: bool,
    /// Print full file paths in the location column.
    #[arg(long)]
    pub full_file_names: bool,
}

fn report_options(report_logic: bool, full_file_names: bool) -> ReportOptions {
    ReportOptions {
        report_logic,
        full_file_names,
    }
}

pub fn run_path(args: &PathArgs) -> Result<(), Box<dyn Error>> {
    let mut paths = NetlistPaths::from_xml_file(&args.netlist)?;
    paths.add_startpoint(&args.from)?;
    paths.add_finishpoint(&args.to)?;
    for through in &args.through {
        paths.add_throughpoint(through)?;
    }
    let options = report_options(args.report_logic, args.full_file_names);
    if args.all {
        let found = paths.get_all_paths_through_waypoints()?;
        print!("{}", paths.render_paths(&found, options));
    } else {
        let path = paths.get_any_path_through_waypoints()?;
        print!("{}", paths.render_paths(&[path], options));
    }
    Ok(())
}

#[derive(Args, Debug)]
pub struct FanArgs {
    /// XML netlist dump produced by `np compile`.
    pub netlist: PathBuf,
    /// Anchor point of the query.
    pub name: String,
    /// Print only the number of paths.
    #[arg(long)]
    pub degree: bool,
    /// Include logic vertices in the report.
    #[arg(long)]
    pub report_logic: bool,
    /// Print full file paths in the location column.
    #[arg(long)]
    pub full_file_names: bool,
}

pub fn run_fanout(args: &FanArgs) -> Result<(), Box<dyn Error>> {
    let paths = NetlistPaths::from_xml_file(&args.netlist)?;
    if args.degree {
        println!("{}", paths.fanout_degree(&args.name)?);
        return Ok(());
    }
    let found = paths.get_all_fanout(&args.name)?;
    let options = report_options(args.report_logic, args.full_file_names);
    print!("{}", paths.render_paths(&found, options));
    Ok(())
}

pub fn run_fanin(args: &FanArgs) -> Result<(), Box<dyn Error>> {
    let paths = NetlistPaths::from_xml_file(&args.netlist)?;
    if args.degree {
        println!("{}", paths.fanin_degree(&args.name)?);
        return Ok(());
    }
    let found = paths.get_all_fanin(&args.name)?;
    let options = report_options(args.report_logic, args.full_file_names);
    print!("{}", paths.render_paths(&found, options));
    Ok(())
}
