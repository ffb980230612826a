use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use np_paths::{NetlistPaths, ReportOptions};

#[derive(Args, Debug)]
pub struct NamesArgs {
    /// XML netlist dump produced by `np compile`.
    pub netlist: PathBuf,
    /// Emit JSON instead of an aligned table.
    #[arg(long)]
    pub json: bool,
    /// Print full file paths in the location column.
    #[arg(long)]
    pub full_file_names: bool,
}

pub fn run(args: &NamesArgs) -> Result<(), Box<dyn Error>> {
    let paths = NetlistPaths::from_xml_file(&args.netlist)?;
    let options = ReportOptions {
        full_file_names: args.full_file_names,
        ..ReportOptions::default()
    };
    if args.json {
        let rows = paths.name_rows(options);
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", paths.render_names(options));
    }
    Ok(())
}

#[derive(Args, Debug)]
pub struct DotArgs {
    /// XML netlist dump produced by `np compile`.
    pub netlist: PathBuf,
}

pub fn run_dot(args: &DotArgs) -> Result<(), Box<dyn Error>> {
    let paths = NetlistPaths::from_xml_file(&args.netlist)?;
    print!("{}", paths.dump_dot());
    Ok(())
}
