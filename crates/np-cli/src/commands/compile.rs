use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use np_paths::NetlistPaths;

use crate::verilator::Verilator;

#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Source files handed to the elaborator.
    #[arg(required = true)]
    pub sources: Vec<PathBuf>,
    /// Include directories.
    #[arg(short = 'I', long = "include")]
    pub includes: Vec<String>,
    /// Preprocessor defines.
    #[arg(short = 'D', long = "define")]
    pub defines: Vec<String>,
    /// Where to write the XML netlist dump.
    #[arg(short, long, default_value = "netlist.xml")]
    pub output: PathBuf,
    /// Directory holding the elaborator binary; defaults to PATH lookup.
    #[arg(long)]
    pub elaborator_dir: Option<PathBuf>,
}

pub fn run(args: &CompileArgs) -> Result<(), Box<dyn Error>> {
    let runner = Verilator::new(args.elaborator_dir.as_deref());
    runner.run(&args.includes, &args.defines, &args.sources, &args.output)?;

    // Ingest and canonicalise immediately: schema problems and graph
    // check warnings surface here, not at query time, and the reported
    // counts describe the merged graph queries will actually see.
    let paths = NetlistPaths::from_xml_file(&args.output)?;
    let netlist = paths.netlist();
    let live = netlist
        .vertices()
        .filter(|(_, vertex)| !vertex.deleted)
        .count();
    println!(
        "wrote {}: {} vertices, {} edges",
        args.output.display(),
        live,
        netlist.num_edges()
    );
    Ok(())
}
