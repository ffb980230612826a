use std::path::{Path, PathBuf};
use std::process::Command;

use log::info;
use np_core::errors::{ErrorInfo, NetlistError};

fn elaborate_error(code: &str, detail: impl Into<String>) -> NetlistError {
    NetlistError::Elaborate(ErrorInfo::new(code, detail))
}

/// Runner for the external elaborator producing the flattened XML dump.
#[derive(Debug)]
pub struct Verilator {
    exe: PathBuf,
}

impl Verilator {
    /// Locates the elaborator in `bin_dir`, or relies on `PATH` when no
    /// directory is given.
    pub fn new(bin_dir: Option<&Path>) -> Self {
        let exe = match bin_dir {
            Some(dir) => dir.join("verilator"),
            None => PathBuf::from("verilator"),
        };
        Self { exe }
    }

    /// Elaborates the sources into a flattened XML netlist at `output`.
    pub fn run(
        &self,
        includes: &[String],
        defines: &[String],
        sources: &[PathBuf],
        output: &Path,
    ) -> Result<(), NetlistError> {
        let mut args: Vec<String> = vec![
            "+1800-2012ext+.sv".into(),
            "--bbox-sys".into(),
            "--bbox-unsup".into(),
            "--xml-only".into(),
            "--xml-flat".into(),
            "--error-limit".into(),
            "10000".into(),
            "--xml-output".into(),
            output.display().to_string(),
        ];
        for include in includes {
            args.push(format!("+incdir+{include}"));
        }
        for define in defines {
            args.push(format!("-D{define}"));
        }
        for source in sources {
            args.push(source.display().to_string());
        }
        info!("running {} {}", self.exe.display(), args.join(" "));
        let status = Command::new(&self.exe).args(&args).status().map_err(|err| {
            elaborate_error(
                "elaborator-spawn",
                format!("failed to spawn {}: {err}", self.exe.display()),
            )
        })?;
        if !status.success() {
            return Err(elaborate_error(
                "elaborator-exit",
                format!("elaborator exited with {status}"),
            ));
        }
        Ok(())
    }
}
