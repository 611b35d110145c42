use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inspforge")]
#[command(author, version, about = "Convert stereoscopic JPGs to INSP format")]
pub struct Cli {
    /// Input JPG file or directory containing JPG files
    pub input: PathBuf,

    /// Directory to save converted INSP files
    pub output_dir: PathBuf,

    /// Path to reference INSP file
    pub template_insp: PathBuf,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
