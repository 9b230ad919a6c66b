//! Command-line arguments, with interactive prompts for anything left out.

mod prompt;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};

use crate::cover::METADATA_SENTINEL;
use crate::library::InputMode;

pub use prompt::Prompter;

/// Turn a folder of music into a Hearts of Iron IV radio station mod
#[derive(Debug, Parser)]
#[command(name = "hoi4-radio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// How to interpret --path
    #[arg(short, long, value_enum)]
    pub mode: Option<InputMode>,

    /// Audio file(s), or folder(s) in folder mode
    #[arg(short, long, num_args = 1..)]
    pub path: Vec<PathBuf>,

    /// Album name, used as station name and file prefix
    #[arg(short, long)]
    pub album: Option<String>,

    /// Cover image, or "metadata" to use art embedded in the tracks
    #[arg(short, long)]
    pub image: Option<String>,

    /// Output directory (default: current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overlay template for the station picker texture
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

/// Fully resolved run inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub mode: InputMode,
    pub paths: Vec<PathBuf>,
    pub album: String,
    pub image: String,
    pub output: PathBuf,
}

/// Fill in whatever the command line did not provide, asking when possible.
pub fn resolve_inputs(cli: &Cli, prompter: &mut Prompter, cwd: &Path) -> Result<Inputs> {
    let mode = match cli.mode {
        Some(m) => m,
        None => {
            let answer = prompter.ask("Choose mode (file/files/folder)", "folder")?;
            match InputMode::from_str(&answer, true) {
                Ok(m) => m,
                Err(_) => bail!("unknown mode {answer:?}, expected file, files or folder"),
            }
        }
    };

    let paths = if cli.path.is_empty() {
        let cwd_str = cwd.to_string_lossy();
        prompter
            .ask("Enter file or folder path", &cwd_str)?
            .split_whitespace()
            .map(PathBuf::from)
            .collect()
    } else {
        cli.path.clone()
    };
    let Some(first) = paths.first() else {
        bail!("no input path given");
    };
    if mode == InputMode::File && paths.len() > 1 {
        bail!("file mode takes exactly one path, got {}", paths.len());
    }

    let album = match &cli.album {
        Some(a) => a.clone(),
        None => {
            let default = default_album_name(first)
                .with_context(|| format!("cannot derive an album name from {}", first.display()))?;
            prompter.ask("Enter album name", &default)?
        }
    };

    let image = match &cli.image {
        Some(i) => i.clone(),
        None => prompter.ask("Enter image path", METADATA_SENTINEL)?,
    };

    let output = cli.output.clone().unwrap_or_else(|| cwd.to_path_buf());

    Ok(Inputs {
        mode,
        paths,
        album,
        image,
        output,
    })
}

/// Base name of the first input, resolving `.`-style paths first.
fn default_album_name(path: &Path) -> Option<String> {
    let name = match path.file_name() {
        Some(n) => n.to_os_string(),
        None => path.canonicalize().ok()?.file_name()?.to_os_string(),
    };
    name.into_string().ok()
}
