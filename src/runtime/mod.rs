use std::env;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{self, Cli, Prompter};
use crate::cover::CoverSource;
use crate::library::collect_candidates;
use crate::pipeline::{self, RunRequest};
use crate::transcode::{FfmpegTranscoder, Transcoder};

mod settings;
mod startup;

pub use startup::init_logging;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = settings::load_settings();
    if let Some(template) = &cli.template {
        settings.cover.template_path = template.clone();
    }

    if cli.print_config {
        print!("{}", settings.to_toml().context("failed to render settings")?);
        return Ok(());
    }

    let cwd = env::current_dir().context("cannot determine the current directory")?;
    let inputs = cli::resolve_inputs(&cli, &mut Prompter::stdin(), &cwd)?;

    let request = RunRequest {
        candidates: collect_candidates(
            &inputs.paths,
            inputs.mode,
            &settings.library,
            &inputs.output.join(&settings.output.game_dir),
        ),
        album: inputs.album,
        output_root: inputs.output,
        cover: CoverSource::from_arg(&inputs.image),
    };

    let transcoder = FfmpegTranscoder::new(settings.transcode.clone());
    tracing::debug!("transcoding with {}", transcoder.name());

    pipeline::run(&request, &settings, &transcoder)
        .with_context(|| format!("failed to build station {:?}", request.album))?;
    Ok(())
}
