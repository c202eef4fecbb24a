//! File-based rendering command.

use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use warmdrive_core::ParameterInfo;
use warmdrive_effects::{StereoLink, WarmDrive};
use warmdrive_io::{DEFAULT_BLOCK_FRAMES, RenderOptions, read_wav_info, render_file};

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file (mono or stereo)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file (always stereo)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Parameter assignment, repeatable (e.g. "drive=60", "shape=-40")
    #[arg(short, long, value_parser = parse_key_val, number_of_values = 1)]
    param: Vec<(String, i32)>,

    /// Frames per processing block
    #[arg(long, default_value_t = DEFAULT_BLOCK_FRAMES, value_parser = parse_block_frames)]
    block_frames: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value_t = 32, value_parser = parse_bit_depth)]
    bit_depth: u16,

    /// Give each channel its own filter memory
    #[arg(long)]
    independent_channels: bool,
}

fn parse_key_val(s: &str) -> Result<(String, i32), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid parameter format: '{s}' (expected name=value)"))?;
    let value = value
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("Invalid value for '{key}': {e}"))?;
    Ok((key.trim().to_string(), value))
}

fn parse_block_frames(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("block size must be at least 1 frame".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_bit_depth(s: &str) -> Result<u16, String> {
    match s.parse::<u16>() {
        Ok(bits @ (16 | 24 | 32)) => Ok(bits),
        Ok(bits) => Err(format!("unsupported bit depth {bits} (expected 16, 24, or 32)")),
        Err(e) => Err(e.to_string()),
    }
}

/// Apply `name=value` assignments, rejecting unknown names and values
/// outside the declared domain.
pub fn apply_params(engine: &mut WarmDrive, assignments: &[(String, i32)]) -> anyhow::Result<()> {
    for (name, value) in assignments {
        let index = engine
            .find_param_by_name(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown parameter: {name}"))?;
        let desc = engine
            .param_info(index)
            .ok_or_else(|| anyhow::anyhow!("Unknown parameter: {name}"))?;
        if !desc.contains(*value) {
            anyhow::bail!(
                "{} out of range: {} (expected {}..={})",
                desc.name,
                value,
                desc.min,
                desc.max
            );
        }
        engine.set_param(index, *value);
        tracing::debug!(param = desc.name, value, "applied");
    }
    Ok(())
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let info = read_wav_info(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    println!("Reading {}...", args.input.display());
    println!(
        "  {} frames, {} ch, {} Hz, {:.2}s",
        info.num_frames, info.channels, info.sample_rate, info.duration_secs
    );

    let link = if args.independent_channels {
        StereoLink::Independent
    } else {
        StereoLink::Shared
    };
    let mut engine = WarmDrive::with_link(link);
    apply_params(&mut engine, &args.param)?;

    let settings: Vec<String> = (0..engine.param_count())
        .filter_map(|i| {
            let desc = engine.param_info(i)?;
            Some(format!("{}={}", desc.short_name, engine.get_param(i)))
        })
        .collect();
    println!("Processing ({})...", settings.join(", "));

    let pb = ProgressBar::new(info.num_frames);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let options = RenderOptions {
        block_frames: args.block_frames,
        bit_depth: args.bit_depth,
    };
    let report = render_file(&mut engine, &args.input, &args.output, &options, |frames| {
        pb.inc(frames as u64);
    })
    .with_context(|| {
        format!(
            "rendering {} to {}",
            args.input.display(),
            args.output.display()
        )
    })?;

    pb.finish_with_message("done");

    println!();
    println!(
        "Wrote {} ({} frames, {}-bit, peak {:.1} dB)",
        args.output.display(),
        report.frames,
        args.bit_depth,
        linear_to_db(report.peak)
    );

    Ok(())
}

fn linear_to_db(linear: f32) -> f32 {
    20.0 * linear.max(1e-10).log10()
}
