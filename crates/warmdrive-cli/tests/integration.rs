//! Integration tests for warmdrive-cli.
//!
//! Tests cover the CLI binary invocation and end-to-end file rendering.

use std::path::Path;
use std::process::Command;
use warmdrive_effects::WarmDrive;
use warmdrive_effects::params::{BASS_BOOST, DRIVE};
use warmdrive_io::{WavSpec, read_wav_stereo, render_buffer, write_wav_stereo};

/// Helper to get the path to the `warmdrive` binary built by cargo.
fn warmdrive_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_warmdrive"))
}

fn write_test_input(path: &Path, frames: usize) -> Vec<f32> {
    let samples: Vec<f32> = (0..frames)
        .flat_map(|i| {
            let s = (i as f32 * 0.03).sin() * 0.6;
            [s, 0.5 * s]
        })
        .collect();
    write_wav_stereo(path, &samples, WavSpec::default()).expect("write test input");
    samples
}

// ---------------------------------------------------------------------------
// `warmdrive params`
// ---------------------------------------------------------------------------

#[test]
fn cli_params_lists_all_parameters() {
    let output = warmdrive_bin()
        .arg("params")
        .output()
        .expect("failed to run warmdrive params");

    assert!(output.status.success(), "warmdrive params failed");
    let stdout = String::from_utf8_lossy(&output.stdout);

    for name in ["Clipping", "Drive", "Compress", "Shape", "Bass", "High Boost"] {
        assert!(stdout.contains(name), "listing should contain '{name}'");
    }
    assert!(stdout.contains("-100..100"));
    assert!(stdout.contains("20%"));
}

#[test]
fn cli_params_detail() {
    let output = warmdrive_bin()
        .args(["params", "highbst"])
        .output()
        .expect("failed to run warmdrive params highbst");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("High Boost"));
    assert!(stdout.contains("wd_high_boost"));
}

#[test]
fn cli_params_unknown_fails() {
    let output = warmdrive_bin()
        .args(["params", "fuzz"])
        .output()
        .expect("failed to run warmdrive params fuzz");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown parameter"));
}

// ---------------------------------------------------------------------------
// `warmdrive process`
// ---------------------------------------------------------------------------

#[test]
fn cli_process_renders_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let in_path = dir.path().join("in.wav");
    let out_path = dir.path().join("out.wav");
    let input = write_test_input(&in_path, 4000);

    let output = warmdrive_bin()
        .arg("process")
        .arg(&in_path)
        .arg(&out_path)
        .args(["--param", "drive=60", "--param", "bass=30", "--block-frames", "100"])
        .output()
        .expect("failed to run warmdrive process");

    assert!(
        output.status.success(),
        "process failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let (rendered, spec) = read_wav_stereo(&out_path).expect("read output");
    assert_eq!(spec.channels, 2);
    assert_eq!(rendered.len(), input.len());

    let mut reference = WarmDrive::new();
    reference.set_parameter(DRIVE, 60);
    reference.set_parameter(BASS_BOOST, 30);
    let expected = render_buffer(&mut reference, &input, 100, |_| {});
    assert_eq!(rendered, expected);
}

#[test]
fn cli_process_pcm_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let in_path = dir.path().join("in.wav");
    let out_path = dir.path().join("out.wav");
    write_test_input(&in_path, 1000);

    let status = warmdrive_bin()
        .arg("process")
        .arg(&in_path)
        .arg(&out_path)
        .args(["--bit-depth", "16", "--independent-channels"])
        .status()
        .expect("failed to run warmdrive process");
    assert!(status.success());

    let (_, spec) = read_wav_stereo(&out_path).expect("read output");
    assert_eq!(spec.bits_per_sample, 16);
}

#[test]
fn cli_process_rejects_out_of_range_param() {
    let dir = tempfile::tempdir().expect("tempdir");
    let in_path = dir.path().join("in.wav");
    let out_path = dir.path().join("out.wav");
    write_test_input(&in_path, 100);

    let output = warmdrive_bin()
        .arg("process")
        .arg(&in_path)
        .arg(&out_path)
        .args(["--param", "shape=150"])
        .output()
        .expect("failed to run warmdrive process");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("out of range"));
    assert!(!out_path.exists());
}

#[test]
fn cli_process_missing_input_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = warmdrive_bin()
        .arg("process")
        .arg(dir.path().join("nope.wav"))
        .arg(dir.path().join("out.wav"))
        .output()
        .expect("failed to run warmdrive process");

    assert!(!output.status.success());
}

#[test]
fn cli_rejects_bad_bit_depth() {
    let output = warmdrive_bin()
        .args(["process", "a.wav", "b.wav", "--bit-depth", "8"])
        .output()
        .expect("failed to run warmdrive process");

    assert!(!output.status.success());
}
