//! Renders a test tone sequence to a WAV file.
//!
//! Two seconds each of sine, square, sawtooth and triangle from one
//! oscillator, each followed by 200 ms of silence. The waveform changes
//! between blocks without resetting the phase.
//!
//! Usage: `cargo run --example wavgen -- [OUTPUT] [FREQUENCY] [--dither]`
//!
//! Defaults to `out.wav` at 440 Hz with rounding quantization. Set
//! `RUST_LOG=debug` to see the library's own logging.

use anyhow::{Context, Result};
use psynth::{Dither, Oscillator, Quantizer, WavWriter, Waveform};

const SAMPLE_RATE: u32 = 44100;
const BLOCK_SECONDS: usize = 2;
const GAP_SAMPLES: usize = SAMPLE_RATE as usize / 5;

struct Args {
    output: String,
    frequency: f64,
    dither: bool,
}

fn parse_args() -> Result<Args> {
    let mut output = None;
    let mut frequency = None;
    let mut dither = false;
    for arg in std::env::args().skip(1) {
        if arg == "--dither" {
            dither = true;
        } else if output.is_none() {
            output = Some(arg);
        } else if frequency.is_none() {
            let hz = arg
                .parse::<f64>()
                .with_context(|| format!("invalid frequency '{}'", arg))?;
            frequency = Some(hz);
        } else {
            anyhow::bail!("unexpected argument '{}'", arg);
        }
    }
    Ok(Args {
        output: output.unwrap_or_else(|| "out.wav".to_string()),
        frequency: frequency.unwrap_or(440.0),
        dither,
    })
}

fn render<Q: Quantizer>(
    osc: &mut Oscillator<SAMPLE_RATE, Q>,
    writer: &mut WavWriter<std::fs::File>,
) -> Result<()> {
    let mut block = vec![0i16; SAMPLE_RATE as usize * BLOCK_SECONDS];
    for &waveform in &Waveform::ALL {
        osc.fill_waveform(waveform, &mut block);
        writer
            .append_samples(&block)
            .with_context(|| format!("writing {} block", waveform.name()))?;
        writer.append_silence(GAP_SAMPLES)?;
        log::info!(
            "{}: {} samples, phase now {:.4} rad",
            waveform.name(),
            block.len(),
            osc.phase()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = parse_args()?;

    let osc = Oscillator::<SAMPLE_RATE>::new(Waveform::Sine, args.frequency)
        .context("configuring oscillator")?;
    let mut writer = WavWriter::create(&args.output, SAMPLE_RATE)
        .with_context(|| format!("creating {}", args.output))?;

    if args.dither {
        let mut osc = osc.with_quantizer(Dither::new());
        render(&mut osc, &mut writer)?;
    } else {
        let mut osc = osc;
        render(&mut osc, &mut writer)?;
    }

    let samples = writer.samples_written();
    writer.finalize().context("finalizing wav header")?;
    log::info!(
        "wrote {} samples ({:.1} s) to {}",
        samples,
        samples as f64 / SAMPLE_RATE as f64,
        args.output
    );
    Ok(())
}
