use std::path::PathBuf;

use clap::Parser;
use env_logger::{Builder, Env};
use gate_detection::{
    gate_detection, step3_render, Error, FileSink, FileSource, ImageSink, ImageSource,
    RelaxationOrder, Settings,
};

const DEFAULT_INPUT: &str = "../input/img10.png";
const DEFAULT_OUTPUT: &str = "../output/test.png";

/// Detects a uniformly colored gate and writes it as a black-on-white mask
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Image to search for the gate
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where the black-white mask is written to, the format follows the extension
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// TOML file overriding dimensions, reference color and thresholds
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write the mask of the color filtering step alone
    #[arg(long)]
    step1_output: Option<PathBuf>,

    /// Count neighbors on the color filtering result only, independent of sweep order
    #[arg(long)]
    snapshot: bool,

    /// Enables debug logging
    #[arg(short = 'D', long)]
    debug: bool,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    let filter = if args.debug {
        "gate_detection=debug"
    } else {
        "gate_detection=info"
    };
    Builder::from_env(Env::default().default_filter_or(filter)).init();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if args.snapshot {
        settings.step2_order = RelaxationOrder::Snapshot;
    }
    log::debug!("{settings:?}");

    let source = FileSource::new(&args.input);
    let image = match source.load(&settings) {
        Ok(image) => image,
        Err(e) => {
            log::error!("Skipping detection: {e}");
            return Err(e);
        }
    };

    let detection = gate_detection(&image, &settings)?;
    log::info!(
        "Detected {} pixels ({} by color, {} by neighborhood)",
        detection.detected_count(),
        detection.step1_count(),
        detection.step2_admitted()
    );

    if let Some(path) = &args.step1_output {
        let luma = step3_render::mask_to_luma(detection.step1_mask());
        report(FileSink::new(path).store(&luma.into()), path);
    }
    let sink = FileSink::new(&args.output);
    report(sink.store_mask(detection.mask()), sink.path());
    Ok(())
}

/// Failing to write is reported but does not fail the run
fn report(result: Result<(), Error>, path: &std::path::Path) {
    match result {
        Ok(()) => log::info!("Image saved to '{}'", path.display()),
        Err(e) => log::error!("Failed to save the image: {e}"),
    }
}
