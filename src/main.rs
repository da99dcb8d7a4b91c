use anyhow::Result;
use std::io::{BufReader, Write};
use tilt_config::{AppConfig, SourceKind};
use tilt_core::{OrientationReport, ProcessOptions};
use tilt_sensor::{LineSource, OrientationSource, PermissionState, SensorClient, SweepSource};
use tracing::{debug, info, warn};

/// Running totals for the exit summary.
#[derive(Debug, Default)]
struct Tally {
    processed: u64,
    withheld: u64,
    indeterminate: u64,
    unfaithful: u64,
}

fn build_source(config: &AppConfig) -> Box<dyn OrientationSource> {
    match config.sensor.source {
        SourceKind::Stdin => {
            info!("Reading orientation samples from stdin");
            Box::new(LineSource::new(BufReader::new(std::io::stdin())))
        }
        SourceKind::Sweep => {
            let sweep = &config.sensor.sweep;
            info!(
                beta = sweep.beta,
                gamma = sweep.gamma,
                samples = sweep.samples,
                "Simulating device sweep"
            );
            let source = SweepSource::new(sweep.beta, sweep.gamma, sweep.step_deg, sweep.samples);
            if config.sensor.require_permission {
                Box::new(source.with_permission(PermissionState::Granted))
            } else {
                Box::new(source)
            }
        }
    }
}

/// Log the diagnostics of one processed sample and update the tally.
fn inspect(report: &OrientationReport, tally: &mut Tally) {
    tally.processed += 1;

    if report.is_indeterminate() {
        tally.indeterminate += 1;
        debug!(
            alpha = report.input.alpha,
            beta = report.input.beta,
            gamma = report.input.gamma,
            "Camera axis vertical, heading indeterminate"
        );
        return;
    }

    let render = report.matrix.to_quat();
    debug!(
        heading = report.angles.heading,
        elevation = report.angles.elevation,
        roll = report.angles.roll,
        ?render,
        "Orientation extracted"
    );

    if let Some(trip) = &report.round_trip {
        if trip.faithful {
            debug!(deviation = trip.max_deviation, "Round trip verified");
        } else {
            tally.unfaithful += 1;
            warn!(
                deviation = trip.max_deviation,
                alpha = report.input.alpha,
                beta = report.input.beta,
                gamma = report.input.gamma,
                "Reconstructed orientation diverges (device banked past vertical?)"
            );
        }
    }
}

async fn run(config: AppConfig) -> Result<()> {
    let options: ProcessOptions = config.process_options();
    let mut client = SensorClient::start(build_source(&config), config.sensor.pacing_hz())?;
    let mut tally = Tally::default();
    let mut stdout = std::io::stdout();

    while let Some(sample) = client.recv().await {
        let angles = match sample.complete() {
            Ok(angles) => angles,
            Err(e) => {
                tally.withheld += 1;
                debug!(%e, "Withholding incomplete sample");
                continue;
            }
        };

        let report = tilt_core::process(angles, &options);
        inspect(&report, &mut tally);
        if let Some(reading) = &report.reading {
            writeln!(stdout, "{reading}")?;
        }
    }

    let delivered = client.finish().await?;
    info!(
        delivered,
        processed = tally.processed,
        withheld = tally.withheld,
        indeterminate = tally.indeterminate,
        unfaithful = tally.unfaithful,
        "Done"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; readings own stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tilt_compass=info,tilt_sensor=info,tilt_core=info".into()),
        )
        .init();

    info!("Tilt compass starting");

    let config = tilt_config::load_config().unwrap_or_else(|e| {
        warn!(?e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    info!(
        source = ?config.sensor.source,
        heading_range = ?config.display.heading_range,
        verify = config.verify.enabled,
        "Config loaded"
    );

    run(config).await
}
