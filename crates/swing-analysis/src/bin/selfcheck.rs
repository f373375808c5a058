//! Environment selfcheck for the swing analysis pipeline.

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use swing_analysis::AnalysisConfig;
use swing_media::{check_ffmpeg, check_ffprobe};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::from_default_env()
        .add_directive("swing=info".parse()?);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(true)
                .with_target(true)
                .with_file(false)
                .with_line_number(false),
        )
        .with(env_filter)
        .init();

    let config = AnalysisConfig::from_env();
    info!(?config, "swing-selfcheck: starting");

    let ffmpeg = check_ffmpeg().map_err(|e| anyhow::anyhow!("ffmpeg not available: {}", e))?;
    let ffprobe = check_ffprobe().map_err(|e| anyhow::anyhow!("ffprobe not available: {}", e))?;
    info!(ffmpeg = %ffmpeg.display(), ffprobe = %ffprobe.display(), "toolchain found");

    if config.target_samples == 0 {
        return Err(anyhow::anyhow!("SWING_TARGET_SAMPLES must be at least 1"));
    }
    if config.frame_rate <= 0.0 {
        return Err(anyhow::anyhow!("SWING_FRAME_RATE must be positive"));
    }

    println!("swing-selfcheck: ok");
    Ok(())
}
