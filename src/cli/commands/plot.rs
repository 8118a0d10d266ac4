//! Plot command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::PlotArgs;
use crate::io::load_record;
use crate::plot::band_chart;

pub fn run_plot(args: PlotArgs, level: LogLevel) -> Result<(), String> {
    for path in &args.paths {
        let record = load_record(path).map_err(|e| format!("Load error: {e}"))?;

        if record.is_empty() {
            log(
                level,
                LogLevel::Normal,
                &format!("{}: no checkpoints to plot", path.display()),
            );
            continue;
        }

        log(level, LogLevel::Normal, &format!("{}:", path.display()));
        log(level, LogLevel::Normal, &band_chart(&record, args.width, args.height));
    }

    Ok(())
}
