//! Info command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::InfoArgs;
use crate::io::load_record;

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let record = load_record(&args.path).map_err(|e| format!("Load error: {e}"))?;

    log(level, LogLevel::Normal, &format!("Record: {}", args.path.display()));
    log(level, LogLevel::Normal, &format!("  Checkpoints: {}", record.len()));
    log(level, LogLevel::Normal, &format!("  Interval: {}", record.interval));

    if !record.is_empty() {
        let axis = record.step_axis();
        log(
            level,
            LogLevel::Normal,
            &format!("  Steps: {} … {}", axis[0], axis[axis.len() - 1]),
        );

        let j = record.len() - 1;
        log(
            level,
            LogLevel::Normal,
            &format!(
                "  Final quantiles: low={:.6} median={:.6} high={:.6}",
                record.low[j], record.median[j], record.high[j]
            ),
        );
    }

    Ok(())
}
