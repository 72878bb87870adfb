use devvit_ui_example::utils::logger;
use devvit_ui_example::{CliConfig, ExampleScript, Script, ScriptRunner};

fn main() {
    logger::init_cli_logger();

    let config = CliConfig::from_env();
    if config.ignored_args() > 0 {
        tracing::debug!("Ignoring {} command line arguments", config.ignored_args());
    }

    let runner = ScriptRunner::new(ExampleScript::new());
    tracing::info!("Starting example script for {}", runner.script().name());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match runner.run(&mut out) {
        Ok(summary) => {
            tracing::info!("Example script finished ({} lines)", summary.lines_written);
        }
        Err(e) => {
            tracing::debug!("Example script failed: {}", e);
            drop(out);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
