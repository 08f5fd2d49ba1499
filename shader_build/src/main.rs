use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use shader_build::{logging, BuildDriver, BuildError};

mod cli;

use cli::ShaderBuildArgs;

fn main() -> ExitCode {
    let args = ShaderBuildArgs::parse();
    if let Err(e) = logging::init(args.log_level.into()) {
        eprintln!("Could not initialize the logger: {}", e);
    }

    let driver = BuildDriver::from_config(args.build_config());
    let result = if args.dry_run {
        print_plan(&driver)
    } else {
        driver.run().map(|summary| {
            log::info!(
                "{} compiled, {} up to date, {} failed",
                summary.compiled.len(),
                summary.skipped.len(),
                summary.failed.len()
            );
        })
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", error_chain(&e));
            if let BuildError::CompileFailures(failures) = &e {
                for failure in failures {
                    log::error!("{}", error_chain(failure));
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn print_plan(driver: &BuildDriver<shader_build::GlslcCompiler>) -> Result<(), BuildError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for shader in driver.plan()? {
        writeln!(
            out,
            "{} {}",
            shader.decision.as_str(),
            shader.source.relative_path.display()
        )
        .map_err(BuildError::Progress)?;
    }
    Ok(())
}

fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
