use std::process::Command;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use event_logger::{
    DurationUnit, EventRecorder, LineSink, Microseconds, Milliseconds, Nanoseconds, Resolution,
    Seconds, SystemClock, TableConfig, TracingSink,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "event-logger", about = "Time a sequence of steps and log a checkpoint table")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run shell commands in order, recording a checkpoint after each one.
    Run {
        /// Resolution of the table (ns, us, ms or s).
        #[arg(short, long, default_value = "ms")]
        unit: Resolution,
        /// Name of the initial checkpoint.
        #[arg(short, long, default_value = "Start")]
        label: String,
        /// Name of the final checkpoint.
        #[arg(long, default_value = "Total")]
        total_label: String,
        /// Pad the cumulative column like the other two.
        #[arg(long)]
        pad_cumulative: bool,
        /// Shell used to run each command.
        #[arg(long, default_value = "sh")]
        shell: String,
        /// Commands to time, one checkpoint each.
        #[arg(required = true, trailing_var_arg = true)]
        commands: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            unit,
            label,
            total_label,
            pad_cumulative,
            shell,
            commands,
        } => {
            let config = TableConfig::default()
                .with_total_label(total_label)
                .with_pad_cumulative(pad_cumulative);
            let run = match unit {
                Resolution::Nanoseconds => run_steps::<Nanoseconds, TracingSink>,
                Resolution::Microseconds => run_steps::<Microseconds, TracingSink>,
                Resolution::Milliseconds => run_steps::<Milliseconds, TracingSink>,
                Resolution::Seconds => run_steps::<Seconds, TracingSink>,
            };
            run(label, config, &shell, &commands, TracingSink)?;
        }
    }

    Ok(())
}

/// The table is still logged when a command fails: the recorder emits on drop.
fn run_steps<U: DurationUnit, S: LineSink>(
    label: String,
    config: TableConfig,
    shell: &str,
    commands: &[String],
    sink: S,
) -> Result<()> {
    let mut recorder = EventRecorder::<U, _, _>::with_parts(label, SystemClock, sink, config);

    for command in commands {
        let status = Command::new(shell)
            .arg("-c")
            .arg(command)
            .status()
            .with_context(|| format!("failed to spawn `{}` with {}", command, shell))?;
        recorder.add_event(command.as_str());

        if !status.success() {
            bail!("command `{}` exited with {}", command, status);
        }
    }

    recorder.finish();
    Ok(())
}
