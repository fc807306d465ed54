//! # s16calc
//!
//! Console harness for the s16math fixed-point library. Evaluates one
//! operation on raw stored operands, or runs an interactive `args> ` loop in
//! the style of a serial terminal.
//!
//! ```text
//! $ s16calc mul 1200 300
//! 12.00*3.00=36.00
//! $ s16calc --time mul 20000 20000
//! 200.00*200.00=23.04,t=0.000000041 sec
//! overflow
//! ```
//!
//! The scale policy is fixed at build time; build with
//! `--features binary-point` for the power-of-two denominators.

mod commands;
mod serial;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::eval::Op;
use s16math::ActiveScale;

/// Fixed-point calculator for testing s16math
#[derive(Parser)]
#[command(name = "s16calc")]
#[command(about = "Evaluate s16math operations on raw 16-bit operands")]
#[command(version)]
#[command(subcommand_negates_reqs = true)]
#[command(allow_negative_numbers = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Append the time taken by the library call
    #[arg(short, long, global = true)]
    time: bool,

    /// Operation to evaluate
    #[arg(value_enum, required = true)]
    op: Option<Op>,

    /// First operand, as a raw stored value
    #[arg(required = true)]
    a: Option<i16>,

    /// Second operand, for operations that take two
    b: Option<i16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read operand pairs line by line from the console
    Repl {
        /// Operation applied to every line
        #[arg(value_enum, default_value = "mul")]
        op: Op,
    },

    /// Show the scale policy this binary was built with
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Repl { op }) => commands::repl::execute::<ActiveScale>(op, cli.time),
        Some(Commands::Info) => commands::info::execute::<ActiveScale>(),
        None => {
            let op = cli.op.context("missing operation")?;
            let a = cli.a.context("missing operand")?;
            commands::eval::execute::<ActiveScale>(op, a, cli.b, cli.time)
        }
    }
}
