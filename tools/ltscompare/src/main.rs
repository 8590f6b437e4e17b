use std::fmt::Display;
use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use log::info;

use ltscmp_bisim::strong_bisim;
use ltscmp_bisim::Bisimulation;
use ltscmp_io::io_aut::read_aut;
use ltscmp_io::io_dot::write_dot;
use ltscmp_lts::uniquify;
use ltscmp_lts::LabelledTransitionSystem;
use ltscmp_lts::Side;

#[derive(Parser, Debug)]
#[command(
    name = "ltscompare",
    about = "Decides strong bisimilarity between two labelled transition systems"
)]
struct Cli {
    /// The left .aut file
    #[arg(value_name = "LEFT")]
    left: String,

    /// The right .aut file
    #[arg(value_name = "RIGHT")]
    right: String,

    /// Prefix for the GraphViz output, written to <PREFIX>-left.dot and
    /// <PREFIX>-right.dot when the systems are bisimilar
    #[arg(short, long, value_name = "PREFIX")]
    output: Option<String>,
}

fn read_side(name: &str, side: Side) -> Result<LabelledTransitionSystem<String>> {
    let file = File::open(name).with_context(|| format!("Failed to open {name}"))?;
    let lts = read_aut(file).with_context(|| format!("Failed to read {name}"))?;

    Ok(uniquify(lts, side))
}

fn write_dot_file<L: Display, P>(
    name: &str,
    lts: &LabelledTransitionSystem<L, P>,
    relation: &Bisimulation,
) -> Result<()> {
    if let Some(directory) = Path::new(name).parent() {
        fs::create_dir_all(directory)?;
    }

    let mut writer = BufWriter::new(File::create(name)?);
    write_dot(&mut writer, lts, relation).with_context(|| format!("Failed to write {name}"))
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();

    let left = read_side(&cli.left, Side::Left)?;
    let right = read_side(&cli.right, Side::Right)?;

    info!(
        "Left has {} states and {} transitions",
        left.num_of_states(),
        left.num_of_transitions()
    );
    info!(
        "Right has {} states and {} transitions",
        right.num_of_states(),
        right.num_of_transitions()
    );

    match strong_bisim(&left, &right) {
        Some(relation) => {
            println!("Bisimilar");

            if let Some(prefix) = cli.output {
                write_dot_file(&format!("{prefix}-left.dot"), &left, &relation)?;
                write_dot_file(&format!("{prefix}-right.dot"), &right, &relation)?;
            }

            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("Not bisimilar");
            Ok(ExitCode::FAILURE)
        }
    }
}
