use clap::Parser;
use elimflow::{AugmentingPathMethod, Division, Elimination};
use itertools::Itertools;
use std::io::Write;
use std::path::PathBuf;
use std::process;

/// Decide which teams of a division are mathematically eliminated
#[derive(Parser, Debug)]
#[command(name = "elimflow", version)]
struct Args {
    /// Augmenting path search: `edmonds-karp` or `depth-first`
    #[arg(short, long, default_value_t = AugmentingPathMethod::default())]
    method: AugmentingPathMethod,

    /// Standings file
    path: PathBuf,
}

///
/// Write one verdict line per team, in roster order.
///
fn report<W: Write>(
    division: &Division,
    method: AugmentingPathMethod,
    out: &mut W,
) -> elimflow::Result<()> {
    let elimination = Elimination::with_method(division, method);
    for team in division.teams() {
        match elimination.certificate_of_elimination(team)? {
            Some(certificate) => writeln!(
                out,
                "{} is eliminated by the subset R = {{ {} }}",
                team,
                certificate.iter().join(" ")
            )?,
            None => writeln!(out, "{} is not eliminated", team)?,
        }
    }
    Ok(())
}

fn run(args: &Args) -> elimflow::Result<()> {
    let division = Division::from_file(&args.path)?;
    log::info!(
        "{} teams from {} ({})",
        division.number_of_teams(),
        args.path.display(),
        args.method
    );
    let stdout = std::io::stdout();
    report(&division, args.method, &mut stdout.lock())
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
