use std::process::ExitCode;
use std::time::Duration;

use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command};
use isolation_agent::agent::AIType;
use isolation_agent::orchestrator::{run_matches, MatchConfig};
use log::{error, info};

fn main() -> ExitCode {
    env_logger::init();

    let matches = create_command().get_matches();

    let (config, opponent) = match parse_args(&matches) {
        Ok(parsed) => parsed,
        Err(message) => {
            error!("{message}");
            return ExitCode::FAILURE;
        }
    };

    match run_matches(&config, AIType::AlphaBeta, opponent) {
        Ok(summary) => {
            info!("Finished {} games", summary.games.len());
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Match failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn create_command() -> Command {
    command!()
        .about("Play the iterative deepening alpha-beta agent against a baseline opponent")
        .arg(
            Arg::new("rounds")
                .short('r')
                .long("rounds")
                .value_parser(value_parser!(usize))
                .default_value("5")
                .help("number of rounds; each round is one game per seat"),
        )
        .arg(
            Arg::new("opponent")
                .short('o')
                .long("opponent")
                .default_value("minimax")
                .help("opponent to play against: random, greedy, minimax or self"),
        )
        .arg(
            Arg::new("fair matches")
                .short('f')
                .long("fair-matches")
                .action(ArgAction::SetTrue)
                .help("start both games of a round from the same random opening"),
        )
        .arg(
            Arg::new("time limit")
                .short('t')
                .long("time-limit")
                .value_parser(value_parser!(u64))
                .default_value("150")
                .help("time limit per turn in milliseconds"),
        )
        .arg(
            Arg::new("processes")
                .short('p')
                .long("processes")
                .value_parser(value_parser!(usize))
                .help("number of games played in parallel [default: number of cores]"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .help("seed for fair-match openings"),
        )
}

fn parse_args(matches: &ArgMatches) -> Result<(MatchConfig, AIType), String> {
    let opponent_name = matches
        .get_one::<String>("opponent")
        .expect("'opponent' has a default value");
    let opponent = AIType::from_name(opponent_name).ok_or_else(|| format!("Unknown opponent '{opponent_name}'"))?;

    let config = MatchConfig {
        rounds: *matches.get_one::<usize>("rounds").expect("'rounds' has a default value"),
        time_limit: Duration::from_millis(
            *matches
                .get_one::<u64>("time limit")
                .expect("'time limit' has a default value"),
        ),
        fair_matches: matches.get_flag("fair matches"),
        processes: matches
            .get_one::<usize>("processes")
            .copied()
            .unwrap_or_else(num_cpus::get),
        seed: matches.get_one::<u64>("seed").copied(),
    };
    config.validate().map_err(|err| err.to_string())?;

    Ok((config, opponent))
}
