use std::error::Error;
use std::fs::File;
use std::io::{stdin, stdout, BufReader, Write};
use std::path::PathBuf;

use log::{info, LevelFilter};
use showdown_core::{deal_two, showdown, Deck};
use structopt::StructOpt;

mod batch;
mod play;

#[derive(StructOpt)]
#[structopt(name = "showdown", about = "Find out which of two five card poker hands wins")]
struct Opt {
    #[structopt(
        short,
        long,
        parse(from_occurrences),
        help = "Log more to stderr (-v info, -vv debug, -vvv trace)"
    )]
    verbose: u8,
    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Enter two hands card by card and see which wins
    Play {
        #[structopt(
            long,
            help = "Silence prompts (useful for tests with set input)"
        )]
        no_prompts: bool,
    },
    /// Score deals of ten cards per line, player 1's hand first
    Batch {
        #[structopt(parse(from_os_str), help = "Read deals from here instead of stdin")]
        file: Option<PathBuf>,
        #[structopt(short, long, help = "Only print the final tally")]
        quiet: bool,
    },
    /// Deal two hands from a freshly shuffled deck
    Deal {
        #[structopt(long)]
        seed: Option<u64>,
    },
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    if let Err(e) = simplelog::TermLogger::init(
        level(verbose),
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Unable to start logging: {}", e);
    }
}

fn deal(seed: Option<u64>, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    let mut deck = match seed {
        Some(seed) => {
            info!("dealing from deck seeded with {}", seed);
            Deck::with_seed(seed)
        }
        None => Deck::new(),
    };
    let (a, b) = deal_two(&mut deck)?;
    writeln!(out, "first hand: {} ({})", a.pretty(), a.class())?;
    writeln!(out, "second hand: {} ({})", b.pretty(), b.class())?;
    writeln!(out, "{}", play::describe(&a, &b, &showdown(&a, &b)))?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    init_logging(opt.verbose);
    let stdin = stdin();
    let stdout = stdout();
    let mut out = stdout.lock();
    match opt.cmd {
        Command::Play { no_prompts } => play::run(&mut stdin.lock(), &mut out, no_prompts)?,
        Command::Batch { file, quiet } => {
            let tally = match file {
                Some(path) => batch::run(&mut BufReader::new(File::open(path)?), &mut out, quiet)?,
                None => batch::run(&mut stdin.lock(), &mut out, quiet)?,
            };
            writeln!(out, "{}", tally)?;
        }
        Command::Deal { seed } => deal(seed, &mut out)?,
    }
    Ok(())
}
