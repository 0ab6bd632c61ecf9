use abpsum_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; the filter still runs without it.
    if let Err(err) = logging::init_logging() {
        eprintln!("abpsum: logging disabled: {:#}", err);
    }

    if let Err(err) = cli::run_from_args() {
        eprintln!("abpsum error: {:#}", err);
        std::process::exit(1);
    }
}
