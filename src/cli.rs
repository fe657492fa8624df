use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Move cover images from `originalCovers/coverimages/` into
/// `convertedCovers/`, renamed according to `biblio_copy.csv`.
#[derive(Parser, Debug)]
#[command(name = "cover-rename", version, about)]
pub struct CoverCli {
    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl CoverCli {
    /// Log level requested on the command line, if any.
    ///
    /// `None` leaves the level to `RUST_LOG` (or the `warn` default).
    pub fn log_level(&self) -> Option<LevelFilter> {
        if self.quiet {
            return Some(LevelFilter::Error);
        }
        match self.verbose {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }
}
