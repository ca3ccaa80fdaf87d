use std::ffi::OsString;

use clap::Subcommand;

pub mod affinity;
pub mod pull_clusters;

pub use affinity::AffinityCMD;
pub use pull_clusters::PullClustersCMD;

///////////////////////////////
/// Possible subcommands to parse
#[derive(Subcommand)]
pub enum Commands {
    /// Isolate specific clusters from a directory of fastq files
    #[command(arg_required_else_help = true)]
    PullClusters(PullClustersCMD),
    /// Convert between Kd and dG
    #[command(arg_required_else_help = true)]
    Affinity(AffinityCMD),
}

impl Commands {
    pub fn try_execute(&mut self) -> anyhow::Result<()> {
        match self {
            Commands::PullClusters(cmd) => cmd.try_execute(),
            Commands::Affinity(cmd) => cmd.try_execute(),
        }
    }
}

/// Two-letter flags accepted with a single dash, as the long aliases they stand for
pub const TWO_LETTER_FLAGS: [&str; 5] = ["cl", "fd", "od", "op", "ct"];

/// Rewrite `-cl`, `-fd`, `-od`, `-op` and `-ct` (also in `-cl=value` form)
/// to their `--` aliases so clap does not split them into short flags.
/// Arguments after a `--` terminator are passed through untouched.
pub fn expand_two_letter_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_terminator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_terminator {
                return arg;
            }
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s == "--" {
                after_terminator = true;
                return arg;
            }
            let Some(rest) = s.strip_prefix('-').filter(|r| !r.starts_with('-')) else {
                return arg;
            };
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if TWO_LETTER_FLAGS.contains(&name) {
                OsString::from(format!("-{}", s))
            } else {
                arg
            }
        })
        .collect()
}
