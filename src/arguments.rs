use {super::*, clap::Args};

#[derive(Debug, Parser)]
#[command(
  name = "redthread",
  version,
  about = "Fetch a Reddit thread as a typed comment tree with statistics"
)]
pub(crate) struct Arguments {
  /// Only log errors and skip the human-readable summary
  #[arg(long, short, global = true, conflicts_with = "verbose")]
  pub(crate) quiet: bool,
  #[command(subcommand)]
  pub(crate) subcommand: Subcommand,
  /// Increase log verbosity, repeat for more detail
  #[arg(long, short, global = true, action = clap::ArgAction::Count)]
  pub(crate) verbose: u8,
}

#[derive(Args, Clone, Debug)]
pub(crate) struct ClientOptions {
  /// Seconds to wait for Reddit before giving up
  #[arg(long, env = "REDTHREAD_TIMEOUT", default_value_t = 30)]
  pub(crate) timeout: u64,
  /// User agent sent with every request
  #[arg(
    long,
    env = "REDTHREAD_USER_AGENT",
    default_value = concat!(
      "Mozilla/5.0 (compatible; redthread/",
      env!("CARGO_PKG_VERSION"),
      ")"
    )
  )]
  pub(crate) user_agent: String,
}

impl ClientOptions {
  pub(crate) fn client(&self) -> Result<Client> {
    Client::new(&self.user_agent, Duration::from_secs(self.timeout))
  }
}
