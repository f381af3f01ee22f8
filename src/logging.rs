use {
  super::*,
  tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
  },
};

fn filter(verbose: u8, quiet: bool) -> EnvFilter {
  if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
    return EnvFilter::from_default_env();
  }

  let level = level(verbose, quiet);

  EnvFilter::new(format!(
    "{}={level},tower_http={level}",
    env!("CARGO_CRATE_NAME")
  ))
}

/// Installs the global subscriber. Logs go to stderr so stdout only ever
/// carries result documents. `RUST_LOG` overrides the verbosity flags.
pub(crate) fn init(verbose: u8, quiet: bool) {
  let layer = fmt::layer()
    .with_writer(io::stderr)
    .with_ansi(io::stderr().is_terminal())
    .with_target(verbose > 1);

  if let Err(error) = tracing_subscriber::registry()
    .with(filter(verbose, quiet))
    .with(layer)
    .try_init()
  {
    eprintln!("warning: could not initialize logging: {error}");
  }
}

fn level(verbose: u8, quiet: bool) -> &'static str {
  if quiet {
    return "error";
  }

  match verbose {
    0 => "info",
    1 => "debug",
    _ => "trace",
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn quiet_wins_over_verbose() {
    assert_eq!(level(3, true), "error");
  }

  #[test]
  fn verbosity_raises_the_level() {
    assert_eq!(level(0, false), "info");
    assert_eq!(level(1, false), "debug");
    assert_eq!(level(2, false), "trace");
    assert_eq!(level(9, false), "trace");
  }
}
