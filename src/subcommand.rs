use {
  super::*,
  anyhow::{Context, bail},
};

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Subcommand {
  /// Print the canonical JSON URL of a thread
  Normalize { url: String },
  /// Build the comment tree from a saved JSON payload
  Parse {
    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
    path: PathBuf,
  },
  /// Fetch one or more threads and print them as JSON
  Scrape {
    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
    /// Number of threads fetched concurrently
    #[arg(long, short, env = "REDTHREAD_JOBS", default_value_t = 4)]
    jobs: usize,
    #[command(flatten)]
    options: ClientOptions,
    #[arg(required = true)]
    urls: Vec<String>,
  },
  /// Serve the scrape API over HTTP
  Serve {
    #[arg(long, env = "REDTHREAD_ADDRESS", default_value = "0.0.0.0:8001")]
    address: String,
    #[command(flatten)]
    options: ClientOptions,
  },
}

impl Subcommand {
  fn json<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<String> {
    Ok(if compact {
      serde_json::to_string(value)?
    } else {
      serde_json::to_string_pretty(value)?
    })
  }

  fn print_summary(thread: &Thread, quiet: bool) {
    if !quiet {
      let color = io::stderr().is_terminal();
      eprintln!();
      eprint!("{}", tree_view::render(thread, color));
    }
  }

  pub(crate) async fn run(self, quiet: bool) -> Result {
    match self {
      Self::Normalize { url } => {
        println!("{}", ThreadReference::normalize(&url)?);
        Ok(())
      }
      Self::Parse { compact, path } => {
        let payload = fs::read(&path)
          .with_context(|| format!("could not read `{}`", path.display()))?;

        let thread = Thread::parse(&payload, None)
          .with_context(|| format!("could not parse `{}`", path.display()))?;

        println!("{}", Self::json(&thread, compact)?);
        Self::print_summary(&thread, quiet);

        Ok(())
      }
      Self::Scrape {
        compact,
        jobs,
        options,
        urls,
      } => Self::scrape(&options.client()?, &urls, jobs, compact, quiet).await,
      Self::Serve { address, options } => {
        server::serve(&address, options.client()?).await
      }
    }
  }

  async fn scrape(
    client: &Client,
    urls: &[String],
    jobs: usize,
    compact: bool,
    quiet: bool,
  ) -> Result {
    let results = stream::iter(urls.iter().map(|url| Thread::scrape(client, url)))
      .buffered(jobs.max(1))
      .collect::<Vec<_>>()
      .await;

    let mut threads = Vec::with_capacity(results.len());
    let mut failures = 0usize;

    for (url, result) in urls.iter().zip(results) {
      match result {
        Ok(thread) => threads.push(thread),
        Err(error) if urls.len() == 1 => {
          return Err(error).with_context(|| format!("failed to scrape {url}"));
        }
        Err(error) => {
          warn!(%url, kind = error.kind(), "failed to scrape: {error}");
          failures += 1;
        }
      }
    }

    println!("{}", Self::scraped(&threads, urls.len(), compact)?);

    for thread in &threads {
      Self::print_summary(thread, quiet);
    }

    if failures > 0 {
      bail!("{failures} of {} threads could not be scraped", urls.len());
    }

    Ok(())
  }

  /// A single requested URL prints a bare object. Several print an array,
  /// whatever number of them succeeded.
  fn scraped(
    threads: &[Thread],
    requested: usize,
    compact: bool,
  ) -> Result<String> {
    match threads {
      [thread] if requested == 1 => Self::json(thread, compact),
      threads => Self::json(threads, compact),
    }
  }
}
