use {
  arguments::{Arguments, ClientOptions},
  axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
  },
  clap::Parser,
  client::Client,
  comment::Comment,
  crossterm::style::Stylize,
  error::Error,
  fetch::Fetch,
  futures::stream::{self, StreamExt},
  post::Post,
  serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Unexpected},
  },
  serde_json::{Value, json},
  stats::Stats,
  std::{
    backtrace::BacktraceStatus,
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
    fs,
    io::{self, IsTerminal},
    path::PathBuf,
    process,
    str::FromStr,
    time::Duration,
  },
  subcommand::Subcommand,
  thing::{CommentData, LinkData, ListingData, MoreData, Thing},
  thread::Thread,
  thread_reference::ThreadReference,
  tracing::{debug, info, warn},
  tree_builder::TreeBuilder,
  utils::{
    decode_text, deserialize_timestamp, format_points, kind_of, replies_listing,
    truncate,
  },
};

mod arguments;
mod client;
mod comment;
mod error;
mod fetch;
mod logging;
mod post;
mod server;
mod stats;
mod subcommand;
mod thing;
mod thread;
mod thread_reference;
mod tree_builder;
mod tree_view;
mod utils;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

async fn run() -> Result {
  let arguments = Arguments::parse();

  logging::init(arguments.verbose, arguments.quiet);

  arguments.subcommand.run(arguments.quiet).await
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
