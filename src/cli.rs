//! Drives the command-line program.

use crate::client::{self, Coven};
use crate::clock::{Clock, SystemClock};
use crate::conf::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, ServiceConfig};
use crate::post::Posts;
use crate::rank::{Criterion, rank};
use crate::service::{CovenService, Service};
use crate::summary;
use crate::view::{ViewOptions, Viewable};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use colored::Colorize;
use log::debug;
use std::io::{self, Write};
use std::process;
use std::time::Duration;
use thiserror::Error;

/// Prints `message` to stderr and exits with `error_code`.
pub fn die(error_code: i32, message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(error_code);
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(name = "coven", version)]
#[command(about = "Download and review stories from coven", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    /// Number of most recent posts to show
    #[arg(short = 'n', long, value_name = "N", default_value_t = 12)]
    recent: usize,

    /// Number of most discussed posts to show
    #[arg(short = 'd', long, value_name = "N", default_value_t = 4)]
    discussed: usize,

    /// URL of the coven posts API
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Give up on the API after this many seconds
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Do not print links in color
    #[arg(long, default_value_t = false)]
    no_color: bool,
}

impl Config {
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Configuration for the service used to contact the coven API.
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig::default()
            .endpoint(&self.endpoint)
            .timeout(Duration::from_secs(self.timeout))
    }

    fn view_options(&self) -> ViewOptions {
        ViewOptions::build().color(!self.no_color).build()
    }

    fn sections(&self) -> [(&'static str, Criterion, usize); 2] {
        [
            ("Most recent", Criterion::MostRecent, self.recent),
            ("Most discussed", Criterion::MostDiscussed, self.discussed),
        ]
    }
}

/// An error that stops the program.
#[derive(Debug, Error)]
pub enum Error {
    /// Posts could not be retrieved.
    #[error(transparent)]
    Client(#[from] client::Error),

    /// A post could not be displayed.
    #[error(transparent)]
    Summary(#[from] summary::Error),

    /// Output could not be written.
    #[error("Could not write output: {0}")]
    Io(#[from] io::Error),
}

/// Runs the command-line program.
#[derive(Debug)]
pub struct Runner<S: Service = CovenService, C: Clock = SystemClock> {
    config: Config,
    client: Coven<S>,
    clock: C,
}

impl Runner {
    /// Create a new program runner using the given `config`.
    pub fn new(config: Config) -> Result<Runner, Error> {
        let client = Coven::new(config.service_config())?;
        Ok(Self {
            config,
            client,
            clock: SystemClock,
        })
    }
}

impl<S: Service, C: Clock> Runner<S, C> {
    /// Create a new program runner that retrieves posts with `service` and
    /// tells time with `clock`.
    pub fn with_service(config: Config, service: S, clock: C) -> Self {
        let client = Coven::with_service(service);
        Self {
            config,
            client,
            clock,
        }
    }

    /// Run the command-line program, writing the digest to `out`.
    ///
    /// The whole digest is prepared before anything is written, so if
    /// an error is returned, nothing has been written.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        let posts = self.client.fetch_all()?;
        let digest = self.digest(&posts)?;
        out.write_all(digest.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn digest(&self, posts: &Posts) -> Result<String, Error> {
        if posts.is_empty() {
            return Ok(String::from("No posts found.\n"));
        }

        let opts = self.config.view_options();
        let mut sections = vec![];
        for (heading, criterion, limit) in self.config.sections() {
            if limit == 0 {
                continue;
            }
            debug!("rendering {limit} posts by {criterion:?}");
            let ranked = rank(posts, criterion, limit);
            let heading = if opts.color() {
                heading.bold().to_string()
            } else {
                heading.to_string()
            };
            let body = ranked.view(&opts, &self.clock)?;
            sections.push(format!("{heading}\n\n{body}"));
        }

        Ok(sections.join("\n\n") + "\n")
    }
}
