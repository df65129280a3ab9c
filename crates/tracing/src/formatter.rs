use clap::ValueEnum;
use std::{
    fmt::{self, Display},
    str::FromStr,
};
use tracing::Subscriber;
use tracing_appender::non_blocking::NonBlocking;
use tracing_subscriber::{registry::LookupSpan, EnvFilter, Layer};

use crate::layers::BoxedLayer;

/// Output format of a log layer.
#[derive(Debug, Copy, Clone, ValueEnum, Eq, PartialEq)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// `key=value` pairs.
    #[value(name = "logfmt")]
    LogFmt,
    /// Human-readable, optionally colored.
    Terminal,
}

impl LogFormat {
    /// Builds a layer in this format. Events go to stdout unless `writer` is given.
    pub(crate) fn apply<S>(
        &self,
        filter: EnvFilter,
        ansi: bool,
        writer: Option<NonBlocking>,
    ) -> BoxedLayer<S>
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        match (self, writer) {
            (LogFormat::Json, Some(writer)) => tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(filter)
                .boxed(),
            (LogFormat::Json, None) => {
                tracing_subscriber::fmt::layer().json().with_filter(filter).boxed()
            }
            (LogFormat::LogFmt, Some(writer)) => tracing_logfmt::builder()
                .layer()
                .with_writer(writer)
                .with_filter(filter)
                .boxed(),
            (LogFormat::LogFmt, None) => {
                tracing_logfmt::builder().layer().with_filter(filter).boxed()
            }
            (LogFormat::Terminal, Some(writer)) => tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer)
                .with_filter(filter)
                .boxed(),
            (LogFormat::Terminal, None) => tracing_subscriber::fmt::layer()
                .with_ansi(ansi)
                .with_target(false)
                .with_filter(filter)
                .boxed(),
        }
    }
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Json => write!(f, "json"),
            LogFormat::LogFmt => write!(f, "logfmt"),
            LogFormat::Terminal => write!(f, "terminal"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "logfmt" => Ok(LogFormat::LogFmt),
            "terminal" => Ok(LogFormat::Terminal),
            _ => Err(format!("invalid log format: {s}")),
        }
    }
}
