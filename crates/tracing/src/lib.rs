//! Tracing setup for tronex: a stdout layer in one of several formats, plus an optional
//! size-rotated log file.

mod formatter;
mod layers;

pub use formatter::LogFormat;
pub use layers::{FileInfo, FileWorkerGuard, LayerInfo};
pub use tracing_subscriber;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// A tracer that can install itself as the global subscriber.
pub trait Tracer {
    /// Installs the tracer. The returned guard, when present, must be held for as long as
    /// logs should keep flowing to the file.
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>>;
}

/// The tronex tracer: stdout plus an optional file.
#[derive(Debug, Clone)]
pub struct TronexTracer {
    stdout: LayerInfo,
    file: Option<(LayerInfo, FileInfo)>,
}

impl TronexTracer {
    /// A tracer that logs to stdout at `info` and up.
    pub fn new() -> Self {
        Self { stdout: LayerInfo::default(), file: None }
    }

    /// Replaces the stdout layer configuration.
    pub fn with_stdout(mut self, config: LayerInfo) -> Self {
        self.stdout = config;
        self
    }

    /// Also write logs to the file described by `info`.
    pub fn with_file(mut self, config: LayerInfo, info: FileInfo) -> Self {
        self.file = Some((config, info));
        self
    }
}

impl Default for TronexTracer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tracer for TronexTracer {
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>> {
        let mut layers = vec![self.stdout.stdout_layer()?];

        let guard = match self.file {
            Some((config, info)) => {
                let (layer, guard) = config.file_layer(&info)?;
                layers.push(layer);
                Some(guard)
            }
            None => None,
        };

        tracing_subscriber::registry().with(layers).try_init()?;
        Ok(guard)
    }
}
