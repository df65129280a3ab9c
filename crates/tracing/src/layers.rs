use rolling_file::{RollingConditionBasic, RollingFileAppender};
use std::path::PathBuf;
use tracing_subscriber::{registry::LookupSpan, EnvFilter, Layer, Registry};

use crate::formatter::LogFormat;

/// A type-erased layer.
pub(crate) type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

/// Keeps the background file writer alive. Logs still buffered are flushed when it is dropped.
pub type FileWorkerGuard = tracing_appender::non_blocking::WorkerGuard;

const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_MAX_FILES: usize = 5;

/// Configuration of a single log layer.
#[derive(Debug, Clone)]
pub struct LayerInfo {
    format: LogFormat,
    default_directive: String,
    filters: String,
    color: Option<String>,
}

impl LayerInfo {
    /// `default_directive` applies when `RUST_LOG` is unset; `filters` is a comma-separated
    /// list of extra directives. `color` is one of `always`, `auto` or `never`; `None`
    /// disables colors.
    pub fn new(
        format: LogFormat,
        default_directive: String,
        filters: String,
        color: Option<String>,
    ) -> Self {
        Self { format, default_directive, filters, color }
    }

    fn build_env_filter(&self) -> eyre::Result<EnvFilter> {
        let env_filter = EnvFilter::builder()
            .with_default_directive(self.default_directive.parse()?)
            .from_env_lossy();

        self.filters
            .split(',')
            .map(str::trim)
            .filter(|directive| !directive.is_empty())
            .try_fold(env_filter, |env_filter, directive| {
                Ok(env_filter.add_directive(directive.parse()?))
            })
    }

    fn ansi(&self) -> bool {
        match self.color.as_deref() {
            Some(color) => std::env::var("RUST_LOG_STYLE")
                .map(|style| style != "never")
                .unwrap_or(color != "never"),
            None => false,
        }
    }

    pub(crate) fn stdout_layer(&self) -> eyre::Result<BoxedLayer<Registry>> {
        Ok(self.format.apply(self.build_env_filter()?, self.ansi(), None))
    }

    pub(crate) fn file_layer<S>(
        &self,
        info: &FileInfo,
    ) -> eyre::Result<(BoxedLayer<S>, FileWorkerGuard)>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        let (writer, guard) = tracing_appender::non_blocking(info.appender()?);
        Ok((self.format.apply(self.build_env_filter()?, false, Some(writer)), guard))
    }
}

impl Default for LayerInfo {
    fn default() -> Self {
        Self::new(LogFormat::Terminal, "info".to_string(), String::new(), Some("always".into()))
    }
}

/// Where, and how large, the log file is. When the file reaches `max_size_bytes` it is rotated,
/// keeping at most `max_files` old files.
#[derive(Debug, Clone)]
pub struct FileInfo {
    dir: PathBuf,
    file_name: String,
    max_size_bytes: u64,
    max_files: usize,
}

impl FileInfo {
    /// A log file at `path`, rotated at 10 MiB with five backups.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "tronex.log".to_string());
        let dir = path.parent().map(PathBuf::from).unwrap_or_default();

        Self { dir, file_name, max_size_bytes: DEFAULT_MAX_FILE_SIZE, max_files: DEFAULT_MAX_FILES }
    }

    /// Sets the rotation threshold.
    pub fn with_max_size(mut self, max_size_bytes: u64) -> Self {
        self.max_size_bytes = max_size_bytes;
        self
    }

    /// Full path of the active log file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    fn appender(&self) -> eyre::Result<RollingFileAppender<RollingConditionBasic>> {
        if !self.dir.as_os_str().is_empty() {
            std::fs::create_dir_all(&self.dir)?;
        }

        Ok(RollingFileAppender::new(
            self.path(),
            RollingConditionBasic::new().max_size(self.max_size_bytes),
            self.max_files,
        )?)
    }
}
