use std::fmt;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;
use tracing::{Dispatch, Event, Subscriber};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt};

use crate::config::DEFAULT_LOG_FILTER;
use crate::error::BatchError;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Renders events as `<timestamp> - <LEVEL> - <message>`.
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{} - {} - ",
            Local::now().format(TIMESTAMP_FORMAT),
            event.metadata().level()
        )?;
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Logging destination for one batch run.
///
/// Nothing is installed globally: the context owns its own dispatcher, and
/// events only reach it while code runs inside [`LogContext::in_scope`] or a
/// future wrapped with `WithSubscriber::with_subscriber(ctx.dispatch().clone())`.
/// `log` records (emitted by `reqwest` and `hyper`) are bridged through
/// `LogTracer`, so a `debug` filter surfaces transport details in the same file.
#[derive(Debug, Clone)]
pub struct LogContext {
    dispatch: Dispatch,
}

impl LogContext {
    /// Append to the log file at `path`, creating it if needed.
    pub fn open(path: &Path, filter: &str) -> Result<Self, BatchError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| BatchError::LogOpen {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(Self::with_writer(Mutex::new(file), filter))
    }

    pub fn with_writer<W>(writer: W, filter: &str) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let _ = LogTracer::init();

        let filter =
            EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer)
            .event_format(LineFormat);

        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(file_layer);

        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}
