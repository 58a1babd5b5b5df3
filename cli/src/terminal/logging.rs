use std::fmt;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

/// Prints `[+] [cidr] message key=value`, pulling the `field` value out as a tag.
pub struct NetformsFormatter;

#[derive(Default)]
struct EventFields {
    field: Option<String>,
    message: String,
    extra: Vec<String>,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "field" => self.field = Some(value.to_string()),
            "message" => self.message = value.to_string(),
            name => self.extra.push(format!("{name}={value}")),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "field" => self.field = Some(format!("{value:?}")),
            "message" => self.message = format!("{value:?}"),
            name => self.extra.push(format!("{name}={value:?}")),
        }
    }
}

impl<S, N> FormatEvent<S, N> for NetformsFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            match *event.metadata().level() {
                Level::TRACE => ("[ ]", |s| s.dimmed()),
                Level::DEBUG => ("[?]", |s| s.blue()),
                Level::INFO => ("[+]", |s| s.green().bold()),
                Level::WARN => ("[*]", |s| s.yellow().bold()),
                Level::ERROR => ("[-]", |s| s.red().bold()),
            };

        let mut fields = EventFields::default();
        event.record(&mut fields);

        write!(writer, "{} ", color_func(symbol.into()))?;
        if let Some(field) = &fields.field {
            write!(writer, "{} ", format!("[{field}]").cyan())?;
        }
        write!(writer, "{}", fields.message)?;
        if !fields.extra.is_empty() {
            write!(writer, " {}", fields.extra.join(" ").dimmed())?;
        }

        writeln!(writer)
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over `verbosity`.
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let default_level: &str = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(NetformsFormatter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
}
