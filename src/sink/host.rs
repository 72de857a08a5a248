//! Host-runtime sink.
//!
//! # Responsibilities
//! - Forward formatted lines to the host's log facility
//! - Map tiers onto the host's info/warning/error calls
//!
//! # Design Decisions
//! - The host facility is the `tracing` dispatcher; whatever subscriber the
//!   host installed decides where lines end up
//! - The logger name travels as a `logger` field rather than in the text

use super::{OutputSink, Tier};

/// Emits each line as a `tracing` event at the tier's level.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostSink;

impl HostSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for HostSink {
    fn write_line(&self, logger: &str, tier: Tier, line: &str) {
        match tier {
            Tier::Info => tracing::info!(target: "unilog", logger = %logger, "{}", line),
            Tier::Warning => tracing::warn!(target: "unilog", logger = %logger, "{}", line),
            Tier::Error => tracing::error!(target: "unilog", logger = %logger, "{}", line),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::sync::{Arc, Mutex};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    use super::*;

    /// (level, target, logger field, message) for each captured event.
    type Captured = Arc<Mutex<Vec<(tracing::Level, String, String, String)>>>;

    #[derive(Default)]
    struct Fields {
        logger: String,
        message: String,
    }

    impl Visit for Fields {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            match field.name() {
                "logger" => self.logger = format!("{:?}", value),
                "message" => self.message = format!("{:?}", value),
                _ => {}
            }
        }
    }

    struct CaptureLayer(Captured);

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = Fields::default();
            event.record(&mut fields);
            let metadata = event.metadata();
            self.0.lock().unwrap().push((
                *metadata.level(),
                metadata.target().to_string(),
                fields.logger,
                fields.message,
            ));
        }
    }

    #[test]
    fn test_tiers_map_to_tracing_levels() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry().with(CaptureLayer(captured.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let sink = HostSink::new();
            sink.write_line("net", Tier::Info, "Info: up");
            sink.write_line("net", Tier::Warning, "Warn: slow");
            sink.write_line("db", Tier::Error, "Error: down");
        });

        let events = captured.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                (tracing::Level::INFO, "unilog".into(), "net".into(), "Info: up".into()),
                (tracing::Level::WARN, "unilog".into(), "net".into(), "Warn: slow".into()),
                (tracing::Level::ERROR, "unilog".into(), "db".into(), "Error: down".into()),
            ]
        );
    }

    #[test]
    fn test_logger_routes_through_host_sink() {
        use crate::logger::{Level, Logger};
        use crate::registry::Defaults;
        use crate::sink::SinkKind;

        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry().with(CaptureLayer(captured.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let defaults = Defaults::for_sink(SinkKind::Host).with_level(Level::Verbose);
            let logger = Logger::new("ui", &defaults);
            logger.debug("hidden");
            logger.verbose("shown");
        });

        let events = captured.lock().unwrap().clone();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, tracing::Level::INFO);
        assert_eq!(events[0].2, "ui");
        assert_eq!(events[0].3, "Verbose: shown");
    }
}
