//! CLI command implementations.
//!
//! Each submodule implements a specific CLI command:
//! - [`query`] - Matching log lines of a day
//! - [`dates`] - Dates that have logs
//! - [`files`] - Files of a day with their time ranges

pub mod dates;
pub mod files;
pub mod query;

pub use dates::DatesCommand;
pub use files::FilesCommand;
pub use query::QueryCommand;

use logdesk_core::LogEngine;

use crate::cli::AppArgs;

/// Engine for the application named by `--app`, or the default one.
///
/// A blank name selects the default application. Without `--prefix` the
/// other application keeps the configured log prefix.
pub(crate) fn engine_for_app(engine: &LogEngine, target: &AppArgs) -> LogEngine {
    let Some(app) = non_blank(target.app.as_deref()) else {
        return engine.clone();
    };
    let prefix = non_blank(target.prefix.as_deref()).unwrap_or(engine.config().log_prefix.as_str());
    engine.for_app(app, prefix)
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use logdesk_core::EngineConfig;

    fn target(app: Option<&str>, prefix: Option<&str>) -> AppArgs {
        AppArgs {
            app: app.map(String::from),
            prefix: prefix.map(String::from),
        }
    }

    fn engine() -> LogEngine {
        LogEngine::new(
            EngineConfig::new("/logs")
                .with_app_name("main")
                .with_log_prefix("main-info"),
        )
    }

    #[test]
    fn engine_for_app_switches_only_when_named() {
        let engine = engine();

        assert_eq!(engine_for_app(&engine, &target(None, None)).config().app_name, "main");
        assert_eq!(engine_for_app(&engine, &target(Some("  "), None)).config().app_name, "main");
        assert_eq!(
            engine_for_app(&engine, &target(Some("billing"), None)).config().app_name,
            "billing"
        );
    }

    #[test]
    fn engine_for_app_takes_prefix_when_given() {
        let engine = engine();

        let billing = engine_for_app(&engine, &target(Some("billing"), Some("billing-info")));
        assert_eq!(billing.config().app_name, "billing");
        assert_eq!(billing.config().log_prefix, "billing-info");

        let same_prefix = engine_for_app(&engine, &target(Some("billing"), Some(" ")));
        assert_eq!(same_prefix.config().log_prefix, "main-info");
    }
}
