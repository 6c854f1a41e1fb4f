//! Custom panic hook for structured crash reports.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str =
    "════════════════════════════════════════════════════════════════════════════════";

/// Install the custom panic hook.
///
/// Call early in `main()`, after logging is configured so the current
/// tracing span can be included in the report.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!();
        eprintln!("{}", crash_report(info));
    }));
}

fn crash_report(info: &PanicHookInfo<'_>) -> String {
    let mut lines = vec![
        RULE.to_string(),
        "SQUARE-SOLVER CRASH REPORT".to_string(),
        RULE.to_string(),
        format!("Version:  {}", VERSION),
        format!("Platform: {}", std::env::consts::OS),
        format!("Time:     {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")),
        format!("Panic:    {}", truncate(&extract_panic_message(info), 68)),
    ];

    if let Some(location) = info.location() {
        lines.push(format!(
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }

    if let Some(metadata) = Span::current().metadata() {
        lines.push(format!("Span:     {}", metadata.name()));
    }

    let backtrace = Backtrace::capture();
    lines.push(RULE.to_string());
    if backtrace.status() == BacktraceStatus::Captured {
        lines.push("STACK TRACE:".to_string());
        lines.push(backtrace.to_string());
    } else {
        lines.push("Run with RUST_BACKTRACE=1 for stack trace".to_string());
    }
    lines.push(RULE.to_string());
    lines.join("\n")
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
