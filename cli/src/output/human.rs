//! Human-readable terminal renderer.

use std::path::Path;

use noop_common::AgentKind;
use owo_colors::OwoColorize as _;

use crate::domain::{InvestigationReport, NoopConfig, PackageReport};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        println!("noop {version}");
    }

    /// Render the agent set with each project directory's presence.
    pub fn render_agents(&self, agents: &[AgentKind], agents_dir: &Path) {
        println!("Available agents:\n");
        for agent in agents {
            let dir = agents_dir.join(agent.dir_name());
            let marker = if dir.is_dir() {
                String::new()
            } else {
                format!("  {}", "[missing]".style(self.ctx.styles.warning))
            };
            println!(
                "  {:<14} {}{marker}",
                agent.as_str().style(self.ctx.styles.agent),
                agent.description()
            );
        }
        if !self.ctx.quiet {
            println!("\nInvoke an agent: noop invoke <agent> \"<prompt>\"");
        }
    }

    /// Print an agent answer verbatim. Never suppressed: it is the command's result.
    pub fn render_answer(&self, answer: &str) {
        if answer.ends_with('\n') {
            print!("{answer}");
        } else {
            println!("{answer}");
        }
    }

    /// Render a finished deployment package.
    pub fn render_package(&self, report: &PackageReport) {
        self.ctx
            .success(&format!("Package written: {}", report.archive.display()));
        self.ctx.kv("Files:", &report.summary.files.to_string());
        self.ctx.kv("Size:", &format_bytes(report.summary.bytes));
        self.ctx.kv("SHA-256 (base64):", &report.summary.sha256_base64);
    }

    /// Print the HTML report; the subject goes to stderr so stdout stays a clean document.
    pub fn render_report(&self, report: &InvestigationReport) {
        if !self.ctx.quiet {
            eprintln!("  {}", report.subject.style(self.ctx.styles.header));
        }
        println!("{}", report.html);
    }

    /// Render the current noop configuration.
    pub fn render_config(&self, config: &NoopConfig, path: &Path) {
        println!();
        self.ctx
            .header(&format!("Configuration ({})", path.display()));
        println!();
        let rows = [
            ("runtime.program:", config.runtime.program.clone()),
            ("runtime.agents_dir:", config.runtime.agents_dir.clone()),
            ("runtime.timeout_secs:", config.runtime.timeout_secs.to_string()),
            ("package.manifest:", config.package.manifest.clone()),
            ("package.handler:", config.package.handler.clone()),
            ("package.output:", config.package.output.clone()),
            ("package.resolver:", config.package.resolver.clone()),
            (
                "investigation.theme_color:",
                config.investigation.theme_color.clone(),
            ),
        ];
        for (key, value) in rows {
            println!("  {key:<28} {value}");
        }
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.emphasis));
        for var in ["NOOP_CONFIG", "NOOP_LOG", "NO_COLOR"] {
            println!(
                "    {:<18} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }

    /// Confirm a persisted setting.
    pub fn render_config_set(&self, key: &str, value: &str) {
        self.ctx.success(&format!("Set {key} = {value}"));
    }
}

/// Format a byte count with a binary unit, e.g. `12.3 MiB`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}
