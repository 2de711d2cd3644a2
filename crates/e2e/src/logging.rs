use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Maps `-v` counts onto an env filter; `RUST_LOG` wins when set.
fn default_filter(verbosity: u8) -> EnvFilter {
	// 0 = case lifecycle only, 1 = harness info, 2+ = debug everywhere
	let directives = match verbosity {
		0 => "warn,sua=info,sua_e2e=info",
		1 => "info",
		_ => "debug",
	};
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

pub fn init_logging(verbosity: u8) {
	// Logs go to stderr; stdout is reserved for the report.
	let stderr = std::io::stderr.with_max_level(tracing::Level::TRACE);

	tracing_subscriber::fmt()
		.with_env_filter(default_filter(verbosity))
		.with_writer(stderr)
		.with_target(true)
		.with_level(true)
		.compact()
		.try_init()
		.ok();
}
