use std::{
	path::{Path, PathBuf},
	sync::Mutex,
};

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use color_eyre::eyre::{Result, WrapErr};
use mdtasks::{Anomaly, DocumentMetadata, InclusionFilter, Settings, TaskList, TasksFile, read_tasks};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
	/// Config file; defaults to $XDG_CONFIG_HOME/mdtasks/config.toml
	#[arg(long, global = true)]
	config: Option<PathBuf>,
	/// Override `global_filter` from the config
	#[arg(long, global = true)]
	global_filter: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the tasks of a note, in line order
	Tasks(TasksArgs),
	/// Print every list line of a note as a hierarchy
	Tree(DocumentArgs),
	/// Print the frontmatter and list descriptors found in a note, as JSON
	Outline(DocumentArgs),
	/// Generate shell completions
	Completions { shell: Shell },
}

#[derive(Args)]
struct DocumentArgs {
	file: PathBuf,
	/// Read frontmatter and list descriptors from this JSON file instead of analyzing the note
	#[arg(long)]
	metadata: Option<PathBuf>,
}

#[derive(Args)]
struct TasksArgs {
	#[clap(flatten)]
	document: DocumentArgs,
	#[arg(long)]
	json: bool,
}

fn main() -> Result<()> {
	color_eyre::install()?;
	init_tracing()?;
	let cli = Cli::parse();

	match &cli.command {
		Commands::Tasks(args) => {
			let tasks = load(&args.document, &filter(&cli)?)?;
			if args.json {
				println!("{}", serde_json::to_string_pretty(&tasks.summaries())?);
			} else {
				for summary in tasks.summaries() {
					let parent = summary.parent.map(|p| format!(" (parent: {p})")).unwrap_or_default();
					println!("{}: [{}] {}{parent}", summary.line, summary.status, summary.description);
				}
			}
		}
		Commands::Tree(args) => {
			let tasks = load(args, &filter(&cli)?)?;
			println!("{}", tasks.tree().render_roots());
		}
		Commands::Outline(args) => {
			let content = read(&args.file)?;
			let metadata = metadata(args, &content)?;
			println!("{}", serde_json::to_string_pretty(&metadata)?);
		}
		Commands::Completions { shell } => clap_complete::generate(*shell, &mut Cli::command(), "mdtasks", &mut std::io::stdout()),
	}

	Ok(())
}

/// Settings from the config file and environment, then the command line.
fn filter(cli: &Cli) -> Result<InclusionFilter> {
	let mut settings = Settings::load(cli.config.as_deref())?;
	if let Some(global_filter) = &cli.global_filter {
		settings.global_filter = Some(global_filter.clone());
	}
	Ok(settings.filter())
}

fn load(args: &DocumentArgs, filter: &InclusionFilter) -> Result<TaskList> {
	let content = read(&args.file)?;
	let metadata = metadata(args, &content)?;
	let path = args.file.to_string_lossy();
	let file = TasksFile::from_metadata(path.as_ref(), Some(&metadata));

	let mut anomalies: Vec<Anomaly> = Vec::new();
	let tasks = read_tasks(file, &content, &metadata.list_items, filter, &mut anomalies);
	tracing::info!("[tasks] {}: {} tasks, {} list lines, {} anomalies", path, tasks.len(), tasks.tree().len(), anomalies.len());
	for anomaly in anomalies {
		eprintln!("{:?}", miette::Report::new(anomaly));
	}
	Ok(tasks)
}

fn read(path: &Path) -> Result<String> {
	std::fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))
}

fn metadata(args: &DocumentArgs, content: &str) -> Result<DocumentMetadata> {
	match &args.metadata {
		Some(path) => serde_json::from_str(&read(path)?).wrap_err_with(|| format!("{} is not valid document metadata", path.display())),
		None => Ok(DocumentMetadata::analyze(content)),
	}
}

/// `RUST_LOG`, else the directives baked in at build time, else `info`.
/// With `MDTASKS_TRACE_FILE` set, events go to that file as JSON lines instead of stderr.
fn init_tracing() -> Result<()> {
	let directives = std::env::var("RUST_LOG").ok().or_else(|| option_env!("LOG_DIRECTIVES").map(str::to_string)).unwrap_or_else(|| "info".to_string());
	let filter = EnvFilter::try_new(directives)?;

	match std::env::var_os("MDTASKS_TRACE_FILE") {
		Some(path) => {
			let file = std::fs::File::create(&path).wrap_err("Failed to create MDTASKS_TRACE_FILE")?;
			tracing_subscriber::fmt().json().with_env_filter(filter).with_writer(Mutex::new(file)).init();
		}
		None => tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init(),
	}
	Ok(())
}
