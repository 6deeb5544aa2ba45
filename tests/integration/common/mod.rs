//! Shared helpers: read a note end to end and check the tree it produced.

use std::{
	path::{Path, PathBuf},
	process::{Command, Output},
};

use mdtasks::{Anomaly, InclusionFilter, ListTree, NodeRef, TaskList, read_document};

/// Only `#task` lines are tasks, and the tag stays in the description.
pub fn task_tag() -> InclusionFilter {
	InclusionFilter::new(Some("#task"), false)
}

/// Analyze and read `content`, failing the test on any anomaly.
pub fn read(content: &str, filter: &InclusionFilter) -> TaskList {
	let (tasks, anomalies) = read_reporting(content, filter);
	assert!(anomalies.is_empty(), "unexpected anomalies: {anomalies:?}");
	assert_well_formed(tasks.tree());
	tasks
}

pub fn read_reporting(content: &str, filter: &InclusionFilter) -> (TaskList, Vec<Anomaly>) {
	let mut anomalies: Vec<Anomaly> = Vec::new();
	let tasks = read_document("Test Data/note.md", content, filter, &mut anomalies);
	(tasks, anomalies)
}

/// Root with exactly these children, each pointing back at it.
pub fn assert_root_and_children(root: NodeRef<'_>, children: &[NodeRef<'_>]) {
	assert_eq!(root.parent(), None, "{root:?} should be a root");
	assert_children(root, children);
}

pub fn assert_children(parent: NodeRef<'_>, children: &[NodeRef<'_>]) {
	assert_eq!(parent.children().collect::<Vec<_>>(), children);
	for child in children {
		assert_eq!(child.parent(), Some(parent));
		assert_eq!(child.parent().map(|p| p.original_markdown()), Some(parent.original_markdown()));
	}
}

/// Parents precede children, every child is listed once by its parent, and children are sorted.
pub fn assert_well_formed(tree: &ListTree) {
	for node in tree.nodes() {
		let children: Vec<usize> = node.children().map(|c| c.line()).collect();
		assert!(children.is_sorted(), "children of line {} out of order: {children:?}", node.line());

		if let Some(parent) = node.parent() {
			assert!(parent.line() < node.line());
			assert_eq!(parent.children().filter(|c| *c == node).count(), 1);
		}
	}
}

/// A scratch directory with an isolated config home, for running the binary.
pub struct CliContext {
	dir: tempfile::TempDir,
}

impl CliContext {
	pub fn new() -> Self {
		let dir = tempfile::tempdir().unwrap();
		std::fs::create_dir_all(dir.path().join("config")).unwrap();
		Self { dir }
	}

	pub fn write(&self, name: &str, content: &str) -> PathBuf {
		let path = self.dir.path().join(name);
		std::fs::write(&path, content).unwrap();
		path
	}

	pub fn path(&self, name: &str) -> PathBuf {
		self.dir.path().join(name)
	}

	pub fn config_home(&self) -> PathBuf {
		self.dir.path().join("config")
	}

	pub fn command(&self) -> Command {
		let mut command = Command::new(env!("CARGO_BIN_EXE_mdtasks"));
		command
			.env("XDG_CONFIG_HOME", self.config_home())
			.env_remove("MDTASKS_GLOBAL_FILTER")
			.env_remove("MDTASKS_REMOVE_GLOBAL_FILTER")
			.env_remove("MDTASKS_TRACE_FILE")
			.env_remove("RUST_LOG");
		command
	}

	pub fn run(&self, args: &[&str]) -> Output {
		self.command().args(args).output().unwrap()
	}

	pub fn root(&self) -> &Path {
		self.dir.path()
	}
}

/// Stdout of a successful run, trailing newline trimmed.
pub fn stdout(output: &Output) -> String {
	assert!(output.status.success(), "command failed: {}", String::from_utf8_lossy(&output.stderr));
	String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}
