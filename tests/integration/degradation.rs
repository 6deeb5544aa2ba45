//! Bad descriptors never abort a reconstruction: they are skipped or demoted, and reported once.

use mdtasks::{Anomaly, InclusionFilter, ListDescriptor, ListTree, SourceContext, TaskList, TasksFile, read_tasks};
use miette::Diagnostic;
use rstest::rstest;

use crate::common::{assert_well_formed, read};

fn build(content: &str, descriptors: &[ListDescriptor]) -> (TaskList, Vec<Anomaly>) {
	let mut anomalies: Vec<Anomaly> = Vec::new();
	let tasks = read_tasks(TasksFile::new("broken.md", None), content, descriptors, &InclusionFilter::none(), &mut anomalies);
	assert_well_formed(tasks.tree());
	(tasks, anomalies)
}

#[test]
fn test_out_of_range_descriptor_reported_once() {
	let (tasks, anomalies) = build("- [ ] a\n- [ ] b\n", &[ListDescriptor::root(0), ListDescriptor::root(1), ListDescriptor::root(40)]);

	assert_eq!(tasks.len(), 2);
	assert_eq!(anomalies.len(), 1);
	assert_eq!(anomalies[0].line(), 40);
	assert_eq!(anomalies[0].path(), "broken.md");
}

#[test]
fn test_unsorted_descriptors() {
	let content = "- [ ] a\n    - [ ] b\n        - [ ] c\n";
	let (tasks, anomalies) = build(content, &[ListDescriptor::child(2, 1), ListDescriptor::root(0), ListDescriptor::child(1, 0)]);

	assert!(anomalies.is_empty());
	assert_eq!(tasks.tree().shape(), vec![(0, None, vec![1]), (1, Some(0), vec![2]), (2, Some(1), vec![])]);
}

#[test]
fn test_forward_parent_is_demoted_and_reported() {
	let (tasks, anomalies) = build("- [ ] a\n- [ ] b\n", &[ListDescriptor::child(0, 1), ListDescriptor::root(1)]);

	assert_eq!(tasks.tree().roots().count(), 2);
	assert!(matches!(anomalies[..], [Anomaly::ParentAfterChild { line: 0, parent: 1, .. }]));
}

#[test]
fn test_heading_parent_is_demoted_silently() {
	let (tasks, anomalies) = build("# heading\n- [ ] a\n", &[ListDescriptor::child(1, 0)]);

	assert!(anomalies.is_empty());
	assert_eq!(tasks.iter().next().unwrap().parent(), None);
}

#[test]
fn test_anomaly_points_at_line() {
	let (_, anomalies) = build("- [ ] a\nprose\n", &[ListDescriptor::root(0), ListDescriptor::root(1)]);
	let [anomaly] = &anomalies[..] else { panic!("expected one anomaly") };

	assert_eq!(anomaly.to_string(), "broken.md: list descriptor for line 1 does not point at a list line");
	assert_eq!(anomaly.code().unwrap().to_string(), "mdtasks::descriptor::not_a_list_line");
	let labels: Vec<_> = anomaly.labels().unwrap().collect();
	assert_eq!((labels[0].offset(), labels[0].len()), (8, 5));
}

#[rstest]
#[case::nested("- [ ] a\n    - b\n        - [x] c\n- [-] d\n")]
#[case::callout("> [!todo]\n> - [ ] a\n>     - [ ] b\n")]
#[case::headings("# h1\n- [ ] a\n## h2\n- b\n    - [/] c\n")]
fn test_reconstruction_is_idempotent(#[case] content: &str) {
	let first = read(content, &InclusionFilter::none());
	let second = read(content, &InclusionFilter::none());
	assert_eq!(first.tree().shape(), second.tree().shape());
	assert_eq!(first.summaries(), second.summaries());
}

#[rstest]
#[case::no_filter(InclusionFilter::none(), 3)]
#[case::tag_filter(InclusionFilter::new(Some("#task"), false), 2)]
fn test_emitted_count_matches_checkbox_descriptors(#[case] filter: InclusionFilter, #[case] expected: usize) {
	let content = "- [ ] #task a\n- plain\n    - [x] b\n    - [ ] #task/sub c\n";
	let metadata = mdtasks::DocumentMetadata::analyze(content);
	let ctx = SourceContext::new("count.md", content);
	let mut anomalies: Vec<Anomaly> = Vec::new();
	let tree = ListTree::build(&ctx, &metadata.list_items, &filter, &mut anomalies);

	let checkbox_lines = metadata
		.list_items
		.iter()
		.filter(|d| match mdtasks::classify_line(content.lines().nth(d.line).unwrap()) {
			mdtasks::Classification::Task { description, .. } => filter.includes(description),
			_ => false,
		})
		.count();
	assert_eq!(checkbox_lines, expected);
	assert_eq!(mdtasks::emit_tasks(&tree).len(), expected);
}

#[test]
fn test_ids_from_another_list_do_not_panic() {
	let small = read("- [ ] only\n", &InclusionFilter::none());
	let big = read("- [ ] a\n- [ ] b\n- [ ] c\n", &InclusionFilter::none());

	assert_eq!(small.tree().render(big.ids()[1]), None);
	assert!(small.tree().get(big.ids()[2]).is_none());
	assert_eq!(small.tree().render_all(big.ids().iter().copied()), "- [ ] only : Task");
}

#[test]
fn test_anomalies_share_the_note_content() {
	let content = format!("- [ ] a\n{}", "prose\n".repeat(200));
	let descriptors: Vec<ListDescriptor> = (0..=200).map(ListDescriptor::root).collect();
	let (_, anomalies) = build(&content, &descriptors);
	assert_eq!(anomalies.len(), 200);

	let first = anomalies[0].source_code().unwrap();
	let last = anomalies[199].source_code().unwrap();
	let span = miette::SourceSpan::from((0, 1));
	let first_ptr = first.read_span(&span, 0, 0).unwrap().data().as_ptr();
	let last_ptr = last.read_span(&span, 0, 0).unwrap().data().as_ptr();
	assert_eq!(first_ptr, last_ptr);
}
