//! Tasks inside callouts and block quotes keep their quote markers in the original markdown.

use rstest::rstest;

use crate::common::{read, task_tag};

#[rstest]
#[case::plain("> [!todo]", "callout")]
#[case::custom("> [!callout_custom]", "callout_custom")]
#[case::labelled("> [!todo] callout_labelled", "callout_labelled")]
fn test_callout(#[case] header: &str, #[case] name: &str) {
	let content = format!(
		"# {name}\n\n{header}\n> - [ ] #task Task in '{name}'\n>     - [ ] #task Task indented in '{name}'\n\n```tasks\nnot done\npath includes {{{{query.file.path}}}}\n```\n"
	);
	let tasks = read(&content, &task_tag());

	assert_eq!(tasks.len(), 2);
	let [parent, child] = tasks.iter().collect::<Vec<_>>()[..] else { panic!("expected 2 tasks") };
	assert_eq!(parent.line(), 3);
	assert_eq!(child.parent(), Some(parent));
	assert_eq!(parent.original_markdown(), format!("> - [ ] #task Task in '{name}'"));
	assert_eq!(child.description(), format!("#task Task indented in '{name}'"));
}

#[test]
fn test_callout_hierarchy() {
	let content = "\
# callout

> [!todo]
> - [ ] #task Task in 'callout'
>     - [ ] #task Task indented in 'callout'

```tasks
not done
path includes {{query.file.path}}
```
";
	let tasks = read(content, &task_tag());
	insta::assert_snapshot!(tasks.tree().render_roots(), @"
	> - [ ] #task Task in 'callout' : Task
	    >     - [ ] #task Task indented in 'callout' : Task
	");
}

/// Four tasks under three levels of callout headers, rendered from the roots.
fn nested_callouts(headers: &str) -> String {
	let content = format!(
		"{headers} >>> Some stuff goes here\n >>> - [ ] #task Correction1\n >>> - [ ] #task Correction2\n >>> - [ ] #task Correction3\n >>> - [ ] #task Correction4\n\n```tasks\nnot done\n```\n"
	);
	let tasks = read(&content, &task_tag());
	assert_eq!(tasks.len(), 4);
	tasks.tree().render_roots()
}

#[test]
fn test_nested_callouts() {
	insta::assert_snapshot!(nested_callouts(" > [!Calendar]+\n >> [!Check]+\n >>> [!Attention]+\n"), @"
	>>> - [ ] #task Correction1 : Task
	>>> - [ ] #task Correction2 : Task
	>>> - [ ] #task Correction3 : Task
	>>> - [ ] #task Correction4 : Task
	");
}

#[test]
fn test_nested_callouts_with_titles() {
	insta::assert_snapshot!(nested_callouts(" > [!Calendar]+ MONTH\n >> [!Check]+ GROUP\n >>> [!Attention]+ Correction TITLE\n"), @"
	>>> - [ ] #task Correction1 : Task
	>>> - [ ] #task Correction2 : Task
	>>> - [ ] #task Correction3 : Task
	>>> - [ ] #task Correction4 : Task
	");
}

#[test]
fn test_code_block_tasks_are_ignored() {
	let content = "- [ ] #task real\n\n```md\n- [ ] #task inside a fence\n```\n";
	let tasks = read(content, &task_tag());
	assert_eq!(tasks.iter().map(|t| t.line()).collect::<Vec<_>>(), vec![0]);
}
