use rules_explorer::{Explorer, ExplorerBuilder, FileCategory};
use std::fs;
use tempfile::tempdir;
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".cursor/rules")).unwrap();
    fs::create_dir(dir.path().join(".claude")).unwrap();
    fs::write(dir.path().join(".cursor/rules/a.mdc"), "hello").unwrap();
    fs::write(dir.path().join("CLAUDE.md"), "world").unwrap();
    fs::write(dir.path().join(".claude/x.json"), "{}").unwrap();
    fs::write(dir.path().join("notes.txt"), "hello world").unwrap();
    let mut explorer = Explorer::new(ExplorerBuilder::new().root(dir.path()).build());
    explorer.load_files().unwrap();
    let paths: Vec<_> = explorer.all_files().iter().map(|f| f.path()).collect();
    assert_eq!(paths, vec![".claude/x.json", ".cursor/rules/a.mdc", "CLAUDE.md"]);
    let categories: Vec<_> = explorer.all_files().iter().map(|f| f.category()).collect();
    assert_eq!(
        categories,
        vec![
            FileCategory::SecondaryConfig,
            FileCategory::RuleFile,
            FileCategory::PrimaryConfig
        ]
    );
    let hello: Vec<_> = explorer.filter_files("hello").iter().map(|f| f.path()).collect();
    assert_eq!(hello, vec![".cursor/rules/a.mdc"]);
    assert_eq!(explorer.all_files()[1].content(), "hello");
    assert!(explorer.filter_files("notes").is_empty());
    assert!(explorer.filter_files("txt").is_empty());
    let json: Vec<_> = explorer.filter_files("json").iter().map(|f| f.path()).collect();
    assert_eq!(json, vec![".claude/x.json"]);
    assert_eq!(explorer.root(), Some(dir.path()));
}
