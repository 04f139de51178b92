// Changing the working directory is process-wide, so this file holds a
// single test.
use rules_explorer::Explorer;
use std::env;
use std::fs;
use tempfile::tempdir;
#[test]
fn default_root_is_the_working_directory() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".claude")).unwrap();
    fs::write(dir.path().join(".claude/agents.md"), "agents").unwrap();
    fs::write(dir.path().join("README.md"), "readme").unwrap();
    let previous = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let mut explorer = Explorer::default();
    let result = explorer.load_files();
    env::set_current_dir(previous).unwrap();
    result.unwrap();
    let paths: Vec<_> = explorer.all_files().iter().map(|f| f.path()).collect();
    assert_eq!(paths, vec![".claude/agents.md"]);
}
