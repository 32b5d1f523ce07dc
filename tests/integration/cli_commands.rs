use pindo::config::PindoConfig;
use pindo::tooling::cli::{CliContext, Commands};
use tempfile::TempDir;

fn context(dir: &TempDir) -> CliContext {
    CliContext::from_config(PindoConfig::default(), Some(dir.path().join("store"))).unwrap()
}

#[test]
fn commands_persist_between_invocations() {
    let dir = TempDir::new().unwrap();

    {
        let mut ctx = context(&dir);
        let output = ctx
            .execute(&Commands::Mkdir {
                parent: "/".to_string(),
                name: "Music".to_string(),
            })
            .unwrap();
        assert!(output.success);

        let output = ctx
            .execute(&Commands::Touch {
                parent: "/Music".to_string(),
                name: "song".to_string(),
                ext: "mp3".to_string(),
            })
            .unwrap();
        assert!(output.success);
    }

    let mut ctx = context(&dir);
    let tree = ctx.execute(&Commands::Tree).unwrap();
    assert!(tree.text.contains("  Music/\n    song.mp3"));
}

#[test]
fn failed_command_reports_error_and_changes_nothing() {
    let dir = TempDir::new().unwrap();

    {
        let mut ctx = context(&dir);
        let output = ctx
            .execute(&Commands::RenameFolder {
                path: "/Projects".to_string(),
                name: "Documents".to_string(),
            })
            .unwrap();
        assert!(!output.success);
        assert!(output.text.contains("Name already exists"));
    }

    let mut ctx = context(&dir);
    let export = ctx.execute(&Commands::Export).unwrap();
    let snapshot: serde_json::Value = serde_json::from_str(&export.text).unwrap();
    assert_eq!(snapshot["nodes"].as_object().unwrap().len(), 7);
}

#[test]
fn ls_json_lists_children_in_order() {
    let dir = TempDir::new().unwrap();
    let mut ctx = context(&dir);
    let output = ctx
        .execute(&Commands::Ls {
            path: "/".to_string(),
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output.text).unwrap();
    let names: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Documents", "Projects"]);
    assert_eq!(parsed[0]["path"], "/Documents");
}

#[test]
fn rm_file_with_yes() {
    let dir = TempDir::new().unwrap();
    let mut ctx = context(&dir);
    let output = ctx
        .execute(&Commands::Rm {
            path: "/Projects/app.js".to_string(),
            yes: true,
        })
        .unwrap();
    assert!(output.success);
    assert!(output.text.contains("\"app.js\" deleted successfully"));

    let ls = ctx
        .execute(&Commands::Ls {
            path: "/Projects".to_string(),
            format: "text".to_string(),
        })
        .unwrap();
    assert_eq!(ls.text, "(empty)");
}
