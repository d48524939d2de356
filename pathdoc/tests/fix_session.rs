//! Integration tests for the fix session: the editing operations and the
//! scripted interactive loop.

mod common;

use common::{path_of, PathFixture};
use pathdoc::audit::MemorySink;
use pathdoc::output::display_path;
use pathdoc::session::{FixSession, LinePrompter};
use pathdoc::{Error, ShellType};

fn run_script(raw: &str, script: &str, log: &mut MemorySink) -> (String, String) {
    let session = FixSession::new(raw, log).with_shell(ShellType::Bash);
    let mut prompter = LinePrompter::new(script.as_bytes(), Vec::new());
    let outcome = session.run(&mut prompter).unwrap();
    let transcript = String::from_utf8(prompter.into_output()).unwrap();
    (outcome.proposed, transcript)
}

#[test]
fn stale_entry_is_rejected() {
    let fx = PathFixture::new();
    let (a, b, c) = (fx.missing("a"), fx.missing("b"), fx.missing("c"));
    let mut log = MemorySink::new();
    let mut session = FixSession::new(&path_of(&[&a, &b, &c]), &mut log);

    let first = session.locate(1).unwrap();
    let second = session.locate(2).unwrap();
    session.remove(&first).unwrap();

    // `second` now describes a slot that holds `c`
    let err = session.remove(&second).unwrap_err();
    assert!(matches!(err, Error::StaleEntry { index: 2, .. }));
    assert_eq!(session.parts(), [b.clone(), c.clone()]);

    drop(session);
    assert_eq!(log.tags(), vec!["REMOVE", "STALE"]);
}

#[test]
fn locating_a_healthy_entry_fails() {
    let fx = PathFixture::new();
    let good = fx.dir("bin");
    let mut log = MemorySink::new();
    let session = FixSession::new(&path_of(&[&good]), &mut log);

    assert!(matches!(session.locate(1), Err(Error::EntryNotBroken { index: 1 })));
    assert!(matches!(session.locate(2), Err(Error::EntryNotFound { index: 2 })));
}

#[test]
fn replace_manual_keeps_typed_text() {
    let fx = PathFixture::new();
    let replacement = fx.dir("new/bin");
    let missing = fx.missing("bin");
    let mut log = MemorySink::new();
    let mut session = FixSession::new(&missing, &mut log);

    let entry = session.locate(1).unwrap();
    let resolved = session.replace_manual(&entry, &replacement, false).unwrap();

    assert_eq!(resolved.to_string_lossy(), replacement);
    assert_eq!(session.proposed(), replacement);
    assert_eq!(session.preview().broken, 0);
}

#[test]
fn replace_manual_refuses_missing_target_unless_asked() {
    let fx = PathFixture::new();
    let missing = fx.missing("bin");
    let target = fx.missing("target/bin");
    let mut log = MemorySink::new();
    let mut session = FixSession::new(&missing, &mut log);

    let entry = session.locate(1).unwrap();
    assert!(matches!(
        session.replace_manual(&entry, &target, false),
        Err(Error::NotADirectory { .. })
    ));
    assert_eq!(session.proposed(), missing);

    session.replace_manual(&entry, &target, true).unwrap();
    assert!(std::path::Path::new(&target).is_dir());

    drop(session);
    assert_eq!(log.tags(), vec!["REPLACE+MKDIR(manual)"]);
}

#[test]
fn create_directory_fails_under_a_file() {
    let fx = PathFixture::new();
    let file = fx.file("plain");
    let below_file = format!("{file}/bin");
    let mut log = MemorySink::new();
    let mut session = FixSession::new(&below_file, &mut log);

    let entry = session.locate(1).unwrap();
    let err = session.create_directory(&entry).unwrap_err();
    assert!(matches!(err, Error::DirectoryCreation { .. }));
    assert_eq!(session.proposed(), below_file);

    drop(session);
    assert_eq!(log.tags(), vec!["MKDIR FAILED"]);
}

#[test]
fn create_directory_rejects_variable_expanding_to_nothing() {
    std::env::set_var("PATHDOC_TEST_BLANK_DIR", "");
    let mut log = MemorySink::new();
    let mut session = FixSession::new("$PATHDOC_TEST_BLANK_DIR", &mut log);

    let entry = session.locate(1).unwrap();
    assert!(entry.is_empty_segment());
    assert_eq!(display_path(&entry), "(empty segment)");

    let err = session.create_directory(&entry).unwrap_err();
    assert!(matches!(err, Error::InvalidPath { .. }));
    assert_eq!(session.preview().broken, 1);

    drop(session);
    assert_eq!(log.tags(), vec!["PREVIEW"]);
}

#[test]
fn scripted_session_remove_and_quit() {
    let fx = PathFixture::new();
    let good = fx.dir("bin");
    let missing = fx.missing("bin");
    let mut log = MemorySink::new();

    let (proposed, transcript) = run_script(&path_of(&[&good, &missing]), "2\n2\nq\n", &mut log);

    assert_eq!(proposed, good);
    assert!(transcript.contains("Broken PATH entries:"));
    assert!(transcript.contains(&format!("-> Removed: {missing}")));
    assert_eq!(
        log.tags(),
        vec!["SESSION", "REMOVE", "QUIT", "FINISHED"]
    );
}

#[test]
fn scripted_guided_pass_offers_each_entry_once() {
    let fx = PathFixture::new();
    let (a, b) = (fx.missing("a"), fx.missing("b"));
    let mut log = MemorySink::new();

    // Keep both in guided mode; the pass must end on its own
    let (proposed, transcript) = run_script(&path_of(&[&a, &b]), "a\n1\n1\nq\n", &mut log);

    assert_eq!(proposed, path_of(&[&a, &b]));
    assert!(transcript.contains("Fixing entry #01:"));
    assert!(transcript.contains("Fixing entry #02:"));
    assert!(transcript.contains("Guided pass finished."));
    assert_eq!(
        log.tags(),
        vec!["SESSION", "KEEP", "KEEP", "QUIT", "FINISHED"]
    );
}

#[test]
fn scripted_suggestion_pick() {
    let fx = PathFixture::new();
    let current = fx.dir("tool/1.3/bin");
    let stale = fx.root().join("tool/1.2/bin").to_string_lossy().into_owned();
    let mut log = MemorySink::new();

    let (proposed, transcript) = run_script(&stale, "1\n4\n1\nq\n", &mut log);

    assert_eq!(proposed, current);
    assert!(transcript.contains("Suggestions:"));
    assert!(transcript.contains(&format!("-> Replaced with suggestion: {current}")));
    assert!(log.tags().contains(&"REPLACE(suggested)"));
}

#[test]
fn scripted_empty_input_keeps_original() {
    let fx = PathFixture::new();
    let missing = fx.missing("bin");
    let mut log = MemorySink::new();

    let (proposed, transcript) = run_script(&missing, "", &mut log);

    assert_eq!(proposed, missing);
    assert!(transcript.contains("Fix> "));
}

#[test]
fn scripted_back_from_entry_menu() {
    let fx = PathFixture::new();
    let missing = fx.missing("bin");
    let mut log = MemorySink::new();

    let (proposed, transcript) = run_script(&missing, "1\nb\nq\n", &mut log);

    assert_eq!(proposed, missing);
    assert_eq!(transcript.matches("Fixing entry #01:").count(), 1);
    assert_eq!(transcript.matches("Fix> ").count(), 2);
    assert_eq!(log.tags(), vec!["SESSION", "QUIT", "FINISHED"]);
}

#[test]
fn scripted_manual_replace_creates_on_confirm() {
    let fx = PathFixture::new();
    let missing = fx.missing("bin");
    let target = fx.missing("made/bin");
    let mut log = MemorySink::new();

    let script = format!("1\n3\n{target}\ny\nq\n");
    let (proposed, transcript) = run_script(&missing, &script, &mut log);

    assert_eq!(proposed, target);
    assert!(std::path::Path::new(&target).is_dir());
    assert!(transcript.contains(&format!("Does not exist: {target}")));
    assert!(transcript.contains("Create it? [y/N]: "));
    assert!(transcript.contains(&format!("-> Created and replaced with: {target}")));
    assert_eq!(
        log.tags(),
        vec!["SESSION", "REPLACE+MKDIR(manual)", "QUIT", "FINISHED"]
    );
}

#[test]
fn scripted_manual_replace_declined_asks_again() {
    let fx = PathFixture::new();
    let missing = fx.missing("bin");
    let target = fx.missing("made/bin");
    let mut log = MemorySink::new();

    let script = format!("1\n3\n{target}\nn\nb\nq\n");
    let (proposed, transcript) = run_script(&missing, &script, &mut log);

    assert_eq!(proposed, missing);
    assert!(!std::path::Path::new(&target).exists());
    assert_eq!(
        transcript
            .matches("Replacement directory (or 'b' to back): ")
            .count(),
        2
    );
    assert_eq!(log.tags(), vec!["SESSION", "QUIT", "FINISHED"]);
}

#[test]
fn scripted_guided_pass_skips_entry_after_invalid_action() {
    let fx = PathFixture::new();
    let (a, b) = (fx.missing("a"), fx.missing("b"));
    let mut log = MemorySink::new();

    // An unknown action leaves #01 alone; #02 is removed
    let (proposed, transcript) = run_script(&path_of(&[&a, &b]), "a\nz\n2\nq\n", &mut log);

    assert_eq!(proposed, a);
    assert!(transcript.contains("Invalid action."));
    assert_eq!(transcript.matches("Fixing entry #01:").count(), 1);
    assert!(transcript.contains(&format!("-> Removed: {b}")));
    assert!(transcript.contains("Guided pass finished."));
    assert_eq!(log.tags(), vec!["SESSION", "REMOVE", "QUIT", "FINISHED"]);
}
