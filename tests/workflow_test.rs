//! End-to-end pipeline tests against a recording command runner.

use ardent::config::{required_packages, Settings, DEPENDENCIES};
use ardent::fetch::write_marker;
use ardent::shell::RecordingRunner;
use ardent::ui::MockUI;
use ardent::workflow::{run_with_env, RunContext, Stage, StageSelection};
use ardent::ArdentError;
use std::fs;
use tempfile::TempDir;

fn mingw64(key: &str) -> Option<String> {
    (key == "MSYSTEM").then(|| "MINGW64".to_string())
}

fn position(lines: &[String], prefix: &str) -> usize {
    lines
        .iter()
        .position(|l| l.starts_with(prefix))
        .unwrap_or_else(|| panic!("no command starting with {prefix:?} in {lines:#?}"))
}

#[test]
fn first_run_does_everything_in_order() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::default();
    let mut runner = RecordingRunner::new();
    let mut ui = MockUI::new();

    let summary = {
        let mut ctx = RunContext::new(temp.path(), &settings, &mut runner, &mut ui);
        run_with_env(&mut ctx, &StageSelection::all(), mingw64).unwrap()
    };

    assert_eq!(summary.stages_run, Stage::ALL);
    let lines = runner.command_lines();

    // One install call carrying the whole required set.
    let installs: Vec<_> = lines.iter().filter(|l| l.starts_with("pacman -S ")).collect();
    assert_eq!(installs.len(), 1);
    for package in required_packages() {
        assert!(installs[0].split(' ').any(|arg| arg == package));
    }

    // Every repository cloned, in manifest order.
    let clones: Vec<_> = lines
        .iter()
        .filter(|l| l.starts_with("git clone"))
        .cloned()
        .collect();
    let expected: Vec<_> = DEPENDENCIES
        .iter()
        .map(|d| format!("git clone --recurse-submodules {}", d.url))
        .collect();
    assert_eq!(clones, expected);

    // Patches follow their own clone, in declaration order.
    let patches: Vec<_> = lines
        .iter()
        .filter(|l| l.starts_with("patch "))
        .cloned()
        .collect();
    assert_eq!(
        patches,
        [
            "patch -i patches/aubio_priv.h.patch -p0",
            "patch -i patches/lrdf_types.h.patch -p0",
            "patch -i patches/sort_r.h.patch -p0",
            "patch -i patches/win_in_gtk2.cpp.patch -p0",
            "patch -i patches/ardour-wscript.patch -p0",
            "patch -i patches/main.cc.patch -p0",
            "patch -i patches/pbd.cc.patch -p0",
        ]
    );
    assert!(
        position(&lines, "git clone --recurse-submodules https://github.com/aubio/aubio")
            < position(&lines, "patch -i patches/aubio_priv.h.patch")
    );

    // Stage order: packages, fetch, libraries, application.
    let install = position(&lines, "pacman -S ");
    let last_patch = position(&lines, "patch -i patches/pbd.cc.patch");
    let first_build = position(&lines, "python3 waf configure build install");
    let aubio_build = position(&lines, "python3 ../ardour/waf");
    let app_build = lines.len() - 1;
    assert!(install < position(&lines, "git clone"));
    assert!(last_patch < first_build);
    assert!(first_build < aubio_build);
    assert!(aubio_build < app_build);
    assert!(lines[app_build].contains("--windows-vst"));
    assert!(lines[app_build].contains("--configdir=/share"));

    assert_eq!(summary.clone_count(), DEPENDENCIES.len());
    assert_eq!(summary.patch_count(), 7);
    assert!(ui.has_status("Fetching libraries..."));
    assert!(ui.has_status("Building Ardour..."));
}

#[test]
fn second_run_only_rebuilds() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::default();
    let deps = settings.deps_path(temp.path());
    for dep in DEPENDENCIES {
        fs::create_dir_all(deps.join(dep.dir_name())).unwrap();
        write_marker(&deps, dep).unwrap();
    }
    fs::create_dir_all(deps.join("lv2kit").join("build")).unwrap();

    let installed: Vec<_> = required_packages().into_iter().collect();
    let mut runner = RecordingRunner::new();
    runner.respond("pacman -Qq", &installed.join("\n"));
    let mut ui = MockUI::new();

    let summary = {
        let mut ctx = RunContext::new(temp.path(), &settings, &mut runner, &mut ui);
        run_with_env(&mut ctx, &StageSelection::all(), mingw64).unwrap()
    };

    let lines = runner.command_lines();
    assert!(!lines.iter().any(|l| l.starts_with("git ")));
    assert!(!lines.iter().any(|l| l.starts_with("patch ")));
    assert!(!lines.iter().any(|l| l.starts_with("pacman -S ")));
    assert!(!lines.iter().any(|l| l.starts_with("meson setup")));
    assert!(lines.iter().any(|l| l.starts_with("meson compile")));
    assert!(lines.last().unwrap().contains("--windows-vst"));

    assert_eq!(summary.clone_count(), 0);
    assert!(ui.warnings().is_empty());
    assert!(ui.has_status("All system dependencies have already been installed."));
}

#[test]
fn failing_command_stops_the_run_with_its_code() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::default();
    let mut runner = RecordingRunner::new();
    runner.fail("make install", 2);
    let mut ui = MockUI::new();

    let err = {
        let mut ctx = RunContext::new(temp.path(), &settings, &mut runner, &mut ui);
        run_with_env(&mut ctx, &StageSelection::all(), mingw64).unwrap_err()
    };

    match &err {
        ArdentError::CommandFailed { command, code } => {
            assert_eq!(command, "make install");
            assert_eq!(*code, Some(2));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    let msg = err.to_string();
    assert!(msg.contains("exit code 2"));
    assert!(msg.contains("make install"));

    // liblo's make install failed; nothing after it ran.
    assert_eq!(runner.command_lines().last().unwrap(), "make install");
    assert!(runner.invocations_of("meson").is_empty());
    assert!(!ui.has_status("Building Ardour..."));
}

#[test]
fn unverified_checkout_is_skipped_with_warning() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::default();
    fs::create_dir_all(settings.checkout_path(temp.path(), "raptor")).unwrap();
    let mut runner = RecordingRunner::new();
    let mut ui = MockUI::new();

    {
        let mut ctx = RunContext::new(temp.path(), &settings, &mut runner, &mut ui);
        run_with_env(&mut ctx, &StageSelection::only(&[Stage::Fetch]), mingw64).unwrap();
    }

    let lines = runner.command_lines();
    assert!(!lines.iter().any(|l| l.ends_with("/raptor")));
    assert!(!lines.iter().any(|l| l.contains("sort_r.h.patch")));
    assert!(ui.has_warning("raptor"));
    assert!(ui.has_warning("delete it"));
}
