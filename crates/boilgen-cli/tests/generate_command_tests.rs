use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use boilgen_cli::commands::{GenerateCommand, GlobalOptions, InitCommand};
use boilgen_cli::prompt::{Notifier, Prompter, Severity};
use boilgen_cli::{CliError, CliResult};
use chrono::{DateTime, FixedOffset};
use tempfile::TempDir;

const CATALOG: &str = r#"{
  "Component": {
    "default": {
      "$TM_FILENAME_BASE.tsx": ["export const $TM_FILENAME_BASE = 1;"],
      "index.ts": ["export * from './$TM_FILENAME_BASE';"]
    },
    "broken": {
      "bad|name.ts": ["x"],
      "ok.ts": ["ok"]
    }
  },
  "Hook": {
    "basic": { "use$TM_FILENAME_BASE.ts": ["// $CURRENT_YEAR"] }
  }
}"#;

/// Answers prompts from a fixed script; `None` entries cancel
#[derive(Default)]
struct ScriptedPrompter {
    answers: VecDeque<Option<String>>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    fn new(answers: &[Option<&str>]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.map(str::to_string)).collect(),
            asked: Vec::new(),
        }
    }

    fn next(&mut self, question: &str) -> Option<String> {
        self.asked.push(question.to_string());
        self.answers.pop_front().flatten()
    }
}

impl Prompter for ScriptedPrompter {
    fn pick(&mut self, placeholder: &str, options: &[&str]) -> CliResult<Option<String>> {
        let answer = self.next(placeholder);
        if let Some(choice) = &answer {
            assert!(options.contains(&choice.as_str()), "{} not offered", choice);
        }
        Ok(answer)
    }

    fn input(&mut self, prompt: &str, _placeholder: &str) -> CliResult<Option<String>> {
        Ok(self.next(prompt))
    }
}

#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<(Severity, String)>>,
}

impl RecordingNotifier {
    fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

fn now() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2024-03-05T07:08:09+02:00").unwrap()
}

fn workspace_with_catalog() -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".boilgen");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("boilgen.templates.json"), CATALOG).unwrap();
    temp
}

fn options(workspace: &Path) -> GlobalOptions {
    GlobalOptions {
        workspace: Some(workspace.to_path_buf()),
        templates: None,
        dry_run: false,
    }
}

#[test]
fn test_generate_from_prompts() {
    let ws = workspace_with_catalog();
    let mut prompter = ScriptedPrompter::new(&[Some("Component"), Some("default"), Some("Button")]);
    let notifier = RecordingNotifier::default();

    GenerateCommand::new(options(ws.path()))
        .run(&mut prompter, &notifier, now())
        .unwrap();

    assert_eq!(
        prompter.asked,
        vec![
            "What do you want to generate? (e.g. Component, Page, Hook)",
            "Choose a Component template",
            "Enter Component name",
        ]
    );
    assert_eq!(
        fs::read_to_string(ws.path().join("Button/Button.tsx")).unwrap(),
        "export const Button = 1;"
    );
    assert_eq!(
        fs::read_to_string(ws.path().join("Button/index.ts")).unwrap(),
        "export * from './Button';"
    );
    assert_eq!(
        notifier.messages(),
        vec![(
            Severity::Success,
            "Component 'Button' created using 'default' template.".to_string()
        )]
    );
}

#[test]
fn test_generate_from_flags_skips_prompts() {
    let ws = workspace_with_catalog();
    let mut prompter = ScriptedPrompter::default();
    let notifier = RecordingNotifier::default();

    GenerateCommand::new(options(ws.path()))
        .with_entity_type(Some("Hook".to_string()))
        .with_template(Some("basic".to_string()))
        .with_name(Some("Auth".to_string()))
        .with_dir(Some("src/hooks".into()))
        .run(&mut prompter, &notifier, now())
        .unwrap();

    assert!(prompter.asked.is_empty());
    assert_eq!(
        fs::read_to_string(ws.path().join("src/hooks/Auth/useAuth.ts")).unwrap(),
        "// 2024"
    );
}

#[test]
fn test_cancelled_prompt_writes_nothing() {
    for answers in [
        vec![None],
        vec![Some("Component"), None],
        vec![Some("Component"), Some("default"), None],
    ] {
        let ws = workspace_with_catalog();
        let mut prompter = ScriptedPrompter::new(&answers);
        let notifier = RecordingNotifier::default();

        GenerateCommand::new(options(ws.path()))
            .run(&mut prompter, &notifier, now())
            .unwrap();

        assert!(notifier.messages().is_empty());
        let entries: Vec<_> = fs::read_dir(ws.path()).unwrap().collect();
        assert_eq!(entries.len(), 1, "only .boilgen should exist");
    }
}

#[test]
fn test_existing_target_warns_and_keeps_content() {
    let ws = workspace_with_catalog();
    fs::create_dir_all(ws.path().join("Button")).unwrap();
    fs::write(ws.path().join("Button/keep.txt"), "mine").unwrap();

    let mut prompter = ScriptedPrompter::new(&[Some("Component"), Some("default"), Some("Button")]);
    let notifier = RecordingNotifier::default();

    GenerateCommand::new(options(ws.path()))
        .run(&mut prompter, &notifier, now())
        .unwrap();

    assert_eq!(
        notifier.messages(),
        vec![(
            Severity::Warning,
            "Component 'Button' already exists.".to_string()
        )]
    );
    assert!(!ws.path().join("Button/Button.tsx").exists());
    assert_eq!(fs::read_to_string(ws.path().join("Button/keep.txt")).unwrap(), "mine");
}

#[test]
fn test_invalid_path_is_reported_and_others_written() {
    let ws = workspace_with_catalog();
    let mut prompter = ScriptedPrompter::new(&[Some("Component"), Some("broken"), Some("Card")]);
    let notifier = RecordingNotifier::default();

    GenerateCommand::new(options(ws.path()))
        .run(&mut prompter, &notifier, now())
        .unwrap();

    let messages = notifier.messages();
    assert_eq!(
        messages[0],
        (
            Severity::Error,
            "Invalid file path in template: bad|name.ts".to_string()
        )
    );
    assert_eq!(messages[1].0, Severity::Success);
    assert_eq!(fs::read_to_string(ws.path().join("Card/ok.ts")).unwrap(), "ok");
}

#[test]
fn test_missing_default_catalog_is_seeded_and_run_stops() {
    let ws = TempDir::new().unwrap();
    let mut prompter = ScriptedPrompter::new(&[Some("Component")]);
    let notifier = RecordingNotifier::default();

    GenerateCommand::new(options(ws.path()))
        .run(&mut prompter, &notifier, now())
        .unwrap();

    assert!(prompter.asked.is_empty());
    assert!(ws.path().join(".boilgen/boilgen.templates.json").exists());
    assert_eq!(
        notifier.messages(),
        vec![(
            Severity::Warning,
            "No templates found. A default template file has been created in .boilgen."
                .to_string()
        )]
    );
}

#[test]
fn test_missing_custom_catalog_is_an_error() {
    let ws = TempDir::new().unwrap();
    let mut prompter = ScriptedPrompter::default();
    let notifier = RecordingNotifier::default();
    let mut opts = options(ws.path());
    opts.templates = Some("tools/templates.json".to_string());

    let err = GenerateCommand::new(opts)
        .run(&mut prompter, &notifier, now())
        .unwrap_err();

    assert!(matches!(err, CliError::TemplatesNotFound { .. }));
    assert!(err.user_message().ends_with("tools/templates.json"));
    assert!(!ws.path().join("tools").exists());
}

#[test]
fn test_invalid_catalog_json() {
    let ws = TempDir::new().unwrap();
    fs::create_dir_all(ws.path().join(".boilgen")).unwrap();
    fs::write(ws.path().join(".boilgen/boilgen.templates.json"), "{ nope").unwrap();

    let mut prompter = ScriptedPrompter::default();
    let notifier = RecordingNotifier::default();
    let err = GenerateCommand::new(options(ws.path()))
        .run(&mut prompter, &notifier, now())
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid JSON in templates.");
}

#[test]
fn test_unknown_entity_type_flag() {
    let ws = workspace_with_catalog();
    let mut prompter = ScriptedPrompter::default();
    let notifier = RecordingNotifier::default();

    let err = GenerateCommand::new(options(ws.path()))
        .with_entity_type(Some("Page".to_string()))
        .run(&mut prompter, &notifier, now())
        .unwrap_err();

    assert!(err.user_message().contains("Entity type not found in catalog: Page"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let ws = workspace_with_catalog();
    let mut prompter = ScriptedPrompter::new(&[Some("Component"), Some("default"), Some("Button")]);
    let notifier = RecordingNotifier::default();
    let mut opts = options(ws.path());
    opts.dry_run = true;

    GenerateCommand::new(opts)
        .run(&mut prompter, &notifier, now())
        .unwrap();

    assert!(!ws.path().join("Button").exists());
    let messages = notifier.messages();
    assert_eq!(messages.len(), 3);
    assert!(messages[0].1.starts_with("Would create "));
    assert!(messages[0].1.ends_with("Button.tsx"));
    assert_eq!(
        messages[2].1,
        "Dry run: Component 'Button' would be created using 'default' template."
    );
}

#[test]
fn test_missing_workspace_is_an_error() {
    let ws = TempDir::new().unwrap();
    let mut prompter = ScriptedPrompter::default();
    let notifier = RecordingNotifier::default();

    let err = GenerateCommand::new(options(&ws.path().join("absent")))
        .run(&mut prompter, &notifier, now())
        .unwrap_err();

    assert_eq!(err.to_string(), "No workspace folder open");
}

#[test]
fn test_init_writes_catalog_once() {
    let ws = TempDir::new().unwrap();
    let notifier = RecordingNotifier::default();
    let path = ws.path().join(".boilgen/boilgen.templates.json");

    InitCommand::new(options(ws.path())).run(&notifier).unwrap();
    assert!(path.exists());
    assert_eq!(notifier.messages()[0].0, Severity::Success);

    fs::write(&path, "{}").unwrap();
    InitCommand::new(options(ws.path())).run(&notifier).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    assert_eq!(notifier.messages()[1].0, Severity::Warning);

    InitCommand::new(options(ws.path()))
        .with_force(true)
        .run(&notifier)
        .unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("Component"));
}

#[test]
fn test_init_dry_run() {
    let ws = TempDir::new().unwrap();
    let notifier = RecordingNotifier::default();
    let mut opts = options(ws.path());
    opts.dry_run = true;

    InitCommand::new(opts).run(&notifier).unwrap();
    assert!(!ws.path().join(".boilgen").exists());
    assert_eq!(notifier.messages()[0].0, Severity::Info);
}
