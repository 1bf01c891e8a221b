// tests/session_flow.rs
//! End-to-end runs of a session against in-memory collaborators.

use pretty_assertions::assert_eq;
use rofi_generic::{
    ActiveWindow, AppError, CandidateSet, ClipboardTool, Clipboarder, DeliveryMode, MenuLauncher,
    MenuRequest, MenuResponse, PickerConfig, RecentLimit, RecentStore, Separator, Session,
    SessionResult, StorePaths, TypeTool, Typer,
};
use std::cell::RefCell;
use std::time::Duration;

/// Answers every menu with a canned response and remembers the request.
struct ScriptedPicker {
    response: MenuResponse,
    seen: RefCell<Option<MenuRequest>>,
}

impl ScriptedPicker {
    fn new(status: i32, stdout: &str) -> Self {
        Self {
            response: MenuResponse {
                status,
                stdout: stdout.to_string(),
            },
            seen: RefCell::new(None),
        }
    }
}

impl MenuLauncher for ScriptedPicker {
    fn show(&self, request: &MenuRequest) -> rofi_generic::Result<MenuResponse> {
        *self.seen.borrow_mut() = Some(request.clone());
        Ok(self.response.clone())
    }
}

#[derive(Default)]
struct RecordingTyper {
    typed: RefCell<Vec<(String, ActiveWindow)>>,
    pastes: RefCell<usize>,
}

impl Typer for RecordingTyper {
    fn name(&self) -> &'static str {
        "recording"
    }
    fn active_window(&self) -> rofi_generic::Result<ActiveWindow> {
        Ok(ActiveWindow::new("0x2a"))
    }
    fn type_text(&self, text: &str, window: &ActiveWindow) -> rofi_generic::Result<()> {
        self.typed
            .borrow_mut()
            .push((text.to_string(), window.clone()));
        Ok(())
    }
    fn paste(&self, _window: &ActiveWindow) -> rofi_generic::Result<()> {
        *self.pastes.borrow_mut() += 1;
        Ok(())
    }
}

#[derive(Default)]
struct MemoryClipboard {
    content: RefCell<Option<String>>,
}

impl Clipboarder for MemoryClipboard {
    fn name(&self) -> &'static str {
        "memory"
    }
    fn read(&self) -> rofi_generic::Result<Option<String>> {
        Ok(self.content.borrow().clone())
    }
    fn copy(&self, text: &str) -> rofi_generic::Result<()> {
        *self.content.borrow_mut() = Some(text.to_string());
        Ok(())
    }
    fn clear(&self) -> rofi_generic::Result<()> {
        *self.content.borrow_mut() = None;
        Ok(())
    }
}

fn config(dir: &tempfile::TempDir, mode: DeliveryMode) -> PickerConfig {
    PickerConfig {
        input_files: Vec::new(),
        separator: Separator::new(" ").unwrap(),
        prompt: "😀 ".to_string(),
        rofi_args: vec!["-theme".to_string(), "dark".to_string()],
        max_recent: RecentLimit::new(10),
        mode,
        typer: TypeTool::Xdotool,
        clipboarder: ClipboardTool::Xsel,
        store_paths: StorePaths::under_data_home(dir.path()),
    }
}

fn candidates() -> CandidateSet {
    CandidateSet::from_lines(["😀 grinning face", "→ rightwards arrow"])
}

#[test]
fn accepted_line_is_typed_and_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir, DeliveryMode::Type);
    let store = RecentStore::new(config.store_paths.clone());
    let picker = ScriptedPicker::new(0, "→ rightwards arrow\n");
    let typer = RecordingTyper::default();
    let clipboard = MemoryClipboard::default();

    let result = Session::new(&picker, &typer, &clipboard, &store)
        .run(&config, candidates())
        .unwrap();

    assert!(matches!(result, SessionResult::Delivered { ref payload, .. } if payload.as_str() == "→"));
    assert_eq!(
        *typer.typed.borrow(),
        vec![("→".to_string(), ActiveWindow::new("0x2a"))]
    );
    assert_eq!(*clipboard.content.borrow(), None);
    assert_eq!(store.load(10).unwrap(), vec!["→"]);

    let request = picker.seen.borrow().clone().unwrap();
    assert_eq!(request.prompt, "😀 ");
    assert_eq!(request.candidates.len(), 2);
    assert_eq!(request.extra_args, vec!["-theme", "dark"]);
    assert_eq!(request.message.as_deref(), Some(""));
}

#[test]
fn cancel_delivers_nothing_and_keeps_store() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir, DeliveryMode::Type);
    let store = RecentStore::new(config.store_paths.clone());
    let picker = ScriptedPicker::new(1, "");
    let typer = RecordingTyper::default();
    let clipboard = MemoryClipboard::default();

    let result = Session::new(&picker, &typer, &clipboard, &store)
        .run(&config, candidates())
        .unwrap();

    assert_eq!(result, SessionResult::Aborted);
    assert!(typer.typed.borrow().is_empty());
    assert!(!store.paths().recent.exists());
}

#[test]
fn recent_key_delivers_stored_entry_and_moves_it_to_front() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir, DeliveryMode::Copy);
    let store = RecentStore::new(config.store_paths.clone());
    for text in ["α", "β", "γ"] {
        store.insert(text, 10).unwrap();
    }
    // Alt+2 reports status 11: the second most recent entry
    let picker = ScriptedPicker::new(11, "");
    let typer = RecordingTyper::default();
    let clipboard = MemoryClipboard::default();

    Session::new(&picker, &typer, &clipboard, &store)
        .run(&config, candidates())
        .unwrap();

    assert_eq!(clipboard.content.borrow().as_deref(), Some("β"));
    assert!(typer.typed.borrow().is_empty());
    assert_eq!(store.load(10).unwrap(), vec!["β", "γ", "α"]);

    let request = picker.seen.borrow().clone().unwrap();
    assert_eq!(request.message.as_deref(), Some("1: γ | 2: β | 3: α"));
}

#[test]
fn recent_key_beyond_history_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir, DeliveryMode::Type);
    let store = RecentStore::new(config.store_paths.clone());
    store.insert("only", 10).unwrap();
    let picker = ScriptedPicker::new(14, "");
    let typer = RecordingTyper::default();
    let clipboard = MemoryClipboard::default();

    let err = Session::new(&picker, &typer, &clipboard, &store)
        .run(&config, candidates())
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound { position: 5, .. }));
    assert!(typer.typed.borrow().is_empty());
}

#[test]
fn multi_select_output_is_rejected_before_delivery() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir, DeliveryMode::Type);
    let store = RecentStore::new(config.store_paths.clone());
    let picker = ScriptedPicker::new(0, "😀 grinning face\n→ rightwards arrow\n");
    let typer = RecordingTyper::default();
    let clipboard = MemoryClipboard::default();

    let err = Session::new(&picker, &typer, &clipboard, &store)
        .run(&config, candidates())
        .unwrap_err();

    assert!(matches!(err, AppError::ProtocolViolation(_)));
    assert!(typer.typed.borrow().is_empty());
    assert!(!store.paths().recent.exists());
}

#[test]
fn alternate_keys_are_accepted_as_no_ops() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir, DeliveryMode::Type);
    let store = RecentStore::new(config.store_paths.clone());
    let picker = ScriptedPicker::new(21, "😀 grinning face\n");
    let typer = RecordingTyper::default();
    let clipboard = MemoryClipboard::default();

    let result = Session::new(&picker, &typer, &clipboard, &store)
        .run(&config, candidates())
        .unwrap();

    assert_eq!(result, SessionResult::Ignored { status: 21 });
    assert!(typer.typed.borrow().is_empty());
    assert_eq!(*clipboard.content.borrow(), None);
}

#[test]
fn copy_paste_mode_restores_clipboard() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir, DeliveryMode::CopyPasteRestore);
    let store = RecentStore::new(config.store_paths.clone());
    let picker = ScriptedPicker::new(0, "😀 grinning face\n");
    let typer = RecordingTyper::default();
    let clipboard = MemoryClipboard::default();
    clipboard.copy("X").unwrap();

    Session::new(&picker, &typer, &clipboard, &store)
        .with_settle_delay(Duration::ZERO)
        .run(&config, candidates())
        .unwrap();

    assert_eq!(*typer.pastes.borrow(), 1);
    assert_eq!(clipboard.content.borrow().as_deref(), Some("X"));
    assert_eq!(store.load(10).unwrap(), vec!["😀"]);
}

#[test]
fn multi_word_payloads_are_recorded_and_recalled_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(&dir, DeliveryMode::Type);
    config.separator = Separator::new(" :: ").unwrap();
    let store = RecentStore::new(config.store_paths.clone());
    let lines = CandidateSet::from_lines([
        "git status :: show working tree",
        "echo  :: keeps its trailing space",
    ]);
    let typer = RecordingTyper::default();
    let clipboard = MemoryClipboard::default();

    for stdout in [
        "git status :: show working tree\n",
        "echo  :: keeps its trailing space\n",
    ] {
        let picker = ScriptedPicker::new(0, stdout);
        Session::new(&picker, &typer, &clipboard, &store)
            .run(&config, lines.clone())
            .unwrap();
    }
    assert_eq!(store.load(10).unwrap(), vec!["echo ", "git status"]);

    // Alt+1 then Alt+2 recall the entries by position
    let mut last_message = None;
    for status in [10, 11] {
        let picker = ScriptedPicker::new(status, "");
        Session::new(&picker, &typer, &clipboard, &store)
            .run(&config, lines.clone())
            .unwrap();
        last_message = picker.seen.borrow().clone().unwrap().message;
    }

    let typed: Vec<String> = typer.typed.borrow().iter().map(|(t, _)| t.clone()).collect();
    assert_eq!(typed, vec!["git status", "echo ", "echo ", "git status"]);
    assert_eq!(last_message.as_deref(), Some("1: echo  | 2: git status"));
    assert_eq!(store.load(10).unwrap(), vec!["git status", "echo "]);
}
