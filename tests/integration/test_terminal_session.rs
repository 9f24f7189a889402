//! Integration Tests for a Terminal Session
//!
//! Walks a terminal through open, commands, unlock and the deferred close.

use folio::config::TerminalConfig;
use folio::terminal::input::KONAMI_SEQUENCE;
use folio::terminal::{DeferredAction, Terminal, ViewState, UNLOCK_BANNER};
use std::time::{Duration, Instant};

#[test]
fn test_full_session() {
    let start = Instant::now();
    let mut terminal = Terminal::default();
    assert_eq!(terminal.view_state(), ViewState::Closed);

    for key in KONAMI_SEQUENCE {
        terminal.key_down(key);
    }
    assert_eq!(terminal.view_state(), ViewState::Open);
    assert_eq!(terminal.transcript().lines(), UNLOCK_BANNER);

    terminal.submit("help", start);
    terminal.submit("whoami", start);
    assert_eq!(terminal.transcript().len(), 6);

    terminal.submit("clear", start);
    assert_eq!(terminal.transcript().len(), 1);

    terminal.submit("exit", start);
    assert_eq!(terminal.transcript().len(), 3);
    assert!(terminal.is_open());
    assert_eq!(
        terminal.next_deadline(),
        Some(start + Duration::from_millis(1500))
    );

    let fired = terminal.tick(start + Duration::from_secs(2));
    assert_eq!(fired, vec![DeferredAction::Close]);
    assert_eq!(terminal.view_state(), ViewState::Closed);
    assert!(terminal.next_deadline().is_none());
}

#[test]
fn test_configured_close_delay() {
    let config = TerminalConfig {
        exit_close_delay_ms: 200,
        ..TerminalConfig::default()
    };
    let start = Instant::now();
    let mut terminal = Terminal::new(&config);
    terminal.open();
    terminal.submit("EXIT", start);

    assert!(terminal.tick(start + Duration::from_millis(199)).is_empty());
    assert_eq!(terminal.tick(start + Duration::from_millis(200)).len(), 1);
    assert!(!terminal.is_open());
}

#[test]
fn test_commands_work_while_closed() {
    let mut terminal = Terminal::default();
    let outcome = terminal.submit("about", Instant::now());
    assert!(outcome.recognized);
    assert!(!terminal.is_open());
}

#[test]
fn test_unlock_while_open_keeps_state_and_appends_banner() {
    let mut terminal = Terminal::default();
    terminal.open();
    terminal.submit("meme", Instant::now());

    for key in KONAMI_SEQUENCE {
        terminal.key_down(key);
    }
    assert!(terminal.is_open());
    assert_eq!(terminal.transcript().since(2), UNLOCK_BANNER);
}

#[test]
fn test_exit_then_reopen_before_deadline() {
    let start = Instant::now();
    let mut terminal = Terminal::default();
    terminal.open();
    terminal.submit("exit", start);

    // closing and reopening drops the pending auto-close
    terminal.close();
    terminal.open();
    assert!(terminal.tick(start + Duration::from_secs(10)).is_empty());
    assert!(terminal.is_open());
}
