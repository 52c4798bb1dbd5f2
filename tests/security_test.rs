/// Security-focused integration tests
///
/// These tests verify security boundaries: terminal injection, symlinks, resource limits
mod common;

use std::fs;
use std::time::Instant;

use chat_export_parser::utils::{discover_exports, read_export};
use chat_export_parser::{parse_whatsapp_chat, render_transcript};
use common::{ExportBuilder, ExportDir};

#[test]
fn test_security_escape_sequences_not_rendered() {
    let export = ExportBuilder::android()
        .message("\x1b]0;pwned\x07Mallory", "\x1b[2J\x1b[Hcleared your screen")
        .message("Mallory", "ring\x07ring")
        .build();

    let chat = parse_whatsapp_chat(&export).unwrap();
    let rendered = render_transcript(&chat, 80);

    assert!(!rendered.contains('\x1b'), "escape sequences must be stripped");
    assert!(!rendered.contains('\x07'), "bell must be stripped");
    assert!(rendered.contains("cleared your screen"));
    assert!(rendered.contains("ringring"));
}

#[test]
fn test_security_oversized_export_rejected() {
    let dir = ExportDir::new();
    let path = dir.path().join("huge.txt");
    fs::write(&path, vec![b'a'; 10 * 1024 * 1024 + 1]).unwrap();

    let err = read_export(&path).unwrap_err();
    assert!(err.to_string().contains("too large"));
}

#[test]
#[cfg(unix)]
fn test_security_symlinks_not_followed_during_discovery() {
    use std::os::unix::fs::symlink;

    let outside = ExportDir::new();
    let secret = outside.write("secret.txt", "12/25/23, 8:30 PM - Alice: private");

    let exports = ExportDir::new();
    exports.write("real.txt", "12/25/23, 8:30 PM - Bob: public");
    symlink(&secret, exports.path().join("link.txt")).unwrap();
    symlink(outside.path(), exports.path().join("linked_dir")).unwrap();

    let found = discover_exports(&[exports.path().to_path_buf()]).unwrap();
    assert_eq!(found.len(), 1, "only the regular file should be discovered");
    assert!(found[0].ends_with("real.txt"));
}

#[test]
fn test_security_pathological_line_is_linear() {
    // Many colons and date-like fragments in one line must not blow up matching
    let mut line = String::from("12/25/23, 8:30 PM - ");
    line.push_str(&"a:b 1/2/3, 4:56 ".repeat(20_000));
    let export = format!("12/25/23, 8:29 PM - Alice: start\n{}", line);

    let started = Instant::now();
    let chat = parse_whatsapp_chat(&export).unwrap();
    assert!(started.elapsed().as_secs() < 5);
    assert_eq!(chat.messages.len(), 1);
}

#[test]
fn test_security_invalid_utf8_rejected() {
    let dir = ExportDir::new();
    let path = dir.path().join("binary.txt");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

    assert!(read_export(&path).is_err());
}
