//! End-to-end tests over realistic ssh_config files.

use sshconfig_core::document::{Ast, Document, DocumentError};
use sshconfig_core::matching::MatchConfig;
use sshconfig_core::parse::{Line, parse_document, parse_line_at};
use sshconfig_core::validate::validate_document;

const USER_CONFIG: &str = "\
# ~/.ssh/config
Include ~/.ssh/config.d/*

AddKeysToAgent yes
ServerAliveInterval=60

# Work
Host bastion bastion.corp.example.net
\tHostName 10.0.0.5
\tUser ops
\tIdentityFile \"~/.ssh/My Keys/work\"

Host *.corp.example.net !bastion.corp.example.net
    ProxyJump bastion
    User ops   # shared account

Host *
    IdentitiesOnly yes
    SendEnv LANG LC_*
";

const WINDOWS_CONFIG: &str = "Host a\r\n  Port 22\r\n\r\nHost b\r\n  Port 2222";

#[test]
fn realistic_files_render_unchanged() {
    for input in [USER_CONFIG, WINDOWS_CONFIG, "", "\n", "   \t", "#only a comment"] {
        let result = parse_document(input);
        assert!(result.is_ok(), "unexpected errors for {input:?}: {:?}", result.errors);
        assert_eq!(result.document.to_string(), input);
    }
}

#[test]
fn resolves_hosts_like_ssh() {
    let document = Document::parse(USER_CONFIG).unwrap();

    let bastion = document.section("bastion").unwrap();
    assert_eq!(bastion.value_as_string("hostname").unwrap().as_deref(), Some("10.0.0.5"));
    assert_eq!(
        bastion.value_as_string("IdentityFile").unwrap().as_deref(),
        Some("~/.ssh/My Keys/work")
    );

    let db = document.section("db.corp.example.net").unwrap();
    assert_eq!(db.value_as_string("ProxyJump").unwrap().as_deref(), Some("bastion"));
    assert_eq!(db.value_as_string("user").unwrap().as_deref(), Some("ops"));

    // Listed in the first section, negated in the second
    let negated = document.section("bastion.corp.example.net").unwrap();
    assert_eq!(negated.value_as_string("HostName").unwrap().as_deref(), Some("10.0.0.5"));

    let other = document.section("github.com").unwrap();
    assert_eq!(
        other.value_as_slice("SendEnv").unwrap(),
        Some(vec!["LANG".to_string(), "LC_*".to_string()])
    );
}

#[test]
fn sections_cover_every_line_once() {
    let document = Document::parse(USER_CONFIG).unwrap();
    let sections = document.sections();

    assert_eq!(sections.len(), 4);
    assert!(sections[0].is_implicit());
    assert!(!sections[0].matches("anything", &MatchConfig::default()));

    let covered: usize = sections
        .iter()
        .map(|s| s.lines.len() + usize::from(!s.is_implicit()))
        .sum();
    assert_eq!(covered, document.num_lines());
}

#[test]
fn edits_touch_only_the_edited_line() {
    let mut document = Document::parse(USER_CONFIG).unwrap();
    let index = document
        .lines()
        .position(|line| line.has_keyword("ProxyJump"))
        .unwrap();

    let edited = document.line(index).unwrap().with_arguments(&["jump host"]).unwrap();
    document.set_line(edited);

    let expected = USER_CONFIG.replace("ProxyJump bastion", "ProxyJump \"jump host\"");
    assert_eq!(document.to_string(), expected);

    let reparsed = Document::parse(&document.to_string()).unwrap();
    let section = reparsed.section("db.corp.example.net").unwrap();
    assert_eq!(section.value_as_string("proxyjump").unwrap().as_deref(), Some("jump host"));
}

#[test]
fn insert_and_delete_renumber() {
    let mut document = Document::parse(WINDOWS_CONFIG).unwrap();
    document.insert_line(parse_line_at("  User root\r\n", 1).unwrap());
    assert_eq!(document.to_string(), "Host a\r\n  User root\r\n  Port 22\r\n\r\nHost b\r\n  Port 2222");

    let positions: Vec<usize> = document.lines().map(|l| l.position).collect();
    assert_eq!(positions, vec![0, 1, 2, 3, 4, 5]);

    let removed = document.delete_line(0).unwrap();
    assert!(removed.is_host());
    assert_eq!(document.line(0).unwrap().position, 0);
    assert!(matches!(
        document.delete_line(10),
        Err(DocumentError::IndexOutOfRange { index: 10, len: 5 })
    ));
}

#[test]
fn set_line_past_end_appends() {
    let mut document = Document::new();
    document.set_line(Line::directive(2, "Host", &["new"]).unwrap());

    assert_eq!(document.num_lines(), 3);
    assert!(document.line(0).unwrap().is_blank());
    assert!(document.line(1).unwrap().is_blank());
    assert_eq!(document.section("new").unwrap().start(), Some(2));
}

#[test]
fn lenient_parse_keeps_line_count() {
    let input = "Host a\n  Port \"22\n  User me\n";
    let result = parse_document(input);

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].line(), 1);
    assert_eq!(result.document.num_lines(), 3);
    assert_eq!(
        result.document.section("a").unwrap().value_as_string("User").unwrap().as_deref(),
        Some("me")
    );
}

#[test]
fn realistic_file_validates_cleanly() {
    let document = Document::parse(USER_CONFIG).unwrap();
    let result = validate_document(&document);
    // Include is reported as not followed
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors_only().count(), 0);
}
