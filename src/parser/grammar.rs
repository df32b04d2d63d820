//! Assignment Grammar
//!
//! The fixed pattern defining a syntactically valid `key=value` line.
//! Compiled once per process, never mutated.

use regex::Regex;
use std::sync::LazyLock;

/// A valid assignment line, anchored at both ends.
///
/// The value is a double- or single-quoted string over a fixed character
/// class, or a bare word. Whitespace after `=` is only accepted before a
/// quoted value, and trailing whitespace only as part of a `#` comment.
/// The quoted character class excludes `#`.
static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\w+\s*=(?:\s*(?:"[\w\s/\\\-+.|*?,=:]*"|'[\w\s/\\\-+.|*?,=:]*')|\w+)(?:\s*#.*)?$"#,
    )
    .expect("assignment grammar pattern compiles")
});

/// Test a whole line (terminator already stripped) against the grammar.
pub fn is_assignment(line: &str) -> bool {
    ASSIGNMENT.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_word_value() {
        assert!(is_assignment("sshd_enable=YES"));
        assert!(is_assignment("ifconfig_em0=DHCP"));
    }

    #[test]
    fn quoted_values() {
        assert!(is_assignment(r#"hostname="myhost""#));
        assert!(is_assignment("keymap='us.iso'"));
        assert!(is_assignment(r#"ifconfig_em0="inet 10.0.0.1 netmask 255.255.255.0""#));
    }

    #[test]
    fn whitespace_around_equals() {
        // Space before `=` is always fine; space after it only before quotes.
        assert!(is_assignment(r#"sendmail_enable = "NO""#));
        assert!(is_assignment(r#"sendmail_enable= "NO""#));
        assert!(is_assignment("sendmail_enable =NO"));
        assert!(!is_assignment("sendmail_enable= NO"));
    }

    #[test]
    fn trailing_comment() {
        assert!(is_assignment(r#"sendmail_enable= "NO"    # comment"#));
        assert!(is_assignment("dumpdev=AUTO # crash dumps"));
        assert!(is_assignment("dumpdev=AUTO #no space needed"));
    }

    #[test]
    fn trailing_whitespace_without_comment_fails() {
        assert!(!is_assignment("dumpdev=AUTO   "));
        assert!(!is_assignment(r#"hostname="myhost" "#));
    }

    #[test]
    fn hash_inside_quotes_fails() {
        assert!(!is_assignment(r#"flags="a#b""#));
    }

    #[test]
    fn malformed_lines_fail() {
        assert!(!is_assignment("foo bar = baz"));
        assert!(!is_assignment("this is not valid"));
        assert!(!is_assignment("novalue="));
        assert!(!is_assignment("=orphan"));
        assert!(!is_assignment(r#"unterminated="oops"#));
    }

    #[test]
    fn quoted_character_class() {
        // Everything the class admits, in one value.
        assert!(is_assignment(r#"flags="/usr\local -x +y a.b c|d e* f? g,h i=j k:l""#));
        // Characters outside the class are rejected.
        assert!(!is_assignment(r#"flags="$HOME""#));
        assert!(!is_assignment(r#"flags="a;b""#));
    }

    #[test]
    fn empty_quoted_value_is_valid() {
        assert!(is_assignment(r#"rc_conf_files="""#));
        assert!(is_assignment("rc_conf_files=''"));
    }
}
