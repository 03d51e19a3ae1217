use strum::Display;

const SESSION_START_MARKER: &str = "InitGame";
const KILL_MARKER: &str = "Kill";
const IDENTITY_MARKER: &str = "ClientUserinfoChanged";

/// Category of a single log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum LineKind {
    SessionStart,
    Kill,
    Identity,
    Unrecognized,
}

/// Classify a line by its timestamped marker.
///
/// Session start wins over kill, which wins over identity, when a line
/// happens to carry more than one marker.
pub fn classify(line: &str) -> LineKind {
    if is_session_start(line) {
        LineKind::SessionStart
    } else if is_kill(line) {
        LineKind::Kill
    } else if is_identity(line) {
        LineKind::Identity
    } else {
        LineKind::Unrecognized
    }
}

pub fn is_session_start(line: &str) -> bool {
    has_timestamped_marker(line, SESSION_START_MARKER)
}

pub fn is_kill(line: &str) -> bool {
    has_timestamped_marker(line, KILL_MARKER)
}

pub fn is_identity(line: &str) -> bool {
    has_timestamped_marker(line, IDENTITY_MARKER)
}

/// True if `marker` occurs anywhere in `line` right after a `<digits>:<digits> ` token
fn has_timestamped_marker(line: &str, marker: &str) -> bool {
    line.match_indices(marker)
        .any(|(pos, _)| ends_with_timestamp(&line.as_bytes()[..pos]))
}

fn ends_with_timestamp(prefix: &[u8]) -> bool {
    let Some((&b' ', rest)) = prefix.split_last() else {
        return false;
    };

    let seconds = rest.iter().rev().take_while(|b| b.is_ascii_digit()).count();
    if seconds == 0 {
        return false;
    }

    let Some((&b':', rest)) = rest[..rest.len() - seconds].split_last() else {
        return false;
    };
    rest.last().is_some_and(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_markers() {
        assert_eq!(
            classify("  0:00 InitGame: \\sv_floodProtect\\1\\sv_maxPing\\0"),
            LineKind::SessionStart
        );
        assert_eq!(
            classify(" 20:54 Kill: 1022 2 22: <world> killed Isgalamido by MOD_TRIGGER_HURT"),
            LineKind::Kill
        );
        assert_eq!(
            classify(" 20:38 ClientUserinfoChanged: 2 n\\Isgalamido\\t\\0\\model\\uriel/zael"),
            LineKind::Identity
        );
        assert_eq!(classify(" 20:37 ClientConnect: 2"), LineKind::Unrecognized);
        assert_eq!(
            classify("------------------------------------------------------------"),
            LineKind::Unrecognized
        );
        assert_eq!(classify(""), LineKind::Unrecognized);
    }

    #[test]
    fn test_marker_requires_timestamp() {
        assert!(!is_session_start("InitGame: \\sv_floodProtect\\1"));
        assert!(!is_kill("x:00 Kill: 1 2 3: a killed b by c"));
        assert!(!is_kill("10: Kill: 1 2 3: a killed b by c"));
        assert!(!is_kill("10:00Kill: 1 2 3: a killed b by c"));
        assert!(is_kill("1:2 Kill: 1 2 3: a killed b by c"));
    }

    #[test]
    fn test_marker_found_mid_line() {
        let line = "noise 12:05 ClientUserinfoChanged: 4 n\\Zeh\\t\\0";
        assert!(is_identity(line));
        assert!(is_kill("Kill 12:05 Kill: 1 2 3: a killed b by c"));
    }

    #[test]
    fn test_classify_precedence() {
        assert_eq!(
            classify("0:00 InitGame: 0:01 Kill: 1 2 3: a killed b by c"),
            LineKind::SessionStart
        );
        assert_eq!(
            classify("0:01 Kill: 1 2 3: 0:02 ClientUserinfoChanged killed b by c"),
            LineKind::Kill
        );
    }

    #[test]
    fn test_line_kind_display() {
        assert_eq!(LineKind::SessionStart.to_string(), "session_start");
        assert_eq!(LineKind::Unrecognized.to_string(), "unrecognized");
    }
}
