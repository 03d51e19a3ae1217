const IDENTITY_CUE: &str = "ClientUserinfoChanged: ";
const KILL_CUE: &str = "Kill: ";
const KILLED_SEPARATOR: &str = " killed ";
const BY_SEPARATOR: &str = " by ";
const FIELD_SEPARATOR: char = '\\';

/// Identifier-to-name binding announced by an identity line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity<'a> {
    /// Client slot as written in the log (e.g. "2")
    pub id: &'a str,
    pub name: &'a str,
}

/// Fields of a kill line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KillEvent<'a> {
    pub killer: &'a str,
    pub victim: &'a str,
    pub means: &'a str,
}

/// Extract the client identifier and display name from an identity line.
///
/// The name is the field between the first and second backslash. The
/// identifier follows the last `ClientUserinfoChanged: ` cue before the first
/// backslash and runs up to its last digit. The error value describes what
/// was missing.
pub fn extract_identity(line: &str) -> Result<Identity<'_>, &'static str> {
    let (head, payload) = line
        .split_once(FIELD_SEPARATOR)
        .ok_or("missing field separator")?;

    let name = payload
        .split_once(FIELD_SEPARATOR)
        .map_or(payload, |(name, _)| name);

    let id = head
        .rmatch_indices(IDENTITY_CUE)
        .find_map(|(pos, _)| {
            let after = &head[pos + IDENTITY_CUE.len()..];
            after
                .rfind(|c: char| c.is_ascii_digit())
                .map(|last| after[..=last].trim())
        })
        .ok_or("missing client identifier")?;

    Ok(Identity { id, name })
}

/// Extract killer, victim and cause from a kill line.
///
/// Expects `... Kill: <n> <n> <n>: <killer> killed <victim> by <means>` with
/// exactly one ` killed ` and one ` by ` separator.
pub fn extract_kill(line: &str) -> Result<KillEvent<'_>, &'static str> {
    let (left, right) = split_exactly_once(line, KILLED_SEPARATOR)
        .ok_or("expected exactly one ' killed ' separator")?;

    let killer = left
        .rmatch_indices(KILL_CUE)
        .find_map(|(pos, _)| skip_client_numbers(&left[pos + KILL_CUE.len()..]))
        .ok_or("missing killer")?
        .trim();

    let (victim, means) =
        split_exactly_once(right, BY_SEPARATOR).ok_or("expected exactly one ' by ' separator")?;

    Ok(KillEvent {
        killer,
        victim: victim.trim(),
        means: means.trim(),
    })
}

fn split_exactly_once<'a>(s: &'a str, separator: &str) -> Option<(&'a str, &'a str)> {
    let (left, right) = s.split_once(separator)?;
    (!right.contains(separator)).then_some((left, right))
}

/// Skip `<n> <n> <n>: ` and return the remainder
fn skip_client_numbers(s: &str) -> Option<&str> {
    let s = skip_digits(s)?.strip_prefix(' ')?;
    let s = skip_digits(s)?.strip_prefix(' ')?;
    skip_digits(s)?.strip_prefix(": ")
}

/// Skip one or more leading ASCII digits
fn skip_digits(s: &str) -> Option<&str> {
    let rest = s.trim_start_matches(|c: char| c.is_ascii_digit());
    (rest.len() < s.len()).then_some(rest)
}
