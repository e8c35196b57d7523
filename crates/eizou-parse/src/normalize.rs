//! Release-name cleanup pipeline.
//!
//! Turns a raw media filename into the title used for display, cache keys and
//! metadata search. Stages run in a fixed order: broad tags (episode markers,
//! codecs) are removed before narrow ones (bare `HD`) so a later stage never
//! sees the leftovers of a half-removed tag.

use std::sync::LazyLock;

use regex::Regex;

use crate::country::{COUNTRIES, COUNTRY_ALIASES};
use crate::language::LANGUAGES;

/// A single cleanup stage. Stages are pure and return a new string.
pub type Stage = fn(&str) -> String;

/// Cleanup stages in application order, with a name for logging and tests.
pub const STAGES: &[(&str, Stage)] = &[
    ("extension", strip_extension),
    ("release_group", strip_release_group),
    ("separators", replace_separators),
    ("episode", remove_episode_markers),
    ("resolution", remove_resolution),
    ("codec", remove_codecs),
    ("language", remove_languages),
    ("country", remove_countries),
    ("release_tags", remove_release_tags),
    ("empty_brackets", remove_empty_brackets),
    ("whitespace", collapse_whitespace),
];

/// Clean a raw release filename into a canonical title.
///
/// Never fails. A name made only of technical tokens cleans to `""`.
///
/// # Example
/// ```
/// assert_eq!(
///     eizou_parse::clean_title("Inception.2010.720p.BluRay.x264-YTS"),
///     "Inception 2010"
/// );
/// ```
pub fn clean_title(raw: &str) -> String {
    STAGES
        .iter()
        .fold(raw.to_string(), |title, (_, stage)| stage(&title))
}

fn remove_all(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

// ── Stage 1: File extension ───────────────────────────────────────────

static RE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(?:mp4|mkv|avi|mov|webm|m4v|wmv|flv)$").unwrap()
});

/// Strip a trailing video file extension.
pub fn strip_extension(s: &str) -> String {
    remove_all(&RE_EXTENSION, s)
}

// ── Stage 2: Release group ────────────────────────────────────────────

static RE_RELEASE_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-[A-Za-z0-9]+$").unwrap());

/// Strip a trailing `-GROUP` suffix. Only an unbroken alphanumeric run at the
/// very end counts, so `-Group.En` is left alone.
pub fn strip_release_group(s: &str) -> String {
    remove_all(&RE_RELEASE_GROUP, s)
}

// ── Stage 3: Separators ───────────────────────────────────────────────

/// Turn `.` and `_` word separators into spaces.
pub fn replace_separators(s: &str) -> String {
    s.replace(['.', '_'], " ")
}

// ── Stage 4: Season / episode markers ─────────────────────────────────

/// `S01E02` first, then a standalone `E05` (which may be exposed by the first).
static RE_EPISODE_MARKERS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)S\d{1,2}E\d{1,2}").unwrap(),
        Regex::new(r"(?i)\bE\d{1,2}\b").unwrap(),
    ]
});

/// Remove `S##E##` and standalone `E##` markers.
pub fn remove_episode_markers(s: &str) -> String {
    RE_EPISODE_MARKERS
        .iter()
        .fold(s.to_string(), |acc, re| remove_all(re, &acc))
}

// ── Stage 5: Resolution ───────────────────────────────────────────────

static RE_RESOLUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:480p|576p|720p|1080p|1440p|2160p|4K|8K)\b").unwrap()
});

/// Remove resolution tags (`480p` through `8K`).
pub fn remove_resolution(s: &str) -> String {
    remove_all(&RE_RESOLUTION, s)
}

// ── Stage 6: Codec / source ───────────────────────────────────────────

/// Separators are already spaces here, so `H.264` arrives as `H 264`.
static RE_CODEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:x264|x265|H[. ]?264|H[. ]?265|HEVC|WEBRip|BluRay|HDRip|DVDRip|HDTV)\b",
    )
    .unwrap()
});

/// Remove video codec and rip source tags.
pub fn remove_codecs(s: &str) -> String {
    remove_all(&RE_CODEC, s)
}

// ── Stage 7: Languages ────────────────────────────────────────────────

static RE_LANGUAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", LANGUAGES.join("|"))).unwrap()
});

/// Remove whole-word language names (`HINDI`, `French`, ...).
pub fn remove_languages(s: &str) -> String {
    remove_all(&RE_LANGUAGE, s)
}

// ── Stage 8: Countries ────────────────────────────────────────────────

/// Longest names first, so `Guinea-Bissau` wins over `Guinea`.
static RE_COUNTRY: LazyLock<Regex> = LazyLock::new(|| {
    let mut names: Vec<&str> = COUNTRIES.iter().map(|c| c.name).collect();
    names.sort_by_key(|name| std::cmp::Reverse(name.len()));
    let mut alternatives: Vec<String> = names.into_iter().map(regex::escape).collect();
    alternatives.extend(COUNTRY_ALIASES.iter().map(|a| a.to_string()));
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives.join("|"))).unwrap()
});

/// Remove whole-word country names and common aliases (`UK`, `U.S.A`).
pub fn remove_countries(s: &str) -> String {
    remove_all(&RE_COUNTRY, s)
}

// ── Stage 9: Release / distribution tags ──────────────────────────────

/// Applied in order. Bare `HD` goes last so `DTS-HD` and `HDR` are taken whole.
const RELEASE_TAG_PATTERNS: &[&str] = &[
    r"(?i)\b(?:DUBBED|SUBBED|SUBS|DUB|MULTI)\b",
    r"(?i)\b(?:DD5[. ]1|AAC2[. ]0|AAC|MP3|FLAC|EAC3|TRUEHD|ATMOS)\b",
    r"(?i)\b(?:HDR|SDR|IMAX|REMASTERED|DIRECTOR'?S CUT|EXTENDED|UNCUT)\b",
    r"(?i)\b(?:PROPER|REPACK|LIMITED|INTERNAL)\b",
    r"(?i)\b(?:READNFO|NFO)\b",
    r"(?i)\b(?:UNRATED|THEATRICAL)\b",
    r"(?i)\b(?:NEWSEASON|SEASON|COMPLETE)\b",
    r"(?i)\b(?:AMZN|NF|HULU|DSNP|DISNEY|PRIME|NETFLIX)\b\+?",
    r"(?i)\b(?:DDP5[. ]1|DD5[. ]1|DTS-HD|DTS:X|DTSMA|DTS)\b",
    r"(?i)\b(?:AC3|EVO|AVC|VC-1|VVC|WEB-DL|WEBDL|10BIT)\b",
    r"(?i)\bHD\b",
];

static RE_RELEASE_TAGS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    RELEASE_TAG_PATTERNS
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

/// Remove dub/sub, audio, cut, repack, streaming-service and encoder tags.
pub fn remove_release_tags(s: &str) -> String {
    RE_RELEASE_TAGS
        .iter()
        .fold(s.to_string(), |acc, re| remove_all(re, &acc))
}

// ── Stage 9b: Empty brackets ──────────────────────────────────────────

static RE_EMPTY_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)|\[\s*\]|\{\s*\}").unwrap());

/// Drop bracket pairs emptied by earlier stages, e.g. `[1080p]` → `[]` → ``.
pub fn remove_empty_brackets(s: &str) -> String {
    let mut out = s.to_string();
    while RE_EMPTY_BRACKETS.is_match(&out) {
        out = remove_all(&RE_EMPTY_BRACKETS, &out);
    }
    out
}

// ── Stage 10: Whitespace ──────────────────────────────────────────────

/// Trim and collapse whitespace runs to a single space.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
