//! Locale file checks.
//!
//! es-CL is the fallback and the reference: every other locale must define the
//! same messages with the same placeholders, and every `t!` key the crate uses
//! must exist in it. Adding a locale means adding a row to `LOCALES`.
//!
//! The FTL reading here only understands `key = value` lines, which is all
//! these files contain.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const FALLBACK: (&str, &str) = ("es-CL", include_str!("../i18n/es-CL/p13viz-ui.ftl"));

const LOCALES: &[(&str, &str)] = &[("en-US", include_str!("../i18n/en-US/p13viz-ui.ftl"))];

const I18N_TOML: &str = include_str!("../i18n.toml");

/// `(key, value)` for each message definition, in file order.
fn messages(src: &str) -> Vec<(&str, &str)> {
    src.lines()
        .filter(|line| !line.starts_with(&[' ', '\t', '#', '.'][..]))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty() && !key.contains(char::is_whitespace))
        .collect()
}

fn keys(src: &str) -> BTreeSet<&str> {
    messages(src).into_iter().map(|(key, _)| key).collect()
}

fn placeholders(value: &str) -> BTreeSet<&str> {
    value
        .split("{ $")
        .skip(1)
        .filter_map(|rest| rest.split(&[' ', '}'][..]).next())
        .collect()
}

#[test]
fn no_locale_defines_a_key_twice() {
    for (locale, src) in std::iter::once(&FALLBACK).chain(LOCALES) {
        let mut seen = BTreeSet::new();
        let repeated: Vec<&str> = messages(src)
            .into_iter()
            .map(|(key, _)| key)
            .filter(|key| !seen.insert(*key))
            .collect();
        assert!(repeated.is_empty(), "{locale} repeats {repeated:?}");
    }
}

#[test]
fn every_locale_matches_fallback_keys() {
    let reference = keys(FALLBACK.1);
    assert!(reference.len() > 50, "fallback unexpectedly small");

    for (locale, src) in LOCALES {
        let theirs = keys(src);
        let missing: Vec<_> = reference.difference(&theirs).collect();
        let extra: Vec<_> = theirs.difference(&reference).collect();
        assert!(
            missing.is_empty() && extra.is_empty(),
            "{locale}: missing {missing:?}, not in {}: {extra:?}",
            FALLBACK.0
        );
    }
}

/// A locale with a different placeholder set renders raw `{ $name }` markers.
#[test]
fn placeholders_match_fallback() {
    let reference: BTreeMap<&str, BTreeSet<&str>> = messages(FALLBACK.1)
        .into_iter()
        .map(|(key, value)| (key, placeholders(value)))
        .collect();

    for (locale, src) in LOCALES {
        let mismatched: Vec<String> = messages(src)
            .into_iter()
            .filter_map(|(key, value)| {
                let theirs = placeholders(value);
                match reference.get(key) {
                    Some(ours) if *ours != theirs => {
                        Some(format!("{key}: {ours:?} vs {theirs:?}"))
                    }
                    _ => None,
                }
            })
            .collect();
        assert!(mismatched.is_empty(), "{locale}: {mismatched:?}");
    }
}

/// `fl!` resolves FTL files through the configured domain, so it has to match
/// the file name the locales use.
#[test]
fn config_domain_matches_ftl_file_name() {
    let domain = I18N_TOML
        .lines()
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| key.trim() == "domain")
        .map(|(_, value)| value.trim().trim_matches('"'))
        .expect("i18n.toml sets a domain");
    assert_eq!(domain, "p13viz-ui");

    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("i18n");
    for locale in std::iter::once(FALLBACK.0).chain(LOCALES.iter().map(|(l, _)| *l)) {
        let file = dir.join(locale).join(format!("{domain}.ftl"));
        assert!(file.is_file(), "{} missing", file.display());
    }
}

/// Literal keys passed to `t!`, with the file they appear in.
fn used_keys(dir: &Path, found: &mut Vec<(String, PathBuf)>) {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| panic!("{}: {err}", dir.display()));
    for entry in entries {
        let path = entry.expect("readable dir entry").path();
        if path.is_dir() {
            used_keys(&path, found);
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }
        let src = fs::read_to_string(&path).expect("readable source file");
        for (pos, _) in src.match_indices("t!(") {
            // `format!(`, `assert!(` and friends also end in `t!(`.
            let preceded_by_ident = src[..pos]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_');
            if preceded_by_ident {
                continue;
            }
            let Some(args) = src[pos + 3..].trim_start().strip_prefix('"') else {
                continue;
            };
            if let Some(end) = args.find('"') {
                found.push((args[..end].to_string(), path.clone()));
            }
        }
    }
}

#[test]
fn every_t_key_in_sources_exists_in_fallback() {
    let src_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut used = Vec::new();
    used_keys(&src_dir, &mut used);
    assert!(used.len() > 50, "only {} t! calls found", used.len());

    let defined = keys(FALLBACK.1);
    let unknown: Vec<String> = used
        .iter()
        .filter(|(key, _)| !defined.contains(key.as_str()))
        .map(|(key, path)| format!("{key} ({})", path.display()))
        .collect();
    assert!(unknown.is_empty(), "keys missing from {}: {unknown:?}", FALLBACK.0);

    // The multi-line call in the simulator view is picked up too.
    assert!(used.iter().any(|(key, _)| key == "sim-updated"));
}
