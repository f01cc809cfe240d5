use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "examboard-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Extract message IDs from a Fluent file. Any line of the form
/// `<identifier> =` counts; comments, terms and attributes are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(['#', '-', '.']) {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let id = line[..eq_pos].trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                keys.insert(id.to_string());
            }
        }
    }
    keys
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Every `t!("...")` literal key used under `src/`.
fn referenced_keys(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for (idx, _) in content.match_indices("t!(") {
            let rest = content[idx + 3..].trim_start();
            let Some(rest) = rest.strip_prefix('"') else {
                continue;
            };
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|read_dir| {
            read_dir
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn fallback_keys() -> BTreeSet<String> {
    let path = crate_root().join(I18N_DIR).join("en-US").join(FTL_FILENAME);
    let content = fs::read_to_string(&path).expect("Failed to read fallback FTL file");
    let keys = parse_ftl_keys(&content);
    assert!(!keys.is_empty(), "No message keys parsed from fallback FTL: {path:?}");
    keys
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let fallback = fallback_keys();
    let referenced = referenced_keys(&crate_root().join("src"));
    assert!(
        referenced.contains("chart-loading"),
        "source scan found no chart keys; did the t! macro change shape?"
    );

    let mut missing: Vec<_> = referenced.iter().filter(|k| !fallback.contains(*k)).collect();
    missing.sort();
    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in fallback ({}):\n{}",
        missing.len(),
        missing.iter().map(|k| k.as_str()).collect::<Vec<_>>().join("\n")
    );
}

#[test]
fn all_locales_cover_the_fallback() {
    let fallback = fallback_keys();
    let i18n_root = crate_root().join(I18N_DIR);
    let locales = locale_dirs(&i18n_root);
    assert!(locales.iter().any(|l| l == "fr-FR"), "expected fr-FR, found {locales:?}");

    let mut failures = Vec::new();
    for locale in locales {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Locale folder {locale} missing expected file {path:?}"));
        let keys = parse_ftl_keys(&content);
        let missing: Vec<_> = fallback.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!(
                "  {locale} ({} missing): {}",
                missing.len(),
                missing.join(", ")
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "Locales with missing translations relative to fallback:\n{}",
        failures.join("\n")
    );
}

#[test]
fn fallback_has_no_duplicate_keys() {
    let content =
        fs::read_to_string(crate_root().join(I18N_DIR).join("en-US").join(FTL_FILENAME)).unwrap();
    let mut seen = HashSet::new();
    let dups: BTreeSet<_> = content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let (id, _) = line.split_once('=')?;
            let id = id.trim();
            (!line.starts_with('#') && id.chars().all(valid_key_char) && !id.is_empty())
                .then(|| id.to_string())
        })
        .filter(|id| !seen.insert(id.clone()))
        .collect();
    assert!(dups.is_empty(), "Duplicate key definitions in en-US: {dups:?}");
}
