// SPDX-License-Identifier: MPL-2.0
//! Build script for the locale dictionary.
//!
//! Reads every `.ftl` file under `assets/i18n/`, checks that each locale
//! declares exactly the message ids of the reference locale (`en.ftl`), and
//! generates the `Key` enum used for typed lookups. A locale with a missing
//! or extra id fails the build.

use std::collections::BTreeSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

const I18N_DIR: &str = "assets/i18n";
const REFERENCE_LOCALE: &str = "en";

fn main() {
    println!("cargo:rerun-if-changed={I18N_DIR}");

    let dir = Path::new(I18N_DIR);
    let reference_path = dir.join(format!("{REFERENCE_LOCALE}.ftl"));
    let reference = message_ids(&reference_path);
    if reference.is_empty() {
        panic!("{} declares no messages", reference_path.display());
    }

    let mut locales: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap_or_else(|err| panic!("cannot read {I18N_DIR}: {err}"))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "ftl"))
        .collect();
    locales.sort();

    let mut problems = Vec::new();
    for path in &locales {
        println!("cargo:rerun-if-changed={}", path.display());
        let ids = message_ids(path);
        for missing in reference.difference(&ids) {
            problems.push(format!("{}: missing `{missing}`", path.display()));
        }
        for extra in ids.difference(&reference) {
            problems.push(format!("{}: unknown `{extra}`", path.display()));
        }
    }
    if !problems.is_empty() {
        panic!("locale files disagree with {REFERENCE_LOCALE}.ftl:\n{}", problems.join("\n"));
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(out_dir.join("keys.rs"), render_keys(&reference))
        .unwrap_or_else(|err| panic!("cannot write keys.rs: {err}"));
}

/// Collects the message ids declared in a Fluent resource.
///
/// Terms (`-name`), comments and indented continuation lines are skipped.
fn message_ids(path: &Path) -> BTreeSet<String> {
    let source = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("cannot read {}: {err}", path.display()));
    source
        .lines()
        .filter(|line| line.starts_with(|c: char| c.is_ascii_alphabetic()))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim().to_string())
        .collect()
}

fn variant_name(id: &str) -> String {
    id.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

fn render_keys(ids: &BTreeSet<String>) -> String {
    let mut out = String::new();
    out.push_str("/// Every user-facing message id, generated from the reference locale.\n");
    out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]\n");
    out.push_str("pub enum Key {\n");
    for id in ids {
        let _ = writeln!(out, "    /// `{id}`");
        let _ = writeln!(out, "    {},", variant_name(id));
    }
    out.push_str("}\n\n");

    out.push_str("impl Key {\n");
    out.push_str("    /// All keys, in message id order.\n");
    let _ = writeln!(out, "    pub const ALL: [Key; {}] = [", ids.len());
    for id in ids {
        let _ = writeln!(out, "        Key::{},", variant_name(id));
    }
    out.push_str("    ];\n\n");
    out.push_str("    /// Fluent message id of this key.\n");
    out.push_str("    #[must_use]\n");
    out.push_str("    pub const fn id(self) -> &'static str {\n");
    out.push_str("        match self {\n");
    for id in ids {
        let _ = writeln!(out, "            Key::{} => \"{id}\",", variant_name(id));
    }
    out.push_str("        }\n    }\n}\n");
    out
}
