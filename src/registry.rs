//! profiles.ini registry model
//!
//! The registry is parsed with `configparser` in case-sensitive mode so that
//! key casing survives a rewrite. Section and key order follow the file
//! (the `indexmap` feature of `configparser`).

use crate::error::{Error, Result};
use configparser::ini::{Ini, IniDefault};
use std::fs;
use std::path::Path;
use tracing::debug;

/// File name of the profile registry inside the registry root
pub const REGISTRY_FILE: &str = "profiles.ini";

/// Prefix that marks a section as an install pointer
pub const INSTALL_PREFIX: &str = "Install";

/// One `[name]` block of profiles.ini
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, Option<String>)>,
}

impl Section {
    /// Build a section from its name and ordered entries
    pub fn new(name: impl Into<String>, entries: Vec<(String, Option<String>)>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Section name as written between the brackets
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered key/value pairs, keys in their original casing
    pub fn entries(&self) -> &[(String, Option<String>)] {
        &self.entries
    }

    /// Whether the section declares `key` (case-insensitive)
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k.eq_ignore_ascii_case(key))
    }

    /// Value of `key` (case-insensitive); a key without a value reads as ""
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    /// Boolean value of `key`, `false` when the key is absent
    pub fn flag(&self, key: &str) -> Result<bool> {
        match self.get(key) {
            None => Ok(false),
            Some(value) => parse_bool(value).ok_or_else(|| Error::InvalidFlag {
                section: self.name.clone(),
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Profile sections are the ones carrying a `Name`
    pub fn is_profile(&self) -> bool {
        self.contains_key("Name")
    }

    /// Install sections are recognised by their section-name prefix
    pub fn is_install(&self) -> bool {
        self.name.starts_with(INSTALL_PREFIX)
    }
}

/// Parse an INI boolean literal
///
/// Accepts `1`/`yes`/`true`/`on` and `0`/`no`/`false`/`off`, ignoring case.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}

/// Reject text whose first entry is not a `[section]` header
///
/// configparser would otherwise file such keys under a synthetic `default` section.
fn check_leading_header(content: &str) -> Result<()> {
    let first = content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with(['#', ';']));
    match first {
        Some(line) if !line.starts_with('[') => Err(Error::RegistryParse(format!(
            "line '{line}' appears before any [section] header"
        ))),
        _ => Ok(()),
    }
}

/// Ordered, parsed contents of profiles.ini
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    sections: Vec<Section>,
    line_ending: &'static str,
}

impl Registry {
    /// Parse registry text
    ///
    /// Only whole-line `#`/`;` comments are recognised; values keep every
    /// character after the first `=`. A leading BOM is skipped, and a key
    /// before the first `[section]` header is rejected.
    pub fn parse(content: &str) -> Result<Self> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        check_leading_header(content)?;

        let mut defaults = IniDefault::default();
        defaults.case_sensitive = true;
        defaults.enable_inline_comments = false;
        let mut ini = Ini::new_from_defaults(defaults);
        let map = ini.read(content.to_string()).map_err(Error::RegistryParse)?;

        let sections = map
            .into_iter()
            .map(|(name, entries)| Section::new(name, entries.into_iter().collect()))
            .collect();

        let line_ending = if content.contains("\r\n") { "\r\n" } else { "\n" };

        Ok(Self {
            sections,
            line_ending,
        })
    }

    /// Read and parse the registry file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::RegistryMissing(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let registry = Self::parse(&content)?;
        debug!(
            path = %path.display(),
            sections = registry.sections.len(),
            "loaded registry"
        );
        Ok(registry)
    }

    /// All sections in file order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Profile sections in file order
    pub fn profiles(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.is_profile())
    }

    /// Install sections in file order
    pub fn installs(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.is_install())
    }

    /// Drop the named sections, keeping the order of the rest
    pub fn remove_sections(&mut self, names: &[String]) {
        self.sections.retain(|s| !names.iter().any(|n| n == s.name()));
    }

    /// Serialise in profiles.ini layout: `key=value`, blank line after each section
    pub fn to_ini_string(&self) -> String {
        let eol = self.line_ending;
        let mut out = String::new();
        for section in &self.sections {
            out.push('[');
            out.push_str(section.name());
            out.push(']');
            out.push_str(eol);
            for (key, value) in section.entries() {
                out.push_str(key);
                if let Some(value) = value {
                    out.push('=');
                    out.push_str(value);
                }
                out.push_str(eol);
            }
            out.push_str(eol);
        }
        out
    }

    /// Overwrite the registry file at `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_ini_string())?;
        debug!(path = %path.display(), sections = self.sections.len(), "wrote registry");
        Ok(())
    }
}
