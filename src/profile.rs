use crate::error::{Error, Result};
use crate::registry::{Registry, Section, REGISTRY_FILE};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Public profile information for listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileInfo {
    pub section: String,
    pub name: String,
    pub path: Option<PathBuf>,
    pub is_default: bool,
    pub is_relative: bool,
    pub locked_to_install: Option<String>,
}

/// Pick the registry section describing the active profile
///
/// With a name, the first profile section whose `Name` matches exactly is
/// returned. Without one, a single `Install` section wins; otherwise the
/// only profile, or the first one flagged `Default=1`.
pub fn select_section<'a>(
    registry: &'a Registry,
    registry_path: &Path,
    profile_name: Option<&str>,
) -> Result<&'a Section> {
    if let Some(name) = profile_name {
        return registry
            .profiles()
            .find(|p| p.get("Name") == Some(name))
            .ok_or_else(|| Error::ProfileNotFound {
                name: name.to_string(),
                registry: registry_path.to_path_buf(),
            });
    }

    let installs: Vec<&Section> = registry.installs().collect();
    match installs.as_slice() {
        [] => {}
        [install] => {
            debug!(section = install.name(), "selected install section");
            return Ok(*install);
        }
        _ => {
            return Err(Error::AmbiguousInstalls {
                count: installs.len(),
            })
        }
    }

    let profiles: Vec<&Section> = registry.profiles().collect();
    match profiles.as_slice() {
        [] => Err(Error::NoProfiles),
        [only] => {
            debug!(section = only.name(), "selected the only profile");
            Ok(*only)
        }
        _ => {
            for &profile in &profiles {
                if profile.flag("Default")? {
                    debug!(section = profile.name(), "selected default profile");
                    return Ok(profile);
                }
            }
            Err(Error::NoDefaultProfile)
        }
    }
}

/// Directory a profile or install section points at
///
/// `Path` is joined onto the registry root, so relative paths land under it
/// and absolute ones are kept as written. `Default` is the fallback for
/// install sections.
pub fn derive_path(registry_root: &Path, section: &Section) -> Result<PathBuf> {
    let is_relative = section.flag("IsRelative")?;
    if let Some(path) = section.get("Path") {
        if !is_relative && Path::new(path).is_relative() {
            debug!(section = section.name(), path, "relative Path without IsRelative=1");
        }
        return Ok(registry_root.join(path));
    }
    if let Some(default) = section.get("Default") {
        return Ok(registry_root.join(default));
    }
    Err(Error::UnresolvablePath {
        section: section.name().to_string(),
    })
}

/// Find the active profile directory under `registry_root`
pub fn resolve(registry_root: &Path, profile_name: Option<&str>) -> Result<PathBuf> {
    let registry_path = registry_root.join(REGISTRY_FILE);
    let registry = Registry::load(&registry_path)?;
    let section = select_section(&registry, &registry_path, profile_name)?;
    derive_path(registry_root, section)
}

/// Resolve the profile and join `file` onto it; an empty `file` yields the directory itself
pub fn resolve_file(
    registry_root: &Path,
    profile_name: Option<&str>,
    file: &Path,
) -> Result<PathBuf> {
    let profile_path = resolve(registry_root, profile_name)?;
    if file.as_os_str().is_empty() {
        Ok(profile_path)
    } else {
        Ok(profile_path.join(file))
    }
}

/// Delete a profile: drop its registry sections, then its directory
///
/// Every section whose location equals the resolved profile is removed,
/// including an install section pointing at it. The registry is rewritten
/// before the directory is deleted and the two steps are not atomic: if the
/// deletion fails, the registry no longer mentions a directory that still
/// exists.
pub fn remove_profile(registry_root: &Path, profile_name: Option<&str>) -> Result<PathBuf> {
    let registry_path = registry_root.join(REGISTRY_FILE);
    let mut registry = Registry::load(&registry_path)?;
    let target = derive_path(
        registry_root,
        select_section(&registry, &registry_path, profile_name)?,
    )?;

    let mut doomed = Vec::new();
    for section in registry.sections() {
        match derive_path(registry_root, section) {
            Ok(path) if path == target => doomed.push(section.name().to_string()),
            Ok(_) | Err(Error::UnresolvablePath { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    registry.remove_sections(&doomed);
    registry.save(&registry_path)?;
    info!(sections = ?doomed, "removed profile from registry");

    if let Err(e) = fs::remove_dir_all(&target) {
        warn!(
            path = %target.display(),
            "registry already rewritten but the profile directory could not be removed"
        );
        return Err(e.into());
    }
    info!(path = %target.display(), "removed profile directory");
    Ok(target)
}

/// List all profile sections declared in the registry
pub fn list_profiles(registry_root: &Path) -> Result<Vec<ProfileInfo>> {
    let registry = Registry::load(&registry_root.join(REGISTRY_FILE))?;

    let mut installs = Vec::new();
    for install in registry.installs() {
        match derive_path(registry_root, install) {
            Ok(path) => installs.push((install.name().to_string(), path)),
            Err(Error::UnresolvablePath { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    // Merge profile info with install locks
    let mut infos = Vec::new();
    for profile in registry.profiles() {
        let path = match derive_path(registry_root, profile) {
            Ok(path) => Some(path),
            Err(Error::UnresolvablePath { .. }) => None,
            Err(e) => return Err(e),
        };
        let locked_to_install = path.as_ref().and_then(|path| {
            installs
                .iter()
                .find(|(_, install_path)| install_path == path)
                .map(|(name, _)| name.clone())
        });

        infos.push(ProfileInfo {
            section: profile.name().to_string(),
            name: profile.get("Name").unwrap_or_default().to_string(),
            path,
            is_default: profile.flag("Default")?,
            is_relative: profile.flag("IsRelative")?,
            locked_to_install,
        });
    }

    Ok(infos)
}
