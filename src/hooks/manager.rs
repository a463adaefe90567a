// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing and removing git hooks.

use crate::error::{ClintError, HookError, Result};
use crate::git;
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::{HookTemplate, HOOK_MARKER};

/// Manager for git hooks.
#[derive(Debug, Clone)]
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a new hook manager for the current repository.
    pub fn new() -> Result<Self> {
        let repo = git::open_repo()?;
        Self::with_dir(repo.hooks_dir())
    }

    /// Create a hook manager for a specific hooks directory.
    pub fn with_dir(hooks_dir: PathBuf) -> Result<Self> {
        if !hooks_dir.exists() {
            fs::create_dir_all(&hooks_dir).map_err(|e| {
                ClintError::Hook(HookError::InstallFailed {
                    hook: "all".to_string(),
                    message: format!("Failed to create hooks directory: {}", e),
                })
            })?;
        }

        Ok(Self { hooks_dir })
    }

    /// Install a specific hook.
    pub fn install_hook(&self, hook_name: &str, force: bool) -> Result<()> {
        let template = parse_hook(hook_name)?;
        self.install_template(&template, force)
    }

    /// Install all hooks.
    pub fn install_all(&self, force: bool) -> Result<()> {
        for template in HookTemplate::all() {
            self.install_template(template, force)?;
        }
        Ok(())
    }

    /// Install a hook from a template.
    ///
    /// A foreign hook is only replaced with `force`, and is kept as
    /// `<hook>.backup` so uninstalling restores it.
    fn install_template(&self, template: &HookTemplate, force: bool) -> Result<()> {
        let hook_path = self.hooks_dir.join(template.filename());
        let backup_path = self
            .hooks_dir
            .join(format!("{}.backup", template.filename()));
        let install_error = |message: String| {
            ClintError::Hook(HookError::InstallFailed {
                hook: template.filename().to_string(),
                message,
            })
        };

        if hook_path.exists() && !self.is_clint_hook(&hook_path)? {
            if !force {
                return Err(ClintError::Hook(HookError::AlreadyExists {
                    hook: template.filename().to_string(),
                }));
            }
            fs::rename(&hook_path, &backup_path)
                .map_err(|e| install_error(format!("Failed to backup existing hook: {}", e)))?;
        }

        fs::write(&hook_path, template.generate())
            .map_err(|e| install_error(format!("Failed to write hook: {}", e)))?;

        make_executable(&hook_path)
            .map_err(|e| install_error(format!("Failed to set permissions: {}", e)))?;

        tracing::debug!("Installed hook at {:?}", hook_path);
        Ok(())
    }

    /// Uninstall a specific hook.
    pub fn uninstall_hook(&self, hook_name: &str) -> Result<()> {
        let template = parse_hook(hook_name)?;

        let hook_path = self.hooks_dir.join(template.filename());
        let backup_path = self
            .hooks_dir
            .join(format!("{}.backup", template.filename()));

        if !hook_path.exists() {
            return Ok(());
        }

        if !self.is_clint_hook(&hook_path)? {
            return Err(ClintError::Hook(HookError::RemoveFailed {
                hook: hook_name.to_string(),
                message: "Hook was not installed by clint".to_string(),
            }));
        }

        fs::remove_file(&hook_path).map_err(|e| {
            ClintError::Hook(HookError::RemoveFailed {
                hook: hook_name.to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        if backup_path.exists() {
            fs::rename(&backup_path, &hook_path).map_err(|e| {
                ClintError::Hook(HookError::RemoveFailed {
                    hook: hook_name.to_string(),
                    message: format!("Failed to restore backup: {}", e),
                })
            })?;
        }

        Ok(())
    }

    /// Uninstall all hooks.
    pub fn uninstall_all(&self) -> Result<()> {
        for template in HookTemplate::all() {
            self.uninstall_hook(template.filename())?;
        }
        Ok(())
    }

    /// Get the status of all hooks.
    pub fn status(&self) -> Result<Vec<(String, bool)>> {
        let mut status = Vec::new();

        for template in HookTemplate::all() {
            let hook_path = self.hooks_dir.join(template.filename());
            let installed = hook_path.exists() && self.is_clint_hook(&hook_path)?;
            status.push((template.filename().to_string(), installed));
        }

        Ok(status)
    }

    /// Check if a hook was installed by clint.
    fn is_clint_hook(&self, path: &Path) -> Result<bool> {
        let content = fs::read_to_string(path)?;
        Ok(content.contains(HOOK_MARKER))
    }
}

fn parse_hook(hook_name: &str) -> Result<HookTemplate> {
    hook_name.parse::<HookTemplate>().map_err(|_| {
        ClintError::Hook(HookError::NotFound {
            hook: hook_name.to_string(),
        })
    })
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager() -> (TempDir, HookManager) {
        let dir = TempDir::new().unwrap();
        let manager = HookManager::with_dir(dir.path().join("hooks")).unwrap();
        (dir, manager)
    }

    #[test]
    fn test_install_and_uninstall() {
        let (dir, manager) = manager();
        manager.install_all(false).unwrap();

        let hook = dir.path().join("hooks").join("commit-msg");
        assert!(hook.exists());
        assert_eq!(manager.status().unwrap(), vec![("commit-msg".to_string(), true)]);

        // Reinstalling over our own hook is fine.
        manager.install_hook("commit-msg", false).unwrap();

        manager.uninstall_all().unwrap();
        assert!(!hook.exists());
        assert_eq!(manager.status().unwrap(), vec![("commit-msg".to_string(), false)]);
    }

    #[test]
    fn test_foreign_hook_requires_force() {
        let (dir, manager) = manager();
        let hook = dir.path().join("hooks").join("commit-msg");
        fs::write(&hook, "#!/bin/sh\necho custom\n").unwrap();

        assert!(matches!(
            manager.install_hook("commit-msg", false),
            Err(ClintError::Hook(HookError::AlreadyExists { .. }))
        ));
        assert!(manager.uninstall_hook("commit-msg").is_err());

        manager.install_hook("commit-msg", true).unwrap();
        assert!(dir.path().join("hooks").join("commit-msg.backup").exists());

        manager.uninstall_hook("commit-msg").unwrap();
        let restored = fs::read_to_string(&hook).unwrap();
        assert!(restored.contains("echo custom"));
    }

    #[test]
    fn test_unknown_hook() {
        let (_dir, manager) = manager();
        assert!(matches!(
            manager.install_hook("pre-push", false),
            Err(ClintError::Hook(HookError::NotFound { .. }))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_hook_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let (dir, manager) = manager();
        manager.install_all(false).unwrap();
        let mode = fs::metadata(dir.path().join("hooks").join("commit-msg"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
