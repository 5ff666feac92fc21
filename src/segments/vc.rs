use crate::document::{Document, ViewId};
use crate::segments::{Glyphs, PushProvider, RefreshFuture, StatusPayload};
use crate::text::{Style, Text};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VcState {
    #[default]
    UpToDate,
    Edited,
    Added,
    NeedsMerge,
    NeedsUpdate,
    Removed,
    Conflict,
    Unregistered,
}

/// Version-control status of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VcStatus {
    /// Branch name, or short SHA on a detached head. `None` outside a repository.
    pub branch: Option<String>,
    #[serde(default)]
    pub state: VcState,
}

/// Push segment showing branch and file state. The expensive repository
/// query runs only after a save, never during a redraw.
pub struct VcSegment {
    glyphs: Glyphs,
}

impl VcSegment {
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    pub fn format(&self, status: &VcStatus) -> Option<Text> {
        let branch = status.branch.as_deref().filter(|branch| !branch.is_empty())?;
        let (glyph, style) = match status.state {
            VcState::Edited | VcState::Added => (self.glyphs.vc_added, Style::Info),
            VcState::NeedsMerge => (self.glyphs.vc_needs_merge, Style::Info),
            VcState::NeedsUpdate => (self.glyphs.vc_needs_update, Style::Warning),
            VcState::Removed | VcState::Conflict | VcState::Unregistered => {
                (self.glyphs.vc_conflict, Style::Error)
            }
            VcState::UpToDate => (self.glyphs.vc_good, Style::Success),
        };
        Some(Text::styled(format!("{glyph} {branch}"), style).with("  ", None))
    }
}

impl PushProvider for VcSegment {
    fn update(&self, payload: &StatusPayload) -> Result<Option<Text>> {
        match payload {
            StatusPayload::VersionControl(status) => Ok(self.format(status)),
            _ => Ok(None),
        }
    }

    fn refresh(&self, view: ViewId, document: &Document) -> Option<RefreshFuture> {
        let path = document.path.clone()?;
        debug!(%view, path = %path.display(), "scheduling vc refresh");
        Some(Box::pin(async move {
            let status = query_vc_status(&path).await?;
            Ok(StatusPayload::VersionControl(status))
        }))
    }
}

/// Query branch and file state for `path`.
pub async fn query_vc_status(path: &Path) -> Result<VcStatus> {
    // git runs inside the file's directory, so a relative pathspec would be
    // resolved twice.
    let path = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve path: {}", path.display()))?;
    let path = path.as_path();
    let dir = if path.is_dir() {
        path.to_path_buf()
    } else {
        path.parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    };

    let lookup_dir = dir.clone();
    let branch = tokio::task::spawn_blocking(move || read_branch(&lookup_dir))
        .await
        .context("Branch lookup task failed")??;

    if branch.is_none() {
        debug!(path = %path.display(), "not in a git repository");
        return Ok(VcStatus::default());
    }

    let state = read_file_state(&dir, path).await.unwrap_or_else(|e| {
        debug!(error = %e, "git status failed, assuming up to date");
        VcState::UpToDate
    });

    Ok(VcStatus { branch, state })
}

/// Current branch via gix, falling back to the short head SHA when detached.
fn read_branch(dir: &Path) -> Result<Option<String>> {
    let repo = match gix::discover(dir) {
        Ok(repo) => repo,
        Err(_) => return Ok(None),
    };

    if let Ok(Some(reference)) = repo.head_ref() {
        return Ok(Some(reference.name().shorten().to_string()));
    }

    let sha = match repo.head_commit() {
        Ok(head) => Some(head.id().to_hex_with_len(7).to_string()),
        Err(_) => None,
    };
    Ok(sha)
}

async fn read_file_state(dir: &Path, path: &Path) -> Result<VcState> {
    let output = Command::new("git")
        .args(["status", "--porcelain=v1", "--"])
        .arg(path)
        .current_dir(dir)
        .output()
        .await
        .context("Failed to run git status")?;

    if !output.status.success() {
        anyhow::bail!("git status exited with {}", output.status);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_porcelain_state(stdout.lines().next()))
}

/// Map the first `git status --porcelain` line to a file state.
pub fn parse_porcelain_state(line: Option<&str>) -> VcState {
    let Some(line) = line else {
        return VcState::UpToDate;
    };
    let mut codes = line.chars();
    let index = codes.next().unwrap_or(' ');
    let worktree = codes.next().unwrap_or(' ');

    match (index, worktree) {
        ('?', '?') => VcState::Unregistered,
        ('!', '!') => VcState::UpToDate,
        ('U', _) | (_, 'U') | ('A', 'A') | ('D', 'D') => VcState::Conflict,
        ('A', _) => VcState::Added,
        ('D', _) | (_, 'D') => VcState::Removed,
        _ => VcState::Edited,
    }
}
