use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::{Error, Result};
use crate::prompt::CandidatePrompt;

// ---------------------------------------------------------------------------
// Directory handle
// ---------------------------------------------------------------------------

/// A resolved directory. Entries are listed on demand, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    path: PathBuf,
}

impl Directory {
    pub fn new(path: PathBuf) -> Self {
        // Fall back to the path as given when it cannot be made absolute.
        let path = std::path::absolute(&path).unwrap_or(path);
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> std::io::Result<fs::ReadDir> {
        fs::read_dir(&self.path)
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

pub struct DirectoryResolver {
    roots: Vec<PathBuf>,
    follow_links: bool,
}

impl DirectoryResolver {
    pub fn new(roots: Vec<PathBuf>, follow_links: bool) -> Self {
        Self { roots, follow_links }
    }

    /// Resolve `query` to a directory.
    ///
    /// A query naming an existing directory is returned as is. Otherwise every
    /// readable directory under the roots is visited breadth first and children
    /// whose name equals the query (ignoring case) are offered to `prompt`.
    pub fn resolve<P: CandidatePrompt + ?Sized>(&self, query: &str, prompt: &mut P) -> Result<Directory> {
        if !query.is_empty() && Path::new(query).is_dir() {
            return Ok(Directory::new(PathBuf::from(query)));
        }

        log::info!("Beginning search for {:?} in {:?}", query, self.roots);
        let start_time = Instant::now();
        let wanted = query.to_lowercase();

        // Each frontier entry is the listing of one directory still to be scanned.
        // A directory is listed once, when discovered; failing that listing is
        // what makes it unreadable.
        let mut visited: HashSet<PathBuf> = self.roots.iter().cloned().collect();
        let mut frontier: Vec<Vec<PathBuf>> = self.roots.iter().filter_map(|r| self.child_dirs(r)).collect();
        let mut next: Vec<Vec<PathBuf>> = Vec::new();
        let mut candidates: Vec<Directory> = Vec::new();
        let mut round = 0usize;

        while !frontier.is_empty() {
            round += 1;
            log::debug!("[search] round {}: scanning {} directories", round, frontier.len());

            for listing in frontier.drain(..) {
                for child in listing {
                    if !visited.insert(child.clone()) {
                        continue;
                    }
                    let Some(grandchildren) = self.child_dirs(&child) else {
                        continue;
                    };

                    let matches = child
                        .file_name()
                        .is_some_and(|n| n.to_string_lossy().to_lowercase() == wanted);
                    if matches {
                        if prompt.confirm(&child)? {
                            log::info!("Accepted {:?} after {:.2}s", child, start_time.elapsed().as_secs_f64());
                            return Ok(Directory::new(child));
                        }
                        candidates.push(Directory::new(child));
                    }

                    next.push(grandchildren);
                }
            }

            std::mem::swap(&mut frontier, &mut next);
        }

        log::info!(
            "Search finished in {:.2}s after {} rounds, {} candidates",
            start_time.elapsed().as_secs_f64(),
            round,
            candidates.len()
        );

        match candidates.len() {
            0 => Err(Error::NotFound(query.to_string())),
            1 => Ok(candidates.remove(0)),
            _ => loop {
                let idx = prompt.choose(&candidates)?;
                if idx < candidates.len() {
                    return Ok(candidates.swap_remove(idx));
                }
                log::warn!("Selection {} out of range, asking again", idx);
            },
        }
    }

    /// Immediate subdirectories of `dir`, sorted by path, or `None` when `dir`
    /// cannot be listed. Entries that vanish or cannot be inspected are dropped.
    fn child_dirs(&self, dir: &Path) -> Option<Vec<PathBuf>> {
        let Ok(entries) = fs::read_dir(dir) else {
            log::trace!("[search] skipping unreadable {:?}", dir);
            return None;
        };

        let mut subdirs = Vec::new();
        for entry in entries.filter_map(|e| e.ok()) {
            let Ok(ft) = entry.file_type() else {
                continue;
            };
            let is_dir = if ft.is_symlink() {
                self.follow_links && entry.path().is_dir()
            } else {
                ft.is_dir()
            };
            if is_dir {
                subdirs.push(entry.path());
            }
        }
        subdirs.sort();
        Some(subdirs)
    }
}
