use crate::{FileStore, VersionedFile};
use std::fs;

/// One league standings file per season: `{season}/league/league.txt.{ts}`.
#[derive(Debug)]
pub struct LeagueFile {
    pub season: i32,
}

impl VersionedFile for LeagueFile {
    fn dir(&self) -> String {
        format!("{}/league", self.season)
    }
    fn name(&self) -> String {
        "league".to_string()
    }
    fn ext(&self) -> String {
        "txt".to_string()
    }
}

/// Parameterized file type with a computed name:
/// `{season}/roster/team-{id}/roster-{id}-{date}.json.{ts}`.
#[derive(Debug)]
pub struct RosterFile {
    pub season: i32,
    pub team_id: i32,
    pub date: String,
}

impl VersionedFile for RosterFile {
    fn dir(&self) -> String {
        format!("{}/roster/team-{}", self.season, self.team_id)
    }
    fn name(&self) -> String {
        format!("roster-{}-{}", self.team_id, self.date)
    }
    fn ext(&self) -> String {
        "json".to_string()
    }
}

/// Multi-segment extension fixture: `catalog/themes.csv.gz.{ts}`.
#[derive(Debug)]
pub struct ThemesFile;

impl VersionedFile for ThemesFile {
    fn dir(&self) -> String {
        "catalog".to_string()
    }
    fn name(&self) -> String {
        "themes".to_string()
    }
    fn ext(&self) -> String {
        "csv.gz".to_string()
    }
}

pub fn league() -> LeagueFile {
    LeagueFile { season: 2023 }
}

/// Creates a file named `name` with `content` under `rel_dir` inside the
/// store root, bypassing the store's write path.
pub fn seed_file(store: &FileStore, rel_dir: &str, name: &str, content: &str) {
    let dir = store.root().join(rel_dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

/// Creates a subdirectory named `name` under `rel_dir` inside the store
/// root.
pub fn seed_dir(store: &FileStore, rel_dir: &str, name: &str) {
    fs::create_dir_all(store.root().join(rel_dir).join(name)).unwrap();
}
