use super::helpers::{LeagueFile, RosterFile};
use crate::{version_path, FileKind, FileRegistry, RegistryError, Timestamp};
use std::any::Any;

const LEAGUE: FileKind = FileKind(0);
const ROSTER: FileKind = FileKind(1);

fn test_registry() -> FileRegistry {
    let registry = FileRegistry::new();
    registry.register(
        LEAGUE,
        Box::new(|args| {
            let season = *args[0].downcast_ref::<i32>().expect("season: i32");
            Box::new(LeagueFile { season })
        }),
    );
    registry.register(
        ROSTER,
        Box::new(|args| {
            let season = *args[0].downcast_ref::<i32>().expect("season: i32");
            let team_id = *args[1].downcast_ref::<i32>().expect("team_id: i32");
            let date = args[2].downcast_ref::<String>().expect("date: String");
            Box::new(RosterFile {
                season,
                team_id,
                date: date.clone(),
            })
        }),
    );
    registry
}

#[test]
fn construct_registered_kind() {
    let registry = test_registry();
    let ts = Timestamp::parse("20211125011947").unwrap();

    let args: [&dyn Any; 1] = [&2023i32];
    let file = registry.construct(LEAGUE, &args).unwrap();
    assert_eq!(
        version_path(file.as_ref(), ts).to_str().unwrap(),
        "2023/league/league.txt.20211125011947"
    );
}

#[test]
fn construct_with_multiple_args() {
    let registry = test_registry();
    let ts = Timestamp::parse("20211125011947").unwrap();

    let date = "2023-10-19".to_string();
    let args: [&dyn Any; 3] = [&2023i32, &3i32, &date];
    let file = registry.construct(ROSTER, &args).unwrap();
    assert_eq!(
        version_path(file.as_ref(), ts).to_str().unwrap(),
        "2023/roster/team-3/roster-3-2023-10-19.json.20211125011947"
    );
}

#[test]
fn unregistered_kind_is_a_typed_error() {
    let registry = test_registry();

    let args: [&dyn Any; 0] = [];
    let err = registry.construct(FileKind(99), &args).unwrap_err();
    assert_eq!(err, RegistryError::Unregistered(FileKind(99)));
    assert_eq!(err.to_string(), "file kind 99 not registered");
}

#[test]
fn register_replaces_previous_constructor() {
    let registry = FileRegistry::new();
    registry.register(LEAGUE, Box::new(|_| Box::new(LeagueFile { season: 1999 })));
    registry.register(LEAGUE, Box::new(|_| Box::new(LeagueFile { season: 2023 })));

    let args: [&dyn Any; 0] = [];
    let file = registry.construct(LEAGUE, &args).unwrap();
    assert_eq!(file.dir(), "2023/league");
}
