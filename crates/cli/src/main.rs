//! # CLI — Versioned File Store Shell
//!
//! A REPL-style command-line interface for the versioned file store. Reads
//! commands from stdin, executes them against a [`FileStore`], and prints
//! results to stdout. Designed for both interactive use and scripted
//! testing (pipe commands via stdin).
//!
//! ## Commands
//!
//! ```text
//! WRITE dir name ext content...  Write a new version, prints its timestamp
//! READ dir name ext ts           Print the content of one version
//! REMOVE dir name ext ts         Delete one version
//! VERSIONS dir name ext          List versions, newest first
//! LAST dir name ext              Print the newest version, "(none)" if absent
//! HAS dir name ext               Print whether any version exists
//! FIND scandir name ext          Scan an explicit directory for versions
//! DETECT filename name ext       Match one filename, print timestamp or reason
//! EXISTS path                    Print whether a root-relative path exists
//! EXIT / QUIT                    Shut down
//! ```
//!
//! ## Configuration
//!
//! ```text
//! VSTORE_ROOT   store root directory  (default: "data")
//! ```
//!
//! ## Example
//!
//! ```text
//! $ cargo run -p cli
//! vstore started (root=data)
//! > WRITE 2023/league league txt hello world
//! 20231019140523
//! > VERSIONS 2023/league league txt
//! 20231019140523  2023-10-19 14:05:23
//! (1 versions)
//! > EXIT
//! bye
//! ```

use anyhow::Result;
use std::any::Any;
use std::io::{self, BufRead, Write};
use store::{detect, FileKind, FileRegistry, FileStore, StoreError, VersionedFile};
use timestamp::Timestamp;

/// Ad-hoc file type assembled from shell arguments.
#[derive(Debug)]
struct ShellFile {
    dir: String,
    name: String,
    ext: String,
}

impl VersionedFile for ShellFile {
    fn dir(&self) -> String {
        self.dir.clone()
    }
    fn name(&self) -> String {
        self.name.clone()
    }
    fn ext(&self) -> String {
        self.ext.clone()
    }
}

/// The single file kind the shell registers at startup.
const SHELL_FILE: FileKind = FileKind(0);

/// Reads a configuration value from the environment, falling back to `default`.
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Builds a file value through the registry from shell arguments.
fn shell_file(
    registry: &FileRegistry,
    dir: &str,
    name: &str,
    ext: &str,
) -> Result<Box<dyn VersionedFile>> {
    let dir = dir.to_string();
    let name = name.to_string();
    let ext = ext.to_string();
    let args: [&dyn Any; 3] = [&dir, &name, &ext];
    Ok(registry.construct(SHELL_FILE, &args)?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let root = env_or("VSTORE_ROOT", "data");
    let store = FileStore::new(&root);

    let registry = FileRegistry::new();
    registry.register(
        SHELL_FILE,
        Box::new(|args| {
            let dir = args[0].downcast_ref::<String>().expect("dir: String");
            let name = args[1].downcast_ref::<String>().expect("name: String");
            let ext = args[2].downcast_ref::<String>().expect("ext: String");
            Box::new(ShellFile {
                dir: dir.clone(),
                name: name.clone(),
                ext: ext.clone(),
            })
        }),
    );

    println!("vstore started (root={})", root);
    println!("Commands: WRITE dir name ext content | READ dir name ext ts | REMOVE dir name ext ts");
    println!("          VERSIONS dir name ext | LAST dir name ext | HAS dir name ext");
    println!("          FIND scandir name ext | DETECT filename name ext | EXISTS path | EXIT");
    print!("> ");
    io::stdout().flush().ok();

    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if let Some((cmd, rest)) = parts.split_first() {
            match cmd.to_uppercase().as_str() {
                "WRITE" => {
                    if rest.len() >= 4 {
                        let file = shell_file(&registry, rest[0], rest[1], rest[2])?;
                        let content = rest[3..].join(" ");
                        match store.write(file.as_ref(), content.as_bytes()) {
                            Ok(ts) => println!("{}", ts),
                            Err(e) => println!("ERR write failed: {}", e),
                        }
                    } else {
                        println!("ERR usage: WRITE dir name ext content");
                    }
                }
                "READ" => {
                    if rest.len() == 4 {
                        let file = shell_file(&registry, rest[0], rest[1], rest[2])?;
                        match Timestamp::parse(rest[3]) {
                            Ok(ts) => match store.read(file.as_ref(), ts) {
                                Ok(data) => println!("{}", String::from_utf8_lossy(&data)),
                                Err(e) => println!("ERR read failed: {}", e),
                            },
                            Err(e) => println!("ERR {}", e),
                        }
                    } else {
                        println!("ERR usage: READ dir name ext ts");
                    }
                }
                "REMOVE" => {
                    if rest.len() == 4 {
                        let file = shell_file(&registry, rest[0], rest[1], rest[2])?;
                        match Timestamp::parse(rest[3]) {
                            Ok(ts) => match store.remove(file.as_ref(), ts) {
                                Ok(()) => println!("OK"),
                                Err(e) => println!("ERR remove failed: {}", e),
                            },
                            Err(e) => println!("ERR {}", e),
                        }
                    } else {
                        println!("ERR usage: REMOVE dir name ext ts");
                    }
                }
                "VERSIONS" => {
                    if rest.len() == 3 {
                        let file = shell_file(&registry, rest[0], rest[1], rest[2])?;
                        match store.versions(file.as_ref()) {
                            Ok(versions) => {
                                for ts in &versions {
                                    println!("{}  {}", ts, ts.long_string());
                                }
                                println!("({} versions)", versions.len());
                            }
                            Err(e) => println!("ERR versions failed: {}", e),
                        }
                    } else {
                        println!("ERR usage: VERSIONS dir name ext");
                    }
                }
                "LAST" => {
                    if rest.len() == 3 {
                        let file = shell_file(&registry, rest[0], rest[1], rest[2])?;
                        match store.last_version(file.as_ref()) {
                            Ok(ts) => println!("{}", ts),
                            Err(StoreError::NoVersions) => println!("(none)"),
                            Err(e) => println!("ERR last failed: {}", e),
                        }
                    } else {
                        println!("ERR usage: LAST dir name ext");
                    }
                }
                "HAS" => {
                    if rest.len() == 3 {
                        let file = shell_file(&registry, rest[0], rest[1], rest[2])?;
                        match store.has_some(file.as_ref()) {
                            Ok(has) => println!("{}", has),
                            Err(e) => println!("ERR has failed: {}", e),
                        }
                    } else {
                        println!("ERR usage: HAS dir name ext");
                    }
                }
                "FIND" => {
                    if rest.len() == 3 {
                        let file = shell_file(&registry, rest[0], rest[1], rest[2])?;
                        match store.find(rest[0], file.as_ref()) {
                            Ok(versions) => {
                                for ts in &versions {
                                    println!("{}", ts);
                                }
                                println!("({} versions)", versions.len());
                            }
                            Err(e) => println!("ERR find failed: {}", e),
                        }
                    } else {
                        println!("ERR usage: FIND scandir name ext");
                    }
                }
                "DETECT" => {
                    if rest.len() == 3 {
                        let file = shell_file(&registry, "", rest[1], rest[2])?;
                        match detect(rest[0], file.as_ref()) {
                            Ok(ts) => println!("{}", ts),
                            Err(e) => println!("no match: {}", e),
                        }
                    } else {
                        println!("ERR usage: DETECT filename name ext");
                    }
                }
                "EXISTS" => {
                    if rest.len() == 1 {
                        match store.path_exists(rest[0]) {
                            Ok(exists) => println!("{}", exists),
                            Err(e) => println!("ERR stat failed: {}", e),
                        }
                    } else {
                        println!("ERR usage: EXISTS path");
                    }
                }
                "EXIT" | "QUIT" => {
                    println!("bye");
                    break;
                }
                other => println!("ERR unknown command: {}", other),
            }
        }
        print!("> ");
        io::stdout().flush().ok();
    }

    Ok(())
}
