// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod listener;
mod script;
mod seed;

use clap::Parser;
use listener::ChangeLogger;
use script::{ReplayReport, replay};
use seed::JsonSeed;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use stockroom::{Model, Permissions, SourceError};
use tracing::{info, warn};

/// Stockroom Replay - runs a JSON-lines command script against a seeded model
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON seed file. A missing file starts from an empty model.
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Path to the command script. Reads standard input if not provided.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Path to a JSON permission table. Uses the built-in table if not provided.
    #[arg(short, long)]
    permissions: Option<PathBuf>,
}

fn load_permissions(path: Option<&Path>) -> Result<Permissions, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(Permissions::default());
    };
    info!("Using permission table at: {}", path.display());
    let permissions: Permissions = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    Ok(permissions)
}

fn load_model(seed: Option<&Path>, permissions: Permissions) -> Result<Model, SourceError> {
    let source: JsonSeed = match seed {
        Some(path) => JsonSeed::read(path)?,
        None => {
            info!("No seed file given, starting empty");
            JsonSeed::missing()
        }
    };
    Model::load(&source, permissions)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Stockroom Replay");

    let permissions: Permissions = load_permissions(args.permissions.as_deref())?;
    let mut model: Model = load_model(args.seed.as_deref(), permissions)?;
    model.add_listener(ChangeLogger);

    let script: Box<dyn BufRead> = if let Some(path) = &args.script {
        info!("Replaying script at: {}", path.display());
        Box::new(BufReader::new(File::open(path)?))
    } else {
        info!("Replaying script from standard input");
        Box::new(std::io::stdin().lock())
    };

    let report: ReplayReport = replay(&mut model, script, &mut std::io::stdout().lock())?;
    if report.is_clean() {
        info!(%report, "Replay finished");
    } else {
        warn!(%report, "Replay finished with failures");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use std::sync::mpsc::{Receiver, channel};
    use stockroom::{DataSource, Inventory, ModelEvent};
    use stockroom_domain::{Sku, UniqueList};
    use time::macros::date;

    const SEED: &str = r#"{
        "items": [
            {"sku": "w-1", "name": "Red Widget", "price": "12.50", "quantity": 10, "tags": ["hardware"]},
            {"sku": "b-2", "name": "Bolt", "price": "0.25", "quantity": 500}
        ],
        "orders": [
            {"sku": "W-1", "quantity": 20, "required_by": "2026-03-01", "supplier": "Acme"}
        ],
        "sales": [
            {"id": 1, "sku": "W-1", "quantity": 2, "date": "2026-02-14"}
        ],
        "staff": [
            {"username": "root", "password": "secret", "name": "Root", "role": "admin"},
            {"username": "clerk", "password": "secret", "name": "Clerk", "role": "user"}
        ]
    }"#;

    fn seeded_model() -> Model {
        Model::load(&JsonSeed::parse(SEED).unwrap(), Permissions::default()).unwrap()
    }

    fn run(model: &mut Model, script: &str) -> (ReplayReport, String) {
        let mut out: Vec<u8> = Vec::new();
        let report: ReplayReport = replay(model, script.as_bytes(), &mut out).unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_seed_loads_every_collection() {
        let model: Model = seeded_model();

        assert_eq!(model.inventory().items.len(), 2);
        assert_eq!(model.inventory().orders.len(), 1);
        assert_eq!(model.inventory().sales.len(), 1);
        assert_eq!(model.staff().len(), 2);
        let order_date: time::Date = model.inventory().orders.get(0).unwrap().required_by;
        assert_eq!(order_date, date!(2026 - 03 - 01));
    }

    #[test]
    fn test_seed_with_orphaned_order_is_rejected() {
        let seed: JsonSeed = JsonSeed::parse(
            r#"{"orders": [{"sku": "GHOST", "quantity": 1, "required_by": "2026-03-01", "supplier": "Acme"}]}"#,
        )
        .unwrap();

        let result: Result<Inventory, SourceError> = seed.load_inventory();

        assert!(matches!(result, Err(SourceError::Conversion(_))));
    }

    #[test]
    fn test_seed_with_invalid_field_is_rejected() {
        let result: Result<JsonSeed, SourceError> =
            JsonSeed::parse(r#"{"items": [{"sku": "", "name": "x", "price": "1", "quantity": 1}]}"#);

        assert!(matches!(result, Err(SourceError::Conversion(_))));
    }

    #[test]
    fn test_missing_seed_file_starts_empty() {
        let model: Model = load_model(
            Some(Path::new("/nonexistent/stockroom-seed.json")),
            Permissions::default(),
        )
        .unwrap();

        assert!(model.inventory().items.is_empty());
        assert!(model.staff().is_empty());
    }

    #[test]
    fn test_missing_seed_reports_not_found_to_model() {
        let seed: JsonSeed = JsonSeed::missing();

        assert!(matches!(
            seed.load_sales(&UniqueList::new()),
            Err(SourceError::NotFound(_))
        ));
    }

    #[test]
    fn test_replay_runs_commands_in_order() {
        let mut model: Model = seeded_model();
        let script: &str = r#"
# sell three widgets as the clerk
{"command": "login", "username": "clerk", "password": "secret"}
{"command": "create_sale", "id": 2, "sku": "W-1", "quantity": 3, "date": "2026-02-15"}
{"command": "list_sales"}
"#;

        let (report, transcript) = run(&mut model, script);

        assert_eq!(
            report,
            ReplayReport {
                succeeded: 3,
                rejected: 0,
                malformed: 0,
            }
        );
        assert!(transcript.contains("3: Logged in as Clerk (clerk, user)"));
        let widget: &stockroom_domain::Item = model
            .inventory()
            .item_by_sku(&Sku::new("W-1").unwrap())
            .unwrap();
        assert_eq!(widget.quantity.value(), 7);
    }

    #[test]
    fn test_replay_reports_rejections_and_keeps_going() {
        let mut model: Model = seeded_model();
        let script: &str = concat!(
            r#"{"command": "delete_item", "index": 1}"#,
            "\n",
            "not json\n",
            r#"{"command": "list_items"}"#,
            "\n",
        );

        let (report, transcript) = run(&mut model, script);

        assert_eq!(report.succeeded, 1);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.malformed, 1);
        assert!(!report.is_clean());
        assert!(transcript.contains("1: error: Unauthorized: 'DeleteItem' requires user role"));
        assert!(transcript.contains("2: malformed command"));
        assert_eq!(model.inventory().items.len(), 2);
    }

    #[test]
    fn test_replay_undo_reverts_sale() {
        let mut model: Model = seeded_model();
        let (sender, receiver): (_, Receiver<ModelEvent>) = channel();
        model.add_listener(sender);
        model.add_listener(ChangeLogger);
        let script: &str = r#"
{"command": "login", "username": "clerk", "password": "secret"}
{"command": "create_sale", "id": 2, "sku": "W-1", "quantity": 3, "date": "2026-02-15"}
{"command": "undo"}
"#;

        let (report, _) = run(&mut model, script);

        assert!(report.is_clean());
        assert_eq!(model.inventory().sales.len(), 1);
        assert_eq!(receiver.try_iter().count(), 2);
    }

    #[test]
    fn test_permission_table_from_file() {
        let path: PathBuf = std::env::temp_dir().join(format!(
            "stockroom-permissions-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"list_items": "admin"}"#).unwrap();

        let permissions: Permissions = load_permissions(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            permissions.required_role(stockroom::CommandKind::ListItems),
            Some(stockroom_domain::Role::Admin)
        );
        assert_eq!(
            permissions.required_role(stockroom::CommandKind::AddItem),
            None
        );
    }

    #[test]
    fn test_default_permission_table_without_file() {
        assert_eq!(load_permissions(None).unwrap(), Permissions::default());
    }
}
