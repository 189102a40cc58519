//! Integration tests against file-backed databases.
//!
//! These exercise the same path the CLI takes: open a file with
//! `setup_database`, compose through `CoreFactory`, migrate, then use the
//! services.

use std::fs;
use std::path::Path;

use megasoft_core::{DatabaseConfig, MigrationError, MigrationPort, MigrationState};
use megasoft_db::{CoreFactory, MigrationSource, SqliteMigrator, setup_database};

const CREATE_CLIENT: &str = "CREATE TABLE IF NOT EXISTS client (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (length(name) BETWEEN 2 AND 100)
);
";

fn write_migration(dir: &Path, file: &str, sql: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(file), sql).unwrap();
}

#[tokio::test]
async fn data_survives_reopen() {
    let temp = tempfile::tempdir().unwrap();
    let config = DatabaseConfig::new(temp.path().join("megasoft.db"));

    let id = {
        let pool = setup_database(&config.database_path).await.unwrap();
        let core = CoreFactory::build_app_core(pool.clone(), &config);
        core.migrations().run(false).await.unwrap();
        let id = core.clients().await.unwrap().create("Persistent").await.unwrap();
        pool.close().await;
        id
    };

    let pool = setup_database(&config.database_path).await.unwrap();
    let core = CoreFactory::build_app_core(pool, &config);
    let report = core.migrations().run(false).await.unwrap();
    assert!(report.applied.is_empty());
    assert_eq!(
        core.clients().await.unwrap().get_by_id(id).await.unwrap(),
        "Persistent"
    );
}

#[tokio::test]
async fn clean_requires_opt_in() {
    let temp = tempfile::tempdir().unwrap();
    let mut config = DatabaseConfig::new(temp.path().join("megasoft.db"));
    let pool = setup_database(&config.database_path).await.unwrap();

    let core = CoreFactory::build_app_core(pool.clone(), &config);
    core.migrations().run(false).await.unwrap();
    core.clients().await.unwrap().create("Keep me").await.unwrap();
    assert!(core.migrations().run(true).await.is_err());
    assert_eq!(core.clients().await.unwrap().list_all().await.unwrap().len(), 1);

    config.clean_enabled = true;
    let core = CoreFactory::build_app_core(pool, &config);
    let report = core.migrations().run(true).await.unwrap();
    assert_eq!(report.applied, vec![1]);
    assert!(core.clients().await.unwrap().list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn directory_source_applies_new_versions() {
    let temp = tempfile::tempdir().unwrap();
    let dir = temp.path().join("migrations");
    write_migration(&dir, "1_create_client_table.sql", CREATE_CLIENT);

    let pool = setup_database(&temp.path().join("megasoft.db")).await.unwrap();
    let migrator =
        SqliteMigrator::new(pool.clone(), MigrationSource::Directory(dir.clone()), false);
    assert_eq!(migrator.migrate().await.unwrap().applied, vec![1]);

    write_migration(
        &dir,
        "2_add_client_email.sql",
        "ALTER TABLE client ADD COLUMN email TEXT;\n",
    );
    let infos = migrator.info().await.unwrap();
    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].state, MigrationState::Success);
    assert_eq!(infos[1].state, MigrationState::Pending);
    assert_eq!(infos[1].description, "add client email");

    let report = migrator.migrate().await.unwrap();
    assert_eq!(report.applied, vec![2]);
    assert_eq!(report.current_version, Some(2));

    sqlx::query("INSERT INTO client (name, email) VALUES ('Mailer', 'm@example.com')")
        .execute(&pool)
        .await
        .unwrap();
}

#[tokio::test]
async fn modified_script_is_reported_outdated() {
    let temp = tempfile::tempdir().unwrap();
    let dir = temp.path().join("migrations");
    write_migration(&dir, "1_create_client_table.sql", CREATE_CLIENT);

    let pool = setup_database(&temp.path().join("megasoft.db")).await.unwrap();
    let migrator = SqliteMigrator::new(pool, MigrationSource::Directory(dir.clone()), false);
    migrator.migrate().await.unwrap();
    migrator.validate().await.unwrap();

    write_migration(
        &dir,
        "1_create_client_table.sql",
        "CREATE TABLE IF NOT EXISTS client (id INTEGER PRIMARY KEY, name TEXT);\n",
    );

    let infos = migrator.info().await.unwrap();
    assert_eq!(infos[0].state, MigrationState::Outdated);
    assert!(matches!(
        migrator.validate().await,
        Err(MigrationError::Validation(_))
    ));
    assert!(matches!(
        migrator.migrate().await,
        Err(MigrationError::Validation(_))
    ));
}

#[tokio::test]
async fn removed_script_is_reported_missing() {
    let temp = tempfile::tempdir().unwrap();
    let dir = temp.path().join("migrations");
    write_migration(&dir, "1_create_client_table.sql", CREATE_CLIENT);
    write_migration(&dir, "2_noop.sql", "SELECT 1;\n");

    let pool = setup_database(&temp.path().join("megasoft.db")).await.unwrap();
    let migrator = SqliteMigrator::new(pool, MigrationSource::Directory(dir.clone()), false);
    migrator.migrate().await.unwrap();

    fs::remove_file(dir.join("2_noop.sql")).unwrap();

    let infos = migrator.info().await.unwrap();
    assert_eq!(infos[1].version, 2);
    assert_eq!(infos[1].state, MigrationState::Missing);
    assert_eq!(infos[1].description, "noop");
}

#[tokio::test]
async fn failed_migration_leaves_no_partial_changes() {
    let temp = tempfile::tempdir().unwrap();
    let dir = temp.path().join("migrations");
    write_migration(&dir, "1_create_client_table.sql", CREATE_CLIENT);
    write_migration(
        &dir,
        "2_broken.sql",
        "CREATE TABLE half (id INTEGER PRIMARY KEY);\nINSERT INTO nope (id) VALUES (1);\n",
    );

    let pool = setup_database(&temp.path().join("megasoft.db")).await.unwrap();
    let migrator = SqliteMigrator::new(pool.clone(), MigrationSource::Directory(dir), false);

    assert!(matches!(
        migrator.migrate().await,
        Err(MigrationError::Execution(_))
    ));

    let half: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'half'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(half, 0);

    let states: Vec<(i64, MigrationState)> = migrator
        .info()
        .await
        .unwrap()
        .iter()
        .map(|i| (i.version, i.state))
        .collect();
    assert_eq!(
        states,
        vec![(1, MigrationState::Success), (2, MigrationState::Pending)]
    );
}
