//! Paths command handler.
//!
//! Shows resolved configuration without opening the database.

use crate::bootstrap::CliConfig;

/// Print the resolved database path and migration source.
pub fn execute(config: &CliConfig) {
    let database = &config.database;
    println!("Database:        {}", database.database_path.display());
    println!("Migrations:      {}", database.migration_source());
    println!(
        "Clean enabled:   {}",
        if database.clean_enabled { "yes" } else { "no" }
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use megasoft_core::DatabaseConfig;

    #[test]
    fn test_paths_does_not_create_database() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nested").join("megasoft.db");
        let config = CliConfig {
            database: DatabaseConfig::new(&path),
        };

        execute(&config);
        assert!(!path.exists());
    }
}
