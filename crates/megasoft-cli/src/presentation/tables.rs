//! Table formatting utilities for CLI output.

use megasoft_core::{Client, MigrationInfo};

const CLIENT_NAME_WIDTH: usize = 48;
const DESCRIPTION_WIDTH: usize = 36;

/// Truncates a string to a maximum number of characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use megasoft_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// One line of the clients table.
pub fn format_client_row(client: &Client) -> String {
    format!(
        "{:>6}  {}",
        client.id,
        truncate_string(&client.name, CLIENT_NAME_WIDTH)
    )
}

/// Print clients as a table.
pub fn print_clients(clients: &[Client]) {
    if clients.is_empty() {
        println!("No clients found.");
        return;
    }

    println!("{:>6}  NAME", "ID");
    print_separator(8 + CLIENT_NAME_WIDTH);
    for client in clients {
        println!("{}", format_client_row(client));
    }
    println!();
    println!("{} client(s)", clients.len());
}

/// One line of the migrations table.
pub fn format_migration_row(info: &MigrationInfo) -> String {
    let installed = info.installed_on.map_or_else(
        || "-".to_string(),
        |ts| ts.format("%Y-%m-%d %H:%M:%S").to_string(),
    );
    format!(
        "{:>7}  {:<width$}  {:<8}  {}",
        info.version,
        truncate_string(&info.description, DESCRIPTION_WIDTH),
        info.state.as_str(),
        installed,
        width = DESCRIPTION_WIDTH
    )
}

/// Print migration info as a table.
pub fn print_migrations(infos: &[MigrationInfo]) {
    if infos.is_empty() {
        println!("No migrations found.");
        return;
    }

    println!(
        "{:>7}  {:<width$}  {:<8}  INSTALLED ON",
        "VERSION",
        "DESCRIPTION",
        "STATE",
        width = DESCRIPTION_WIDTH
    );
    print_separator(7 + 2 + DESCRIPTION_WIDTH + 2 + 8 + 2 + 19);
    for info in infos {
        println!("{}", format_migration_row(info));
    }
}
