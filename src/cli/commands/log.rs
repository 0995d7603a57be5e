use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};

/// Print the internal operation log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if *print {
            let pool = DbPool::new(&cfg.database)?;
            let rows = load_log(&pool.conn)?;

            if rows.is_empty() {
                println!("No log entries found.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("DATE", 32),
                Column::new("OPERATION", 10),
                Column::new("MESSAGE", 48),
            ]);
            for (date, operation, message) in &rows {
                table.add_row(vec![date.clone(), operation.clone(), message.clone()]);
            }
            print!("{}", table.render());
        }
    }
    Ok(())
}
