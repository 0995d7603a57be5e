use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

/// Add or list classes.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Class { add, desc, list } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        if let Some(name) = add {
            let id = queries::add_class(&pool.conn, name, desc.as_deref())?;
            success(format!("Class '{}' added with id {}", name, id));
        }

        if *list {
            let classes = queries::list_classes(&pool.conn)?;
            if classes.is_empty() {
                println!("No classes found.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 4),
                Column::new("NAME", 24),
                Column::new("DESCRIPTION", 40),
            ]);
            for class in &classes {
                table.add_row(vec![
                    class.id.to_string(),
                    class.name.clone(),
                    class.description.clone().unwrap_or_default(),
                ]);
            }
            print!("{}", table.render());
        }
    }
    Ok(())
}
