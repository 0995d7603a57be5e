use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

/// Add or list staff members.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Staff { add, email, list } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        if let Some(name) = add {
            let id = queries::add_staff(&pool.conn, name, email.as_deref())?;
            success(format!("Staff member '{}' added with id {}", name, id));
        }

        if *list {
            let staff = queries::list_staff(&pool.conn)?;
            if staff.is_empty() {
                println!("No staff members found.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 4),
                Column::new("NAME", 28),
                Column::new("EMAIL", 30),
            ]);
            for member in &staff {
                table.add_row(vec![
                    member.id.to_string(),
                    member.full_name.clone(),
                    member.email.clone().unwrap_or_default(),
                ]);
            }
            print!("{}", table.render());
        }
    }
    Ok(())
}
