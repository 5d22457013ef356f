use crate::cli::commands::open_session;
use crate::cli::parser::{Commands, TemplateAction};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::classification::Classification;
use crate::models::location::Location;
use crate::ui::messages::{info, success, warning};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Template { action } = cmd {
        let mut session = open_session(cfg)?;

        match action {
            TemplateAction::List => {
                if session.templates().is_empty() {
                    info("No templates defined.");
                    return Ok(());
                }
                let mut table = Table::new(vec![
                    Column::new("Episode", 24),
                    Column::new("Classification", 60),
                    Column::new("Location", 20),
                ]);
                for (name, t) in session.templates().list() {
                    table.add_row(vec![
                        name.to_string(),
                        t.classification.to_string(),
                        t.location.display(),
                    ]);
                }
                print!("{}", table.render());
            }

            TemplateAction::Show { name } => {
                let t = session
                    .templates()
                    .lookup(name)
                    .ok_or_else(|| AppError::NotFound(format!("template '{name}'")))?;
                println!("Episode:   {}", name.trim());
                println!("Category:  {}", t.classification);
                println!("Location:  {}", t.location.display());
            }

            TemplateAction::Set {
                name,
                class,
                location,
            } => {
                let classification = class
                    .to_classification()?
                    .unwrap_or_else(Classification::unclassified);
                let place = location.as_deref().map(Location::named);
                let t = session.save_template(name, classification, place)?;
                success(format!("Template '{}' saved: {}", name.trim(), t.classification));
            }

            TemplateAction::Del { name } => {
                if session.delete_template(name)? {
                    success(format!("Template '{}' deleted.", name.trim()));
                } else {
                    warning(format!("Template '{}' not found.", name.trim()));
                }
            }
        }
    }
    Ok(())
}
