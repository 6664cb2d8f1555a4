use crate::cli::parser::{Commands, NoteAction};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::del::DeleteLogic;
use crate::db::store::CollectionStore;
use crate::errors::{AppError, AppResult};
use crate::models::{DiaryNote, NoteCategory, new_id};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{CYAN, GREY, MAGENTA, RESET};
use crate::utils::formatting::short_id;
use chrono::Local;

const BODY_WIDTH: usize = 72;

fn category_arg(raw: &str) -> AppResult<NoteCategory> {
    NoteCategory::from_code(raw).ok_or_else(|| AppError::InvalidCategory(raw.to_string()))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Note { action } = cmd else {
        return Ok(());
    };

    let pool = super::open_logbook(cfg)?;

    match action {
        NoteAction::Add {
            content,
            category,
            tags,
        } => {
            if content.trim().is_empty() {
                warning("Empty note, nothing saved.");
                return Ok(());
            }

            let note = AddLogic::save(
                &pool,
                DiaryNote {
                    id: new_id(),
                    timestamp: Local::now(),
                    category: category_arg(category)?,
                    content: content.trim().to_string(),
                    tags: DiaryNote::normalize_tags(tags),
                },
                "add",
            )?;

            success(format!(
                "Note {} saved in {}.",
                short_id(&note.id),
                note.category.code()
            ));
        }

        NoteAction::List { tag, category } => {
            let category = category.as_deref().map(category_arg).transpose()?;
            let tag = tag.as_deref().and_then(|t| {
                DiaryNote::normalize_tags([t]).into_iter().next()
            });

            let notes: Vec<DiaryNote> = CollectionStore::<DiaryNote>::new(&pool)
                .list()?
                .into_iter()
                .filter(|n| category.is_none_or(|c| n.category == c))
                .filter(|n| tag.as_ref().is_none_or(|t| n.tags.contains(t)))
                .collect();

            if notes.is_empty() {
                info("No notes found.");
                return Ok(());
            }

            header("📝", "Diary");

            for n in &notes {
                let tags = n
                    .tags
                    .iter()
                    .map(|t| format!("#{t}"))
                    .collect::<Vec<_>>()
                    .join(" ");

                println!(
                    "{GREY}{}{RESET}  {}  {CYAN}{}{RESET}  {MAGENTA}{}{RESET}",
                    short_id(&n.id),
                    n.timestamp.format("%Y-%m-%d %H:%M"),
                    n.category.code(),
                    tags
                );

                let options = textwrap::Options::new(BODY_WIDTH)
                    .initial_indent("    ")
                    .subsequent_indent("    ");
                for line in textwrap::wrap(&n.content, &options) {
                    println!("{line}");
                }
                println!();
            }
        }

        NoteAction::Del { id } => {
            let removed: DiaryNote = DeleteLogic::apply(&pool, id)?;
            success(format!("Note {} deleted.", short_id(&removed.id)));
        }
    }

    Ok(())
}
