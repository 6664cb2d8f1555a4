use crate::cli::parser::{Commands, DocAction};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::del::DeleteLogic;
use crate::core::interval::DateRange;
use crate::core::status::document_status;
use crate::db::log::audit_or_warn;
use crate::db::store::CollectionStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Attachment, DocKind, TrainingDocument, new_id};
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{colorize_optional, paint};
use crate::utils::date::{parse_date_arg, parse_optional_date};
use crate::utils::formatting::{format_optional_date, short_id};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

fn kind_arg(raw: &str) -> AppResult<DocKind> {
    DocKind::from_code(raw).ok_or_else(|| AppError::InvalidCategory(raw.to_string()))
}

/// Expiry before issue is rejected like any reversed range.
fn check_dates(issue: NaiveDate, expiry: Option<NaiveDate>) -> AppResult<()> {
    if let Some(expiry) = expiry {
        DateRange::new(issue, expiry)?;
    }
    Ok(())
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    let Commands::Doc { action } = cmd else {
        return Ok(());
    };

    let pool = super::open_logbook(cfg)?;

    match action {
        DocAction::Add {
            name,
            kind,
            institution,
            issued,
            expires,
            number,
            notes,
            attach,
        } => {
            let kind = kind_arg(kind)?;
            let issue_date = parse_date_arg(issued)?;
            let expiry_date = parse_optional_date(expires.as_ref())?;
            check_dates(issue_date, expiry_date)?;

            // Read (and size-check) the file before anything is stored.
            let attachment = attach
                .as_deref()
                .map(|p| Attachment::from_file(Path::new(p)))
                .transpose()?;

            let doc = AddLogic::save(
                &pool,
                TrainingDocument {
                    id: new_id(),
                    name: name.trim().to_string(),
                    kind,
                    institution: institution.trim().to_string(),
                    issue_date,
                    expiry_date,
                    doc_number: non_empty(number.as_ref()),
                    notes: notes.clone(),
                    attachment,
                },
                "add",
            )?;

            let status = document_status(doc.expiry_date, today);
            success(format!(
                "Document {} {} saved ({}).",
                short_id(&doc.id),
                doc.name,
                paint(status.color(), status.label())
            ));
        }

        DocAction::Edit {
            id,
            name,
            kind,
            institution,
            issued,
            expires,
            no_expiry,
            number,
            notes,
            attach,
            detach,
        } => {
            let current = CollectionStore::<TrainingDocument>::new(&pool).resolve(id)?;

            let issue_date = parse_optional_date(issued.as_ref())?.unwrap_or(current.issue_date);
            let expiry_date = if *no_expiry {
                None
            } else {
                parse_optional_date(expires.as_ref())?.or(current.expiry_date)
            };
            check_dates(issue_date, expiry_date)?;

            let attachment = match (attach.as_deref(), *detach) {
                (Some(p), _) => Some(Attachment::from_file(Path::new(p))?),
                (None, true) => None,
                (None, false) => current.attachment,
            };

            let updated = TrainingDocument {
                id: current.id,
                name: name.clone().unwrap_or(current.name),
                kind: kind.as_deref().map(kind_arg).transpose()?.unwrap_or(current.kind),
                institution: institution.clone().unwrap_or(current.institution),
                issue_date,
                expiry_date,
                doc_number: match number {
                    Some(_) => non_empty(number.as_ref()),
                    None => current.doc_number,
                },
                notes: notes.clone().unwrap_or(current.notes),
                attachment,
            };

            let updated = AddLogic::save(&pool, updated, "edit")?;
            success(format!("Document {} updated.", short_id(&updated.id)));
        }

        DocAction::List { kind } => {
            let filter = kind.as_deref().map(kind_arg).transpose()?;
            let docs: Vec<TrainingDocument> = CollectionStore::<TrainingDocument>::new(&pool)
                .list()?
                .into_iter()
                .filter(|d| filter.is_none_or(|k| d.kind == k))
                .collect();

            if docs.is_empty() {
                info("No documents found.");
                return Ok(());
            }

            header("📑", "Documents and certificates");

            let mut table = Table::new(vec![
                Column::new("ID", 8),
                Column::new("NAME", 30),
                Column::new("TYPE", 11),
                Column::new("INSTITUTION", 20),
                Column::new("ISSUED", 10),
                Column::new("EXPIRES", 10),
                Column::new("NUMBER", 14),
                Column::new("STATUS", 8),
                Column::new("FILE", 20),
            ])
            .with_separator(&cfg.separator_char);

            for d in &docs {
                let status = document_status(d.expiry_date, today);
                table.add_row(vec![
                    short_id(&d.id).to_string(),
                    d.name.clone(),
                    d.kind.code().to_string(),
                    colorize_optional(&d.institution),
                    format_optional_date(Some(d.issue_date), &cfg.date_format, "--"),
                    colorize_optional(&format_optional_date(
                        d.expiry_date,
                        &cfg.date_format,
                        "",
                    )),
                    colorize_optional(d.doc_number.as_deref().unwrap_or("")),
                    paint(status.color(), status.label()),
                    colorize_optional(d.attachment.as_ref().map_or("", |a| a.name.as_str())),
                ]);
            }
            println!("{}", table.render());
        }

        DocAction::Del { id } => {
            let removed: TrainingDocument = DeleteLogic::apply(&pool, id)?;
            success(format!(
                "Document {} ({}) deleted.",
                short_id(&removed.id),
                removed.name
            ));
        }

        DocAction::Attachment { id, out } => {
            let doc = CollectionStore::<TrainingDocument>::new(&pool).resolve(id)?;
            let attachment = doc
                .attachment
                .as_ref()
                .ok_or_else(|| AppError::NoAttachment(doc.name.clone()))?;

            let bytes = attachment.decode()?;
            fs::write(out, &bytes)?;

            audit_or_warn(
                &pool.conn,
                "export",
                out,
                &format!("Attachment {} of document {}", attachment.name, doc.id),
            );
            success(format!(
                "Attachment {} ({} bytes) written to {}",
                attachment.name,
                bytes.len(),
                out
            ));
        }
    }

    Ok(())
}
