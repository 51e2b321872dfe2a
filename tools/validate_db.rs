use anyhow::Context;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::env;

use arcade_assets::domain::input_sanitization::{DenylistSanitizer, QuerySanitizer, Validator};
use arcade_assets::domain::value_objects::{AssetKind, PlayerName};

/// Scan stored documents for rows the API would refuse to write
#[derive(Parser)]
struct Cli {
    #[arg(long)]
    database_url: Option<String>,

    /// Delete invalid asset rows and sanitize or delete invalid score rows
    #[arg(long)]
    fix: bool,
}

async fn check_assets(pool: &PgPool, kind: AssetKind, fix: bool) -> anyhow::Result<usize> {
    let rows = sqlx::query(&format!(
        "SELECT id, filename FROM {} ORDER BY id",
        kind.collection()
    ))
    .fetch_all(pool)
    .await?;

    let mut invalid = 0;
    for r in rows.iter() {
        let id: String = r.get("id");
        let filename: String = r.get("filename");
        let id = id.trim_end();

        let problem = if !Validator::is_valid_document_id(id) {
            Some("invalid id")
        } else if !kind.accepts(Some(&filename)) {
            Some("disallowed file type")
        } else {
            None
        };

        if let Some(problem) = problem {
            invalid += 1;
            println!("{} {}: {} ({})", kind.collection(), id, filename, problem);
            if fix {
                sqlx::query(&format!("DELETE FROM {} WHERE id = $1", kind.collection()))
                    .bind(id)
                    .execute(pool)
                    .await?;
                println!("Deleted: {}", id);
            }
        }
    }

    println!("Invalid {} rows: {}", kind.collection(), invalid);
    Ok(invalid)
}

async fn check_scores(pool: &PgPool, fix: bool) -> anyhow::Result<usize> {
    let sanitizer = DenylistSanitizer::default();
    let rows = sqlx::query("SELECT id, player_name, score FROM scores ORDER BY id")
        .fetch_all(pool)
        .await?;

    let mut invalid = 0;
    for r in rows.iter() {
        let id: String = r.get("id");
        let player_name: String = r.get("player_name");
        let score: i64 = r.get("score");
        let id = id.trim_end();

        let name_ok = !sanitizer.contains_blocked_patterns(&player_name)
            && PlayerName::new(player_name.as_str()).is_ok();
        if Validator::is_valid_document_id(id) && name_ok && score >= 0 {
            continue;
        }

        invalid += 1;
        println!("scores {}: {:?} = {}", id, player_name, score);
        if !fix {
            continue;
        }

        let cleaned = sanitizer.sanitize(&player_name);
        let repairable = Validator::is_valid_document_id(id)
            && score >= 0
            && PlayerName::new(cleaned.as_str()).is_ok();
        if repairable {
            sqlx::query("UPDATE scores SET player_name = $2 WHERE id = $1")
                .bind(id)
                .bind(&cleaned)
                .execute(pool)
                .await?;
            println!("Fixed: {} -> {:?}", id, cleaned);
        } else {
            sqlx::query("DELETE FROM scores WHERE id = $1")
                .bind(id)
                .execute(pool)
                .await?;
            println!("Deleted: {}", id);
        }
    }

    println!("Invalid score rows: {}", invalid);
    Ok(invalid)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let db_url = cli
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .or_else(|| env::var("EnvVariable").ok())
        .context("DATABASE_URL must be set or passed with --database-url")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await
        .context("Failed to connect to database")?;

    let mut total = 0;
    total += check_assets(&pool, AssetKind::Sprite, cli.fix).await?;
    total += check_assets(&pool, AssetKind::Audio, cli.fix).await?;
    total += check_scores(&pool, cli.fix).await?;

    if total == 0 {
        println!("All documents valid");
    } else if !cli.fix {
        println!("{} invalid documents; rerun with --fix to repair", total);
    }

    Ok(())
}
