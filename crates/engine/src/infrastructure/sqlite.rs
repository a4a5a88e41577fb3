//! SQLite-backed player storage.

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use roster_domain::common::datetime_from_millis;
use roster_domain::{Player, PlayerId, Profession, Race};

use crate::infrastructure::ports::{PlayerRepo, RepoError};

const PLAYER_COLUMNS: &str =
    "id, name, title, race, profession, experience, level, until_next_level, birthday, banned";

/// SQLite implementation of [`PlayerRepo`].
///
/// Birthdays are stored as epoch milliseconds and enums by their wire names.
pub struct SqlitePlayerRepo {
    pool: SqlitePool,
}

impl SqlitePlayerRepo {
    /// Open (creating if needed) the database file at `db_path`.
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("player.connect", e))?;
        Self::from_pool(pool).await
    }

    /// Private in-memory database. A single connection keeps every query on
    /// the same database.
    pub async fn in_memory() -> Result<Self, RepoError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| RepoError::database("player.connect", e))?;
        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: SqlitePool) -> Result<Self, RepoError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS player (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                title TEXT NOT NULL,
                race TEXT NOT NULL,
                profession TEXT NOT NULL,
                experience INTEGER NOT NULL,
                level INTEGER NOT NULL,
                until_next_level INTEGER NOT NULL,
                birthday INTEGER NOT NULL,
                banned INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("player.schema", e))?;

        Ok(Self { pool })
    }

    async fn insert(&self, player: &Player) -> Result<PlayerId, RepoError> {
        let result = sqlx::query(
            r#"
            INSERT INTO player
                (name, title, race, profession, experience, level, until_next_level, birthday, banned)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&player.name)
        .bind(&player.title)
        .bind(player.race.as_str())
        .bind(player.profession.as_str())
        .bind(player.experience)
        .bind(player.level)
        .bind(player.until_next_level)
        .bind(player.birthday.timestamp_millis())
        .bind(player.banned)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("player.insert", e))?;

        PlayerId::parse(result.last_insert_rowid())
            .map_err(|e| RepoError::database("player.insert", e))
    }

    async fn upsert(&self, id: PlayerId, player: &Player) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO player
                (id, name, title, race, profession, experience, level, until_next_level, birthday, banned)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                title = excluded.title,
                race = excluded.race,
                profession = excluded.profession,
                experience = excluded.experience,
                level = excluded.level,
                until_next_level = excluded.until_next_level,
                birthday = excluded.birthday,
                banned = excluded.banned
            "#,
        )
        .bind(id.get())
        .bind(&player.name)
        .bind(&player.title)
        .bind(player.race.as_str())
        .bind(player.profession.as_str())
        .bind(player.experience)
        .bind(player.level)
        .bind(player.until_next_level)
        .bind(player.birthday.timestamp_millis())
        .bind(player.banned)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("player.update", e))?;

        Ok(())
    }
}

fn row_to_player(row: &SqliteRow) -> Result<Player, RepoError> {
    let get_err = |e: sqlx::Error| RepoError::serialization(e);

    let id = PlayerId::parse(row.try_get("id").map_err(get_err)?)
        .map_err(RepoError::serialization)?;
    let race: Race = row
        .try_get::<String, _>("race")
        .map_err(get_err)?
        .parse()
        .map_err(RepoError::serialization)?;
    let profession: Profession = row
        .try_get::<String, _>("profession")
        .map_err(get_err)?
        .parse()
        .map_err(RepoError::serialization)?;
    let birthday = datetime_from_millis(row.try_get("birthday").map_err(get_err)?)
        .map_err(RepoError::serialization)?;

    Ok(Player {
        id: Some(id),
        name: row.try_get("name").map_err(get_err)?,
        title: row.try_get("title").map_err(get_err)?,
        race,
        profession,
        experience: row.try_get("experience").map_err(get_err)?,
        level: row.try_get("level").map_err(get_err)?,
        until_next_level: row.try_get("until_next_level").map_err(get_err)?,
        birthday,
        banned: row.try_get("banned").map_err(get_err)?,
    })
}

#[async_trait]
impl PlayerRepo for SqlitePlayerRepo {
    async fn save(&self, player: &Player) -> Result<Player, RepoError> {
        let id = match player.id {
            Some(id) => {
                self.upsert(id, player).await?;
                id
            }
            None => self.insert(player).await?,
        };
        Ok(player.clone().with_id(id))
    }

    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError> {
        let row = sqlx::query(&format!("SELECT {PLAYER_COLUMNS} FROM player WHERE id = ?"))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("player.get", e))?;

        row.as_ref().map(row_to_player).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Player>, RepoError> {
        let rows = sqlx::query(&format!("SELECT {PLAYER_COLUMNS} FROM player"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("player.find_all", e))?;

        rows.iter().map(row_to_player).collect()
    }

    async fn delete(&self, id: PlayerId) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM player WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("player.delete", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Player", id));
        }
        Ok(())
    }
}
