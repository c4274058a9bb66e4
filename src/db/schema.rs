//! SQL DDL for initializing the recipe storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `recipes` and `ingredients` as separate tables (one-to-many)
/// - `AUTOINCREMENT` primary keys so ids are never reused
/// - `ingredients.recipe_id` FK with `ON DELETE CASCADE` (requires the
///   `foreign_keys` pragma, enabled at connect time)
/// - `instructions` as a JSON array serialized into TEXT
/// - dates stored as ISO-8601 TEXT
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS recipes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    instructions TEXT NOT NULL, -- JSON array of steps, serialized as text
    prep_time INTEGER NOT NULL CHECK (prep_time >= 0),
    cook_time INTEGER NOT NULL CHECK (cook_time >= 0),
    servings INTEGER NOT NULL CHECK (servings > 0),
    difficulty TEXT NOT NULL,
    category TEXT NOT NULL,
    image_url TEXT NULL,
    rating INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS ingredients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    recipe_id INTEGER NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
    name TEXT NOT NULL CHECK (length(name) > 0),
    quantity TEXT NOT NULL CHECK (length(quantity) > 0)
);

CREATE INDEX IF NOT EXISTS idx_ingredients_recipe_id ON ingredients(recipe_id);
"#;
