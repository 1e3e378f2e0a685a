pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL CHECK (length(title) > 0),
    author TEXT NOT NULL CHECK (length(author) > 0),
    genre JSON NOT NULL DEFAULT '[]'
);
"#;
