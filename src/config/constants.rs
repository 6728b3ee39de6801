// Shared configuration constants

/// Default HTTP port when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Default completion model served by Groq.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Sampling temperature for chat completions.
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Default student records file, resolved against the working directory.
pub const DEFAULT_DATA_FILE: &str = "students.json";

/// Default directory for the static landing page.
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Default directory served under `/assets`.
pub const DEFAULT_ASSETS_DIR: &str = "assets";
