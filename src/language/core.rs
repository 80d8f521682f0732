use crate::error::{Error, Result};
use crate::language::Difficulty;
use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;

static LANG_DIR: Dir = include_dir!("src/lang");

/// A bundled word list, ordered from most to least common
#[derive(Deserialize, Clone, Debug)]
pub struct Language {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Language {
    pub fn new(name: &str) -> Result<Self> {
        read_language_from_file(&format!("{name}.json"))
    }

    pub fn english() -> Result<Self> {
        Self::new("english")
    }

    /// Words a session of the given difficulty may draw from
    pub fn pool(&self, difficulty: Difficulty) -> &[String] {
        match difficulty.pool_size() {
            Some(n) => &self.words[..n.min(self.words.len())],
            None => &self.words,
        }
    }
}

fn read_language_from_file(file_name: &str) -> Result<Language> {
    let file = LANG_DIR
        .get_file(file_name)
        .ok_or_else(|| Error::Language(format!("{file_name} not bundled")))?;

    let file_as_str = file
        .contents_utf8()
        .ok_or_else(|| Error::Language(format!("{file_name} is not valid UTF-8")))?;

    from_str(file_as_str).map_err(|e| Error::Language(format!("{file_name}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_english() {
        let lang = Language::english().unwrap();

        assert_eq!(lang.name, "english");
        assert_eq!(lang.size as usize, lang.words.len());
        assert!(lang.words.len() > 200);
    }

    #[test]
    fn test_language_deserialization() {
        let json_data = r#"
        {
            "name": "test",
            "size": 3,
            "words": ["hello", "world", "test"]
        }
        "#;

        let lang: Language = from_str(json_data).expect("Failed to deserialize test language");

        assert_eq!(lang.name, "test");
        assert_eq!(lang.size, 3);
        assert!(lang.words.contains(&"world".to_string()));
    }

    #[test]
    fn test_pool_by_difficulty() {
        let lang = Language::english().unwrap();

        assert_eq!(lang.pool(Difficulty::Easy).len(), 100);
        assert_eq!(lang.pool(Difficulty::Medium).len(), 200);
        assert_eq!(lang.pool(Difficulty::Hard).len(), lang.words.len());
        assert_eq!(lang.pool(Difficulty::Easy)[0], "the");
    }

    #[test]
    fn test_pool_on_short_list() {
        let lang = Language {
            name: "tiny".into(),
            size: 2,
            words: vec!["a".into(), "b".into()],
        };
        assert_eq!(lang.pool(Difficulty::Easy).len(), 2);
    }

    #[test]
    fn test_read_nonexistent_language_file() {
        let result = read_language_from_file("nonexistent.json");
        assert!(matches!(result, Err(Error::Language(_))));
    }
}
