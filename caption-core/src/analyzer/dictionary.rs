//! 用户词典
//!
//! 误转换检测时跳过用户登记的词汇。支持 dictionary.txt 和 dictionary.toml 两种格式。
//! 文件里的读音列只为兼容输入法词典导出格式，加载时丢弃。

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{CaptionError, CaptionResult};

/// 用户词典查询接口
pub trait CustomDictionary: Send + Sync {
    fn contains(&self, surface: &str) -> bool;
}

impl CustomDictionary for HashSet<String> {
    fn contains(&self, surface: &str) -> bool {
        HashSet::contains(self, surface)
    }
}

impl CustomDictionary for Vec<String> {
    fn contains(&self, surface: &str) -> bool {
        self.iter().any(|s| s == surface)
    }
}

/// 文件型用户词典（按表层形登记）
#[derive(Debug, Clone)]
pub struct UserDictionary {
    entries: HashSet<String>,
    file_path: Option<PathBuf>,
    max_entries: usize,
}

impl UserDictionary {
    pub fn new() -> Self {
        Self {
            entries: HashSet::new(),
            file_path: None,
            max_entries: 50000,
        }
    }

    /// 从文件加载（按扩展名选择格式）
    pub fn load_from_file(&mut self, path: &Path) -> CaptionResult<()> {
        let entries = Self::load_file(path)?;

        if entries.len() > self.max_entries {
            return Err(CaptionError::Dictionary(format!(
                "Too many entries: {} > {}",
                entries.len(),
                self.max_entries
            )));
        }

        tracing::info!("📖 用户词典加载完成: {} 条 ({:?})", entries.len(), path);
        self.entries = entries;
        self.file_path = Some(path.to_path_buf());
        Ok(())
    }

    /// 解析文本格式
    ///
    /// ```text
    /// # 注释
    /// 表层形 [读音]
    /// 議事録 ギジロク
    /// 山田太郎
    /// ```
    pub fn parse_txt(content: &str) -> CaptionResult<HashSet<String>> {
        let mut entries = HashSet::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts.as_slice() {
                [surface] | [surface, _] => {
                    entries.insert(surface.to_string());
                }
                _ => {
                    return Err(CaptionError::Dictionary(format!(
                        "Invalid entry at line {}: '{}'",
                        line_num + 1,
                        line
                    )));
                }
            }
        }

        Ok(entries)
    }

    /// 解析 TOML 格式（分组后合并）
    ///
    /// ```toml
    /// [people]
    /// "山田太郎" = "ヤマダタロウ"
    ///
    /// [terms]
    /// "議事録" = ""
    /// ```
    pub fn parse_toml(content: &str) -> CaptionResult<HashSet<String>> {
        use toml::Value;

        let value: Value = content
            .parse()
            .map_err(|e| CaptionError::Dictionary(format!("Failed to parse TOML: {}", e)))?;

        let mut entries = HashSet::new();

        if let Some(table) = value.as_table() {
            for (group_name, group_value) in table {
                let Some(group_table) = group_value.as_table() else {
                    continue;
                };
                for (surface, reading) in group_table {
                    if !reading.is_str() {
                        return Err(CaptionError::Dictionary(format!(
                            "Reading for '{}' in group '{}' must be a string",
                            surface, group_name
                        )));
                    }
                    entries.insert(surface.clone());
                }
            }
        }

        Ok(entries)
    }

    /// 读取词典文件（自动检测格式）
    pub fn load_file(path: &Path) -> CaptionResult<HashSet<String>> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CaptionError::Dictionary(format!("Failed to read dictionary file: {}", e))
        })?;

        if path.extension().is_some_and(|ext| ext == "toml") {
            return Self::parse_toml(&content);
        }

        Self::parse_txt(&content)
    }

    pub fn add_entry(&mut self, surface: String) -> CaptionResult<()> {
        if surface.trim().is_empty() {
            return Err(CaptionError::Dictionary("Empty surface".to_string()));
        }

        if self.entries.len() >= self.max_entries && !self.entries.contains(&surface) {
            return Err(CaptionError::Dictionary(format!(
                "Max entries limit reached: {}",
                self.max_entries
            )));
        }

        self.entries.insert(surface);
        Ok(())
    }

    pub fn remove_entry(&mut self, surface: &str) -> bool {
        self.entries.remove(surface)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn set_max_entries(&mut self, max: usize) {
        self.max_entries = max;
    }
}

impl Default for UserDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomDictionary for UserDictionary {
    fn contains(&self, surface: &str) -> bool {
        self.entries.contains(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_parse_txt_basic() {
        let content = r#"
# 固有名词
山田太郎 ヤマダタロウ
議事録
        "#;

        let entries = UserDictionary::parse_txt(content).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.contains("山田太郎"));
        assert!(entries.contains("議事録"));
        assert!(!entries.contains("ヤマダタロウ"));
    }

    #[test]
    fn test_parse_txt_too_many_columns() {
        assert!(UserDictionary::parse_txt("議事録 ギジロク 余分").is_err());
    }

    #[test]
    fn test_parse_toml_merges_groups() {
        let content = r#"
[people]
"山田太郎" = "ヤマダタロウ"

[terms]
"議事録" = ""
"#;
        let entries = UserDictionary::parse_toml(content).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.contains("議事録"));
        assert!(!entries.contains("ヤマダタロウ"));
    }

    #[test]
    fn test_parse_toml_invalid_reading() {
        let content = "[terms]\n\"議事録\" = 3\n";
        assert!(UserDictionary::parse_toml(content).is_err());
    }

    #[test]
    fn test_load_from_txt_file() {
        let mut file = Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "# test").unwrap();
        writeln!(file, "令和 レイワ").unwrap();
        file.flush().unwrap();

        let mut dict = UserDictionary::new();
        dict.load_from_file(file.path()).unwrap();
        assert_eq!(dict.count(), 1);
        assert!(dict.contains("令和"));
        assert!(!dict.contains("レイワ"));
        assert_eq!(dict.file_path(), Some(file.path()));
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[names]\n\"佐藤\" = \"サトウ\"").unwrap();
        file.flush().unwrap();

        let mut dict = UserDictionary::new();
        dict.load_from_file(file.path()).unwrap();
        assert!(dict.contains("佐藤"));
    }

    #[test]
    fn test_add_remove_and_limit() {
        let mut dict = UserDictionary::new();
        dict.set_max_entries(1);
        dict.add_entry("会議".to_string()).unwrap();
        assert!(dict.add_entry("資料".to_string()).is_err());
        // 重复登记已有词条不受上限限制
        dict.add_entry("会議".to_string()).unwrap();

        assert!(dict.remove_entry("会議"));
        assert!(!dict.remove_entry("会議"));
        assert!(dict.add_entry("  ".to_string()).is_err());
    }

    #[test]
    fn test_set_and_vec_dictionaries() {
        let set: HashSet<String> = ["東京".to_string()].into_iter().collect();
        assert!(CustomDictionary::contains(&set, "東京"));
        let list = vec!["大阪".to_string()];
        assert!(CustomDictionary::contains(&list, "大阪"));
        assert!(!CustomDictionary::contains(&list, "東京"));
    }

    fn assert_shareable<T: Send + Sync + ?Sized>() {}

    #[test]
    fn test_dictionary_is_shareable_across_threads() {
        assert_shareable::<dyn CustomDictionary>();
        assert_shareable::<UserDictionary>();
    }
}
