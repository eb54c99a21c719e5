//! 字幕引擎配置模块
//!
//! 统一的配置管理，从 ~/.config/caption-core/config.toml 加载

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CaptionError, CaptionResult};
use crate::misconversion::MisconversionOptions;
use crate::punctuation::PunctuationOptions;
use crate::segmentation::SegmentationOptions;
use crate::style::{SpeechStyleOptions, StyleOptions};

/// 字幕引擎完整配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionConfig {
    /// 标点配置
    pub punctuation: PunctuationOptions,
    /// 常体 / 敬体转换；未配置时跳过
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain_polite: Option<StyleOptions>,
    /// 四级敬语转换；未配置时跳过
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech: Option<SpeechStyleOptions>,
    /// 误变换检测配置
    pub misconversion: MisconversionOptions,
    /// 分段配置
    pub segmentation: SegmentationOptions,
}

impl CaptionConfig {
    /// 加载默认位置的配置文件；文件不存在时使用默认配置
    pub fn load() -> CaptionResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", config_path);
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// 从指定路径加载
    pub fn load_from(path: &Path) -> CaptionResult<Self> {
        if !path.exists() {
            return Err(CaptionError::ConfigNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content, &path.display().to_string())?;

        tracing::info!("📋 加载配置成功: {:?}", path);
        tracing::info!(
            "📊 标点配置: max_sentence_length={}, min_comma_interval={}, pause={:?}",
            config.punctuation.max_sentence_length,
            config.punctuation.min_comma_interval,
            config.punctuation.pause_threshold
        );
        Ok(config)
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(content: &str) -> CaptionResult<Self> {
        Self::parse(content, "<inline>")
    }

    /// 保存到指定路径（自动创建目录）
    pub fn save_to(&self, path: &Path) -> CaptionResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| CaptionError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, content)?;

        tracing::info!("保存配置成功: {:?}", path);
        Ok(())
    }

    /// 保存到默认位置
    pub fn save(&self) -> CaptionResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// 获取配置文件路径
    pub fn config_path() -> CaptionResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CaptionError::Generic("无法获取配置目录".to_string()))?;

        Ok(config_dir.join("caption-core").join("config.toml"))
    }

    fn parse(content: &str, origin: &str) -> CaptionResult<Self> {
        toml::from_str(content).map_err(|e| CaptionError::ConfigParse {
            path: origin.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{PoliteStyle, SpeechStyle};

    #[test]
    fn test_default_config() {
        let config = CaptionConfig::default();
        assert_eq!(config.punctuation.max_sentence_length, 30);
        assert!(config.plain_polite.is_none());
        assert!(config.speech.is_none());
        assert_eq!(config.misconversion.min_confidence, 0.7);
        assert_eq!(config.segmentation.pause_threshold, 2.0);
    }

    #[test]
    fn test_partial_toml() {
        let config = CaptionConfig::from_toml_str(
            r#"
            [punctuation]
            max_sentence_length = 20

            [plain_polite]
            target_style = "plain"

            [speech]
            target_style = "humble"
            formality_level = 0.9
            "#,
        )
        .unwrap();

        assert_eq!(config.punctuation.max_sentence_length, 20);
        assert_eq!(config.punctuation.min_comma_interval, 10);
        assert_eq!(config.plain_polite.unwrap().target_style, PoliteStyle::Plain);
        let speech = config.speech.unwrap();
        assert_eq!(speech.target_style, SpeechStyle::Humble);
        assert!(speech.preserve_quotations);
        assert_eq!(config.segmentation.max_segment_duration, 300.0);
    }

    #[test]
    fn test_invalid_toml() {
        let err = CaptionConfig::from_toml_str("[punctuation\nmax = ").unwrap_err();
        assert!(matches!(err, CaptionError::ConfigParse { .. }));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = CaptionConfig::default();
        config.punctuation = PunctuationOptions::dense();
        config.speech = Some(SpeechStyleOptions::new(SpeechStyle::Respectful));
        config.save_to(&path).unwrap();

        let loaded = CaptionConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CaptionConfig::load_from(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, CaptionError::ConfigNotFound(_)));
    }
}
