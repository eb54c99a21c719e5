//! E2E 流水线测试
//!
//! 用词表驱动的假 Token 源验证 标点 → 文体 → 误变换检测 → 分段 的完整流程。
//!
//! 运行方式（带详细日志）：
//!   RUST_LOG=debug cargo test --test pipeline_e2e_tests -- --nocapture

use std::io::Write;

use async_trait::async_trait;
use caption_core::{
    analyzer::token::{DETAIL_GENERAL, DETAIL_PROPER_NOUN, POS_NOUN, POS_VERB},
    split_by_pause, split_by_topic_change, Caption, CaptionConfig, CaptionPipeline, CaptionResult,
    CandidateType, PoliteStyle, PunctuationOptions, Segment, SegmentationOptions, StyleOptions, Token, TokenSource,
    UserDictionary, Word,
};

/// 初始化日志（忽略重复初始化错误）
fn init_log() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// 词表：表层形, 读音, 原形, 品词, 细分类
type Entry = (&'static str, &'static str, &'static str, &'static str, &'static str);

const LEXICON: &[Entry] = &[
    ("会議", "カイギ", "会議", POS_NOUN, DETAIL_GENERAL),
    ("資料", "シリョウ", "資料", POS_NOUN, DETAIL_GENERAL),
    ("予算", "ヨサン", "予算", POS_NOUN, DETAIL_GENERAL),
    ("旅行", "リョコウ", "旅行", POS_NOUN, DETAIL_GENERAL),
    ("計画", "ケイカク", "計画", POS_NOUN, DETAIL_GENERAL),
    ("東京", "トウキョウ", "東京", POS_NOUN, DETAIL_PROPER_NOUN),
    ("準備", "ジュンビ", "準備", POS_NOUN, "サ変接続"),
    ("行き", "イキ", "行く", POS_VERB, "自立"),
    ("の", "ノ", "の", "助詞", "連体化"),
    ("を", "ヲ", "を", "助詞", "格助詞"),
];

/// 按词表做最长匹配的 Token 源；词表外的字符跳过
struct LexiconTokens;

#[async_trait]
impl TokenSource for LexiconTokens {
    async fn tokenize(&self, text: &str) -> CaptionResult<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut pos = 0;
        while pos < text.len() {
            let rest = &text[pos..];
            let hit = LEXICON
                .iter()
                .filter(|entry| rest.starts_with(entry.0))
                .max_by_key(|entry| entry.0.len());
            match hit {
                Some(&(surface, reading, base, pos_name, detail)) => {
                    tokens.push(Token::new(surface, reading, base, pos_name, detail, pos));
                    pos += surface.len();
                }
                None => pos += rest.chars().next().map_or(1, char::len_utf8),
            }
        }
        Ok(tokens)
    }
}

fn ids(segments: &[Segment]) -> Vec<String> {
    segments
        .iter()
        .flat_map(|s| s.captions.iter().map(|c| c.id.clone()))
        .collect()
}

/// 12 条字幕，每条 20 秒，第 6 条之后有 5 秒停顿，前后话题不同
fn lecture() -> Vec<Caption> {
    (0..12)
        .map(|i| {
            let offset = if i >= 6 { 5.0 } else { 0.0 };
            let start = i as f64 * 20.0 + offset;
            let text = if i < 6 { "会議の資料と予算" } else { "旅行の計画と東京" };
            Caption::new(format!("c{}", i), text, start, start + 20.0)
        })
        .collect()
}

#[test]
fn test_normalize_with_word_timing() {
    init_log();

    let caption = Caption::new("1", "今日は会議です資料を準備しました", 0.0, 3.0)
        .with_words(vec![
            Word::new("今日は", 0.0, 0.5),
            Word::new("会議です", 0.5, 1.0),
            Word::new("資料を", 2.0, 2.5),
            Word::new("準備しました", 2.5, 3.0),
        ])
        .with_pause_after(1.0);

    let pipeline = CaptionPipeline::default();
    let normalized = pipeline.normalize(std::slice::from_ref(&caption));

    assert_eq!(normalized[0].text, "今日は会議です。\n資料を準備しました。\n");
    assert_eq!(normalized[0].words, caption.words);
}

#[test]
fn test_normalize_to_plain_style() {
    init_log();

    let config = CaptionConfig {
        punctuation: PunctuationOptions::sparse(),
        plain_polite: Some(StyleOptions::new(PoliteStyle::Plain)),
        ..CaptionConfig::default()
    };
    let pipeline = CaptionPipeline::new(config);
    let captions = vec![
        Caption::new("1", "今日は会議です。資料を準備しました", 0.0, 3.0),
        Caption::new("2", "彼は「明日行きます」と言いました", 3.0, 6.0),
    ];
    let normalized = pipeline.normalize(&captions);

    assert_eq!(normalized[0].text, "今日は会議だ。\n資料を準備した。\n");
    assert_eq!(normalized[1].text, "彼は「明日行きます」と言った。\n");
}

#[test]
fn test_normalize_is_stable() {
    let config = CaptionConfig {
        plain_polite: Some(StyleOptions::new(PoliteStyle::Polite)),
        ..CaptionConfig::default()
    };
    let pipeline = CaptionPipeline::new(config);
    let captions = vec![
        Caption::new("1", "明日は会議だ", 0.0, 3.0),
        Caption::new("2", "資料を準備した", 3.0, 6.0),
        Caption::new("3", "これはテストです", 6.0, 9.0),
    ];

    let once = pipeline.normalize(&captions);
    let twice = pipeline.normalize(&once);
    assert_eq!(once, twice);
}

#[tokio::test]
async fn test_review_with_user_dictionary() {
    init_log();

    let pipeline = CaptionPipeline::default();
    let captions = vec![
        Caption::new("1", "会議の資料", 0.0, 2.0),
        Caption::new("2", "東京へ行きます", 2.0, 4.0),
    ];

    let report = pipeline.review(&captions, &LexiconTokens, None).await.unwrap();
    // 东京是固有名词、「行き」是动词，置信度都低于 0.7
    assert_eq!(report.len(), 1);
    let (id, candidates) = &report[0];
    assert_eq!(id, "1");
    assert_eq!(candidates.len(), 4);
    assert!(candidates.iter().all(|c| (0.0..=1.0).contains(&c.confidence)));
    assert!(candidates
        .iter()
        .any(|c| c.candidate_type == CandidateType::Kana && c.suggestion.as_deref() == Some("シリョウ")));

    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    writeln!(file, "# 用户词典").unwrap();
    writeln!(file, "資料 シリョウ").unwrap();

    let mut dictionary = UserDictionary::new();
    dictionary.load_from_file(file.path()).unwrap();

    let report = pipeline
        .review(&captions, &LexiconTokens, Some(&dictionary))
        .await
        .unwrap();
    let (_, candidates) = &report[0];
    assert_eq!(candidates.len(), 2);
    assert!(candidates.iter().all(|c| c.text == "会議"));
}

#[test]
fn test_segment_by_pause_coverage() {
    let options = SegmentationOptions {
        min_segment_duration: 60.0,
        max_segment_duration: 100.0,
        ..SegmentationOptions::default()
    };
    let captions = lecture();
    let segments = split_by_pause(&captions, &options);

    let expected: Vec<String> = captions.iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids(&segments), expected);

    let (_, rest) = segments.split_last().unwrap();
    assert!(rest.iter().all(|s| s.duration() <= 100.0));
    assert!(rest.iter().all(|s| s.duration() >= 60.0));
}

#[tokio::test]
async fn test_segment_by_topic_coverage() {
    init_log();

    let options = SegmentationOptions {
        min_segment_duration: 60.0,
        context_window_size: 3,
        ..SegmentationOptions::default()
    };
    let captions = lecture();
    let segments = split_by_topic_change(&captions, &options, &LexiconTokens)
        .await
        .unwrap();

    let expected: Vec<String> = captions.iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids(&segments), expected);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].captions.len(), 6);
    assert_eq!(segments[0].topic.as_deref(), Some("会議・資料・予算"));
    assert_eq!(segments[1].topic.as_deref(), Some("旅行・計画・東京"));
    assert!(segments.iter().all(|s| s.duration() <= 300.0));
}

#[tokio::test]
async fn test_pipeline_segment_by_topic() {
    let mut config = CaptionConfig::default();
    config.segmentation.context_window_size = 3;
    let pipeline = CaptionPipeline::new(config);

    let segments = pipeline.segment_by_topic(&lecture(), &LexiconTokens).await.unwrap();
    assert_eq!(segments.len(), 2);

    let segments = pipeline.segment_by_pause(&lecture());
    // 第一段只有 120 秒，停顿处达到最短时长
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].end_time, 120.0);
}

#[test]
fn test_segments_serialize_camel_case() {
    let segments = split_by_pause(&lecture()[..2], &SegmentationOptions::default());
    let json = serde_json::to_value(&segments).unwrap();
    assert_eq!(json[0]["startTime"], 0.0);
    assert_eq!(json[0]["captions"][1]["endTime"], 40.0);
}
