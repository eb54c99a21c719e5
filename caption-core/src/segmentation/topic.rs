//! 按话题变化分段
//!
//! 累积到窗口大小后，比较当前位置前后各 `context_window_size` 条字幕的
//! 内容词（名词 / 动词 / 形容词原形）集合，Jaccard 相似度低于阈值即视为话题切换。

use std::collections::{HashMap, HashSet};

use crate::analyzer::token::{DETAIL_NON_INDEPENDENT, DETAIL_NUMBER, DETAIL_PRONOUN};
use crate::analyzer::{Token, TokenSource};
use crate::caption::{Caption, Segment};
use crate::error::CaptionResult;
use crate::segmentation::config::SegmentationOptions;
use crate::segmentation::{Boundary, SegmentAccumulator};

/// 话题标签最多包含的名词数
const MAX_TOPIC_WORDS: usize = 3;
const TOPIC_SEPARATOR: &str = "・";

/// 按话题变化切分字幕列表
///
/// 字幕数不足窗口大小时不做相似度判定，只受时长上限约束。
pub async fn split_by_topic_change(
    captions: &[Caption],
    options: &SegmentationOptions,
    tokens: &dyn TokenSource,
) -> CaptionResult<Vec<Segment>> {
    let window = options.context_window_size.max(1);
    let mut segments = Vec::new();
    let mut acc = SegmentAccumulator::new(options);

    for (i, caption) in captions.iter().enumerate() {
        acc.push(caption);

        let boundary = match captions.get(i + 1) {
            None => Boundary::End,
            Some(next) if acc.would_exceed_max(next) => Boundary::MaxDuration,
            Some(_) if acc.captions().len() >= window => {
                let before = &captions[i + 1 - window..=i];
                let after = &captions[i + 1..(i + 1 + window).min(captions.len())];
                let similarity = jaccard(&keywords(before, tokens).await?, &keywords(after, tokens).await?);

                if similarity >= options.topic_similarity_threshold {
                    continue;
                }
                tracing::debug!(
                    "  🔀 话题变化 @ {}: 相似度 {:.2} < {:.2}",
                    caption.id,
                    similarity,
                    options.topic_similarity_threshold
                );
                Boundary::Soft
            }
            Some(_) => continue,
        };

        if let Some(closed) = acc.close(boundary) {
            let topic = topic_label(&closed, tokens).await?;
            segments.push(Segment::from_captions(closed, topic));
        }
    }

    tracing::debug!("✂️ 按话题分段: {} 条字幕 → {} 段", captions.len(), segments.len());
    Ok(segments)
}

/// Jaccard 相似度；并集为空时为 0
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// 分段话题标签：出现次数最多的名词（最多 3 个），次数相同按首次出现排序
pub async fn topic_label(captions: &[Caption], tokens: &dyn TokenSource) -> CaptionResult<Option<String>> {
    let analyzed = tokens.tokenize(&joined_text(captions)).await?;

    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (order, token) in analyzed.iter().filter(|t| is_topic_noun(t)).enumerate() {
        counts.entry(token.lemma()).or_insert((0, order)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> =
        counts.into_iter().map(|(word, (count, first))| (word, count, first)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    let words: Vec<&str> = ranked.iter().take(MAX_TOPIC_WORDS).map(|(w, _, _)| *w).collect();
    if words.is_empty() {
        Ok(None)
    } else {
        Ok(Some(words.join(TOPIC_SEPARATOR)))
    }
}

/// 语境中的内容词原形集合
async fn keywords(captions: &[Caption], tokens: &dyn TokenSource) -> CaptionResult<HashSet<String>> {
    if captions.is_empty() {
        return Ok(HashSet::new());
    }
    let analyzed = tokens.tokenize(&joined_text(captions)).await?;
    Ok(analyzed
        .iter()
        .filter(|t| t.is_content_word())
        .map(|t| t.lemma().to_string())
        .collect())
}

fn is_topic_noun(token: &Token) -> bool {
    token.is_noun()
        && !matches!(
            token.part_of_speech_detail.as_str(),
            DETAIL_NON_INDEPENDENT | DETAIL_PRONOUN | DETAIL_NUMBER
        )
}

/// 字幕之间以换行连接，避免跨字幕拼出新词
fn joined_text(captions: &[Caption]) -> String {
    captions.iter().map(|c| c.text.as_str()).collect::<Vec<_>>().join("\n")
}
