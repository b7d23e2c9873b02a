//! Splits a reply into deliverable segments.
//!
//! Text is first cut into sentences at whitespace runs that directly follow
//! `.`, `?` or `!`. A sentence that fits is emitted whole. A longer one is
//! packed greedily from whitespace-delimited words, flushing before the next
//! word would overflow. Every segment is a slice of the input: whitespace
//! inside a segment is kept as written and only the run at a cut is
//! dropped. Lengths are counted in characters, not bytes.
//!
//! A single word longer than the limit is emitted as its own segment rather
//! than being cut.

/// Default segment limit in characters.
pub const DEFAULT_MAX_CHUNK_LEN: usize = 500;

/// Sentence-aware segmenter with a fixed length limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseChunker {
    max_len: usize,
}

impl Default for ResponseChunker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHUNK_LEN)
    }
}

impl ResponseChunker {
    /// A limit of zero is treated as one.
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len: max_len.max(1),
        }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Ordered, non-empty segments of `text`. Blank input yields none.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();

        for sentence in split_sentences(text.trim()) {
            if sentence.chars().count() <= self.max_len {
                chunks.push(sentence.to_string());
            } else {
                self.pack_words(sentence, &mut chunks);
            }
        }

        chunks
    }

    /// Packs words greedily into slices of `sentence`. Whitespace between
    /// words of one segment is kept as written; only the run at a flush point
    /// is dropped.
    fn pack_words(&self, sentence: &str, out: &mut Vec<String>) {
        let mut segment: Option<(usize, usize)> = None;
        let mut segment_len = 0;

        for (word_start, word_end) in word_spans(sentence) {
            let word_len = sentence[word_start..word_end].chars().count();

            segment = match segment {
                None => {
                    segment_len = word_len;
                    Some((word_start, word_end))
                }
                Some((start, end)) => {
                    let gap_len = sentence[end..word_start].chars().count();
                    if segment_len + gap_len + word_len > self.max_len {
                        out.push(sentence[start..end].to_string());
                        segment_len = word_len;
                        Some((word_start, word_end))
                    } else {
                        segment_len += gap_len + word_len;
                        Some((start, word_end))
                    }
                }
            };
        }

        if let Some((start, end)) = segment {
            out.push(sentence[start..end].to_string());
        }
    }
}

/// Byte ranges of the whitespace-delimited words in `text`.
fn word_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                spans.push((s, i));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }

    spans
}

fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '?' | '!')
}

/// Cuts at every whitespace run preceded by sentence-ending punctuation.
/// The punctuation stays with its sentence; the run is dropped.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c.is_whitespace() && prev.is_some_and(is_sentence_end) {
            let mut end = i + c.len_utf8();
            while let Some(&(j, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = j + next.len_utf8();
                chars.next();
            }

            sentences.push(&text[start..i]);
            start = end;
            prev = None;
            continue;
        }
        prev = Some(c);
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences.retain(|s| !s.is_empty());
    sentences
}
