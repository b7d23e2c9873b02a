//! Typing-style reveal of an already computed chunk.
//!
//! Purely presentational: it paces text that the engine has finished with and
//! never feeds back into conversation state.

use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::stream::{self, BoxStream, Stream, StreamExt};

/// Default delay between revealed characters.
pub const DEFAULT_TYPING_INTERVAL: Duration = Duration::from_millis(20);

/// Stream of growing character prefixes of one chunk.
///
/// The first prefix is yielded immediately and each later one after
/// `interval`. Dropping the stream cancels the reveal.
pub struct TypingReveal {
    inner: BoxStream<'static, String>,
}

impl TypingReveal {
    pub fn new(text: impl Into<String>, interval: Duration) -> Self {
        let text = text.into();
        let inner = stream::unfold((text, 0usize), move |(text, pos)| async move {
            let next = pos + text[pos..].chars().next()?.len_utf8();
            if pos > 0 && !interval.is_zero() {
                tokio::time::sleep(interval).await;
            }
            let prefix = text[..next].to_string();
            Some((prefix, (text, next)))
        })
        .boxed();

        Self { inner }
    }
}

impl Stream for TypingReveal {
    type Item = String;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<String>> {
        self.inner.poll_next_unpin(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn yields_each_character_prefix() {
        let prefixes: Vec<String> = TypingReveal::new("héy!", Duration::ZERO).collect().await;
        assert_eq!(prefixes, vec!["h", "hé", "héy", "héy!"]);
    }

    #[tokio::test]
    async fn empty_text_yields_nothing() {
        let prefixes: Vec<String> = TypingReveal::new("", Duration::ZERO).collect().await;
        assert!(prefixes.is_empty());
    }

    #[tokio::test]
    async fn paces_by_interval() {
        let start = Instant::now();
        let count = TypingReveal::new("abcd", Duration::from_millis(10))
            .count()
            .await;

        assert_eq!(count, 4);
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn dropping_stops_the_reveal() {
        let mut reveal = TypingReveal::new("a long sentence", Duration::from_millis(1));
        assert_eq!(reveal.next().await.as_deref(), Some("a"));
        assert_eq!(reveal.next().await.as_deref(), Some("a "));
        drop(reveal);
    }
}
