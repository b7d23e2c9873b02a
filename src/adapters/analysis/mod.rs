//! Analysis summarizer adapters.

mod template_summarizer;

pub use template_summarizer::TemplateSummarizer;
