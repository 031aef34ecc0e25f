// Relevance-filtering engine: tokenize, score, rank and select highlights,
// match declared skills. Pure and synchronous; handlers only adapt it to HTTP.

pub mod handlers;
pub mod highlight_selector;
pub mod profile_filter;
pub mod relevance;
pub mod report;
pub mod skill_matcher;
pub mod tokenizer;
