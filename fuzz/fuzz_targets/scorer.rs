#![no_main]

use libfuzzer_sys::fuzz_target;
use serde_json::Map;
use uuid::Uuid;

use copyrank::entities::{Article, Keyword};
use copyrank::scoring;

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let text = String::from_utf8_lossy(data).to_string();

    // Split the input so title, phrase and body all see arbitrary content
    let mut parts = text.splitn(3, '\n');
    let title = parts.next().unwrap_or("").to_string();
    let phrase = parts.next().unwrap_or("").to_string();
    let body = parts.next().unwrap_or("").to_string();

    let article = Article {
        id: Uuid::new_v4(),
        title,
        meta_description: None,
        body_markdown: Some(body),
        body_html: None,
        word_count: None,
        metadata: Map::new(),
    };
    let keyword = Keyword::new(phrase);

    // The scorer should never panic and the total stays normalized
    let result = scoring::calculate(&article, Some(&keyword));
    assert!(result.score <= 100);
});
