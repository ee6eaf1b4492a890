//! Built-in gallery used when no manifest is given

use crate::EntryConfig;

const BUILTIN: &[(&str, &str)] = &[
    ("img/gallery/001.jpg", "Coffee shop interior"),
    ("img/gallery/002.jpg", "Fresh coffee beans"),
    ("img/gallery/003.jpg", "Coffee brewing process"),
    ("img/gallery/004.jpg", "Delicious pastries"),
    ("img/gallery/005.jpg", "Coffee cup close-up"),
    ("img/gallery/006.jpg", "Drive-thru service"),
    ("img/gallery/007.jpg", "Coffee roasting"),
    ("img/gallery/008.jpg", "Customer enjoying coffee"),
    ("img/gallery/009.jpg", "Coffee shop exterior"),
];

pub fn entries() -> Vec<EntryConfig> {
    BUILTIN
        .iter()
        .map(|(source, caption)| EntryConfig {
            source: source.into(),
            caption: caption.to_string(),
        })
        .collect()
}
