#[cfg(test)]
mod tests {
    use gallery_image::{BulkLoadError, LoadError, load_gallery};
    use gallery_types::{GalleryEntry, LoadOutcome};
    use std::time::Duration;

    fn entries(count: usize) -> Vec<GalleryEntry> {
        (0..count)
            .map(|idx| {
                GalleryEntry::new(
                    format!("img/gallery/{:03}.jpg", idx + 1),
                    format!("Photo {}", idx + 1),
                    idx,
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn test_all_images_load() {
        let outcomes = load_gallery(entries(9), |entry| async move { Ok(entry.index) })
            .await
            .expect("load should settle");

        let (loaded, failed) = LoadOutcome::partition(&outcomes);
        assert_eq!(outcomes.len(), 9);
        assert_eq!(loaded.len(), 9);
        assert!(failed.is_empty());
    }

    #[tokio::test]
    async fn test_failures_become_placeholders_in_place() {
        let outcomes = load_gallery(entries(9), |entry| async move {
            if entry.index == 3 || entry.index == 7 {
                Err(LoadError::UnsupportedFormat(entry.source.display().to_string()))
            } else {
                Ok(())
            }
        })
        .await
        .expect("one bad image must not fail the gallery");

        assert_eq!(outcomes.len(), 9);
        let failed: Vec<usize> = outcomes
            .iter()
            .filter(|o| !o.is_loaded())
            .map(|o| o.index())
            .collect();
        assert_eq!(failed, vec![3, 7]);
        assert_eq!(outcomes.iter().filter(|o| o.is_loaded()).count(), 7);
    }

    #[tokio::test]
    async fn test_outcomes_follow_entry_order() {
        // Later entries finish first
        let outcomes = load_gallery(entries(5), |entry| async move {
            tokio::time::sleep(Duration::from_millis(10 * (5 - entry.index as u64))).await;
            Ok(entry.caption)
        })
        .await
        .expect("load should settle");

        let order: Vec<usize> = outcomes.iter().map(|o| o.index()).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
        assert_eq!(outcomes[0].image().map(String::as_str), Some("Photo 1"));
    }

    #[tokio::test]
    async fn test_panicking_load_task_fails_whole_load() {
        let result = load_gallery(entries(3), |entry| async move {
            if entry.index == 1 {
                panic!("decoder crashed");
            }
            Ok(())
        })
        .await;

        assert!(matches!(result, Err(BulkLoadError::Join(_))));
    }

    #[tokio::test]
    async fn test_empty_gallery() {
        let outcomes = load_gallery(Vec::new(), |_entry| async move { Ok(()) })
            .await
            .expect("empty load should settle");
        assert!(outcomes.is_empty());
    }
}
