#[cfg(test)]
mod tests {
    use crate::tools::types::{ContentSlot, InfoLinks, SlotKind};
    use crate::tools::verify::*;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{header_regex, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Resolves only the listed URLs and counts calls.
    struct SetProber {
        live: HashSet<String>,
        calls: AtomicUsize,
    }

    impl SetProber {
        fn new(live: &[&str]) -> Self {
            Self {
                live: live.iter().map(|s| s.to_string()).collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Prober for SetProber {
        fn name(&self) -> &'static str {
            "set"
        }

        async fn exists(&self, url: &str) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            // Stagger completions so probe order differs from slot order
            let delay = (url.len() % 7) as u64;
            tokio::time::sleep(Duration::from_millis(delay)).await;
            self.live.contains(url)
        }
    }

    fn info() -> ContentSlot {
        ContentSlot::Info {
            links: InfoLinks::default(),
        }
    }

    #[tokio::test]
    async fn test_verify_drops_missing_images_in_order() {
        let slots = vec![
            ContentSlot::image("https://a.test/01.jpg"),
            ContentSlot::video("https://a.test/v.mp4"),
            ContentSlot::image("https://a.test/02.jpg"),
            ContentSlot::markup("<p>x</p>"),
            ContentSlot::image("https://a.test/03.jpg"),
            info(),
        ];
        let prober = Arc::new(SetProber::new(&[
            "https://a.test/01.jpg",
            "https://a.test/03.jpg",
        ]));

        let result = verify_sequence(slots, prober.clone(), 2).await;

        assert_eq!(
            result.slots,
            vec![
                ContentSlot::image("https://a.test/01.jpg"),
                ContentSlot::video("https://a.test/v.mp4"),
                ContentSlot::markup("<p>x</p>"),
                ContentSlot::image("https://a.test/03.jpg"),
                info(),
            ]
        );
        assert_eq!(result.probed, 3);
        assert_eq!(result.dropped, 1);
        assert!(!result.lost_all_images());
        // Only image slots are probed
        assert_eq!(prober.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_verify_output_is_subsequence_for_any_pattern() {
        let urls: Vec<String> = (1..=6).map(|n| format!("https://a.test/{n:02}.jpg")).collect();
        for mask in 0u32..64 {
            let live: Vec<&str> = urls
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, u)| u.as_str())
                .collect();
            let mut slots: Vec<ContentSlot> = urls.iter().map(ContentSlot::image).collect();
            slots.insert(3, ContentSlot::video("https://a.test/v.mp4"));
            slots.push(info());

            let result = verify_sequence(slots.clone(), Arc::new(SetProber::new(&live)), 4).await;

            let mut it = slots.iter();
            for kept in &result.slots {
                assert!(it.any(|s| s == kept), "mask {mask:06b} broke ordering");
            }
            assert_eq!(result.dropped, 6 - live.len());
            assert_eq!(result.slots.last().map(ContentSlot::kind), Some(SlotKind::Info));
        }
    }

    #[tokio::test]
    async fn test_verify_all_images_lost() {
        let slots = vec![ContentSlot::image("https://a.test/01.jpg"), info()];
        let result = verify_sequence(slots, Arc::new(SetProber::new(&[])), 1).await;
        assert_eq!(result.slots, vec![info()]);
        assert!(result.lost_all_images());
    }

    #[tokio::test]
    async fn test_verify_without_images_probes_nothing() {
        let prober = Arc::new(SetProber::new(&[]));
        let slots = vec![ContentSlot::video("https://a.test/v.mp4"), info()];
        let result = verify_sequence(slots.clone(), prober.clone(), 4).await;
        assert_eq!(result.slots, slots);
        assert_eq!(result.probed, 0);
        assert!(!result.lost_all_images());
        assert_eq!(prober.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_http_prober_status_handling() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/img/01.jpg"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/img/02.jpg"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/img/03.jpg"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let prober = HttpProber::new(Duration::from_secs(2)).unwrap();
        let base = server.uri();
        assert!(prober.exists(&format!("{base}/img/01.jpg")).await);
        assert!(!prober.exists(&format!("{base}/img/02.jpg")).await);
        assert!(!prober.exists(&format!("{base}/img/03.jpg")).await);
        // Unmatched paths get wiremock's default 404
        assert!(!prober.exists(&format!("{base}/img/99.jpg")).await);
    }

    #[tokio::test]
    async fn test_http_prober_timeout_counts_as_missing() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/slow.jpg"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let prober = HttpProber::new(Duration::from_millis(100)).unwrap();
        assert!(!prober.exists(&format!("{}/slow.jpg", server.uri())).await);
    }

    #[tokio::test]
    async fn test_http_prober_transport_error_counts_as_missing() {
        let prober = HttpProber::new(Duration::from_millis(500)).unwrap();
        // Port 9 (discard) on localhost is almost never listening
        assert!(!prober.exists("http://127.0.0.1:9/none.jpg").await);
        assert!(!prober.exists("not a url").await);
    }

    #[tokio::test]
    async fn test_http_prober_sends_browser_headers() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/guarded.jpg"))
            .and(header_regex("user-agent", "iPhone"))
            .and(header_regex("accept", "^image/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        // Anything without the browser headers is refused like a WAF would
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(403))
            .with_priority(10)
            .mount(&server)
            .await;

        let prober = HttpProber::new(Duration::from_secs(2)).unwrap();
        assert!(prober.exists(&format!("{}/guarded.jpg", server.uri())).await);
    }
}
