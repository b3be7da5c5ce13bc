//! Image byte sources.

use async_trait::async_trait;
use orbit_common::AssetError;

/// Fetches the encoded bytes of one item image.
///
/// Implementations must be cancel-safe: the atlas builder may drop the
/// future at any time.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, source: &str) -> Result<Vec<u8>, AssetError>;
}

/// Loads `http://` and `https://` sources over the network and treats
/// everything else as a file path (an optional `file://` prefix is
/// stripped).
#[derive(Debug, Clone, Default)]
pub struct UriImageLoader {
    client: reqwest::Client,
}

impl UriImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, AssetError> {
        let fetch_err = |reason: String| AssetError::Fetch {
            source_uri: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_err(e.to_string()))?
            .error_for_status()
            .map_err(|e| fetch_err(e.to_string()))?;

        let bytes = response.bytes().await.map_err(|e| fetch_err(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ImageLoader for UriImageLoader {
    async fn load(&self, source: &str) -> Result<Vec<u8>, AssetError> {
        if is_remote(source) {
            return self.fetch(source).await;
        }

        let path = source.strip_prefix("file://").unwrap_or(source);
        tokio::fs::read(path).await.map_err(|e| AssetError::Io {
            source_uri: source.to_string(),
            source: e,
        })
    }
}

fn is_remote(source: &str) -> bool {
    let lower = source.get(..8).unwrap_or(source).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_detection() {
        assert!(is_remote("https://picsum.photos/900/900"));
        assert!(is_remote("HTTP://example.com/a.png"));
        assert!(!is_remote("/tmp/a.png"));
        assert!(!is_remote("file:///tmp/a.png"));
        assert!(!is_remote("ht"));
    }

    #[tokio::test]
    async fn loads_file_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tile.bin");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        let loader = UriImageLoader::new();
        let bytes = loader.load(path.to_str().unwrap()).await.unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);

        let uri = format!("file://{}", path.display());
        assert_eq!(loader.load(&uri).await.unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let loader = UriImageLoader::new();
        let err = loader.load("/definitely/not/here.png").await.unwrap_err();
        match &err {
            AssetError::Io { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("expected Io error, got {other:?}"),
        }
        assert!(err.to_string().contains("/definitely/not/here.png"));
    }
}
