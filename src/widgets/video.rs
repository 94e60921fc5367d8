/// How a project video should be played back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    /// Embedded YouTube player for the given video id.
    YouTube(String),
    /// Anything else goes to a native `<video>` element.
    File(String),
}

impl VideoSource {
    pub fn from_url(url: &str) -> Self {
        youtube_id(url)
            .map(|id| Self::YouTube(id.to_string()))
            .unwrap_or_else(|| Self::File(url.to_string()))
    }

    /// Url to put in the player element. YouTube only loops a single video
    /// when it is also given as its own playlist.
    pub fn player_url(&self) -> String {
        match self {
            Self::YouTube(id) => {
                format!("https://www.youtube.com/embed/{id}?loop=1&playlist={id}")
            }
            Self::File(url) => url.clone(),
        }
    }
}

fn youtube_id(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    let id = if let Some(r) = rest.strip_prefix("youtu.be/") {
        r
    } else if let Some(r) = rest.strip_prefix("youtube.com/shorts/") {
        r
    } else if let Some(r) = rest.strip_prefix("youtube.com/watch?") {
        r.split('&').find_map(|kv| kv.strip_prefix("v="))?
    } else {
        return None;
    };
    let id = id.split(['?', '&', '/', '#']).next().unwrap_or_default();
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_youtube_forms() {
        assert_eq!(
            VideoSource::from_url("https://www.youtube.com/shorts/esW5zpTkxvs"),
            VideoSource::YouTube("esW5zpTkxvs".to_string())
        );
        assert_eq!(
            VideoSource::from_url("https://youtu.be/cbqwafX-eoA"),
            VideoSource::YouTube("cbqwafX-eoA".to_string())
        );
        assert_eq!(
            VideoSource::from_url("https://www.youtube.com/watch?list=x&v=abc123&t=4"),
            VideoSource::YouTube("abc123".to_string())
        );
    }

    #[test]
    fn test_embed_url_loops() {
        let src = VideoSource::from_url("https://youtu.be/cbqwafX-eoA?si=tracking");
        assert_eq!(
            src.player_url(),
            "https://www.youtube.com/embed/cbqwafX-eoA?loop=1&playlist=cbqwafX-eoA"
        );
    }

    #[test]
    fn test_other_urls_are_files() {
        assert_eq!(
            VideoSource::from_url("/video/demo.mp4"),
            VideoSource::File("/video/demo.mp4".to_string())
        );
        assert_eq!(
            VideoSource::from_url("https://www.youtube.com/shorts/"),
            VideoSource::File("https://www.youtube.com/shorts/".to_string())
        );
    }
}
