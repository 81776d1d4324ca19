include!(concat!(env!("OUT_DIR"), "/songs.rs"));

/// An embedded song document
#[derive(Debug, Clone)]
pub struct SongDocument {
    /// File stem, e.g. `leave-the-door-open`
    pub name: String,
    /// Raw YAML or JSON text
    pub content: String,
}

/// Get all embedded song documents
pub fn get_all_songs() -> Vec<SongDocument> {
    SONGS
        .iter()
        .map(|(name, content)| SongDocument {
            name: name.to_string(),
            content: content.to_string(),
        })
        .collect()
}

/// Get a song document by name
pub fn get_song(name: &str) -> Option<SongDocument> {
    SONGS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(name, content)| SongDocument {
            name: name.to_string(),
            content: content.to_string(),
        })
}

/// List all song names
pub fn list_songs() -> Vec<&'static str> {
    SONGS.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_contents() {
        let names = list_songs();
        assert!(names.contains(&"leave-the-door-open"));
        assert!(names.contains(&"twelve-bar-morning"));
    }

    #[test]
    fn test_get_song() {
        let song = get_song("leave-the-door-open").unwrap();
        assert!(song.content.contains("title: Leave the Door Open"));
        assert!(get_song("missing").is_none());
        assert_eq!(get_all_songs().len(), list_songs().len());
    }
}
