use rand::seq::index::sample;

/// A well-known track users can try without hunting for a link themselves.
#[derive(Debug, Clone)]
pub struct DemoTrack {
    pub name: &'static str,
    pub artist: &'static str,
    pub spotify_url: &'static str,
}

/// Built-in catalog of popular tracks backing the demo keyboard.
pub struct DemoCatalog {
    tracks: Vec<DemoTrack>,
}

impl DemoCatalog {
    pub fn new() -> Self {
        let tracks = vec![
            DemoTrack {
                name: "Never Gonna Give You Up",
                artist: "Rick Astley",
                spotify_url: "https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC",
            },
            DemoTrack {
                name: "Shape of You",
                artist: "Ed Sheeran",
                spotify_url: "https://open.spotify.com/track/7qiZfU4dY1lWllzX7mPBI3",
            },
            DemoTrack {
                name: "bad guy",
                artist: "Billie Eilish",
                spotify_url: "https://open.spotify.com/track/2Fxmhks0bxGSBdJ92vM42m",
            },
            DemoTrack {
                name: "Circles",
                artist: "Post Malone",
                spotify_url: "https://open.spotify.com/track/21jGcNKet2qwijlDFuPiPb",
            },
            DemoTrack {
                name: "Someone Like You",
                artist: "Adele",
                spotify_url: "https://open.spotify.com/track/1zwMYTA5nlNjZxYrvBB2pV",
            },
            DemoTrack {
                name: "Bohemian Rhapsody",
                artist: "Queen",
                spotify_url: "https://open.spotify.com/track/3z8h0TU7ReDPLIbEnYhWZb",
            },
            DemoTrack {
                name: "Imagine",
                artist: "John Lennon",
                spotify_url: "https://open.spotify.com/track/7pKfPomDEeI4TPT6EOYjn9",
            },
            DemoTrack {
                name: "Sweet Child O Mine",
                artist: "Guns N Roses",
                spotify_url: "https://open.spotify.com/track/7o2CTH4ctstm8TNelqjb51",
            },
            DemoTrack {
                name: "Stairway to Heaven",
                artist: "Led Zeppelin",
                spotify_url: "https://open.spotify.com/track/5CQ30WqJwcep0pYcV4AMNc",
            },
            DemoTrack {
                name: "Hotel California",
                artist: "Eagles",
                spotify_url: "https://open.spotify.com/track/40riOy7x9W7GXjyGp4pjAv",
            },
            DemoTrack {
                name: "Smells Like Teen Spirit",
                artist: "Nirvana",
                spotify_url: "https://open.spotify.com/track/5ghIJDpPoe3CfHMGu71E6T",
            },
            DemoTrack {
                name: "Yesterday",
                artist: "The Beatles",
                spotify_url: "https://open.spotify.com/track/3BQHpFgAp4l80e1XslIjNI",
            },
        ];

        Self { tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DemoTrack> {
        self.tracks.get(index)
    }

    /// Picks `count` distinct random tracks, returning each with its stable
    /// catalog index so callback data can refer back to it.
    pub fn random_tracks(&self, count: usize) -> Vec<(usize, &DemoTrack)> {
        let count = count.min(self.tracks.len());
        let mut rng = rand::rng();

        sample(&mut rng, self.tracks.len(), count)
            .iter()
            .map(|i| (i, &self.tracks[i]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_populated() {
        let catalog = DemoCatalog::new();
        assert!(catalog.len() >= 6);

        for index in 0..catalog.len() {
            let track = catalog.get(index).unwrap();
            assert!(!track.name.is_empty());
            assert!(!track.artist.is_empty());
            assert!(track.spotify_url.contains("open.spotify.com/track/"));
        }
    }

    #[test]
    fn test_get_out_of_bounds() {
        let catalog = DemoCatalog::new();
        assert!(catalog.get(catalog.len()).is_none());
    }

    #[test]
    fn test_random_tracks_count_and_uniqueness() {
        let catalog = DemoCatalog::new();
        let picks = catalog.random_tracks(6);
        assert_eq!(picks.len(), 6);

        let mut indices: Vec<usize> = picks.iter().map(|(i, _)| *i).collect();
        indices.sort();
        indices.dedup();
        assert_eq!(indices.len(), 6);
    }

    #[test]
    fn test_random_tracks_capped_at_catalog_size() {
        let catalog = DemoCatalog::new();
        let picks = catalog.random_tracks(1000);
        assert_eq!(picks.len(), catalog.len());
    }
}
