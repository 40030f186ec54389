use ingest::Port;
use track::TrackSet;
use tracing::info;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Ready,
}

/// Top-level composition: holds whichever dataset has arrived and mounts the
/// map only once both are in. There is no transition back to `Loading`.
#[derive(Debug, Default)]
pub struct ViewShell {
    ports: Option<Vec<Port>>,
    tracks: Option<TrackSet>,
}

impl ViewShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ports_loaded(&mut self, ports: Vec<Port>) {
        self.ports = Some(ports);
        info!(state = ?self.state(), "port dataset resolved");
    }

    pub fn tracks_built(&mut self, tracks: TrackSet) {
        self.tracks = Some(tracks);
        info!(state = ?self.state(), "ship tracks resolved");
    }

    /// `Ready` only once both datasets have produced at least one row.
    pub fn state(&self) -> ViewState {
        match (&self.ports, &self.tracks) {
            (Some(ports), Some(tracks)) if !ports.is_empty() && !tracks.is_empty() => {
                ViewState::Ready
            }
            _ => ViewState::Loading,
        }
    }

    /// Hands the datasets over for mounting; `None` while still loading.
    pub fn mount(self) -> Option<(Vec<Port>, TrackSet)> {
        match self.state() {
            ViewState::Loading => None,
            ViewState::Ready => Some((self.ports?, self.tracks?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use foundation::geo::LonLat;
    use foundation::ids::ShipId;
    use track::{Sample, Track};

    fn one_port() -> Vec<Port> {
        vec![Port {
            name: "X".to_string(),
            position: LonLat::new(72.5, 18.9),
        }]
    }

    fn one_track() -> TrackSet {
        let sample = Sample {
            position: LonLat::new(72.5, 18.9),
            heading_deg: 0.0,
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        };
        let mut set = TrackSet::new();
        set.insert(ShipId::from("A"), Track::new(vec![sample]).unwrap());
        set
    }

    #[test]
    fn loading_until_both_datasets_arrive() {
        let mut shell = ViewShell::new();
        assert_eq!(shell.state(), ViewState::Loading);

        shell.ports_loaded(one_port());
        assert_eq!(shell.state(), ViewState::Loading);

        shell.tracks_built(one_track());
        assert_eq!(shell.state(), ViewState::Ready);
    }

    #[test]
    fn empty_dataset_does_not_count_as_ready() {
        let mut shell = ViewShell::new();
        shell.ports_loaded(Vec::new());
        shell.tracks_built(one_track());
        assert_eq!(shell.state(), ViewState::Loading);
        assert!(shell.mount().is_none());
    }

    #[test]
    fn mount_hands_the_data_over() {
        let mut shell = ViewShell::new();
        shell.ports_loaded(one_port());
        shell.tracks_built(one_track());

        let (ports, tracks) = shell.mount().unwrap();
        assert_eq!(ports.len(), 1);
        assert_eq!(tracks.len(), 1);
    }
}
