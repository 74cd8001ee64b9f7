/// Music folder listing for Subsonic clients
use crate::state::AppState;
use crate::subsonic::{self, Container, MusicFolder, MusicFoldersContainer};
use axum::{extract::State, response::Response};
use std::path::Path;

/// GET /subsonic/getMusicFolders
///
/// Returns a single synthetic folder named after the configured media root.
/// Configuration failures are reported in-payload at HTTP 200.
pub async fn get_music_folders(State(app_state): State<AppState>) -> Response {
    let config = match app_state.config.load() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("failed to load configuration: {err}");
            return subsonic::render(&Container::error_generic());
        }
    };

    let media = config.media();
    let name = Path::new(&media)
        .file_name()
        .map_or_else(|| media.clone(), |n| n.to_string_lossy().into_owned());

    let container = Container {
        music_folders: Some(MusicFoldersContainer {
            music_folders: vec![MusicFolder { id: 0, name }],
        }),
        ..Container::ok()
    };

    subsonic::render(&container)
}
