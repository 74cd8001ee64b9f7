//! Subsonic compatibility surface
//!
//! Emulates the legacy Subsonic REST protocol for third-party clients. The
//! protocol reports errors inside the XML payload with HTTP status 200, not
//! through HTTP status codes; external client software depends on this.

pub mod music_folders;
pub mod ping;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// XML namespace of the emulated Subsonic REST API
pub const SUBSONIC_XMLNS: &str = "http://subsonic.org/restapi";

/// Subsonic protocol version this server emulates
pub const SUBSONIC_VERSION: &str = "1.8.0";

/// Error code for a generic failure, per the Subsonic error-code table
const ERROR_GENERIC: u32 = 0;

/// Root `<subsonic-response>` container
#[derive(Debug, Serialize)]
#[serde(rename = "subsonic-response")]
pub struct Container {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,

    #[serde(rename = "@status")]
    status: &'static str,

    #[serde(rename = "@version")]
    version: &'static str,

    #[serde(rename = "musicFolders", skip_serializing_if = "Option::is_none")]
    pub music_folders: Option<MusicFoldersContainer>,

    #[serde(rename = "error", skip_serializing_if = "Option::is_none")]
    pub error: Option<SubsonicError>,
}

impl Container {
    /// Empty success container
    pub fn ok() -> Self {
        Self {
            xmlns: SUBSONIC_XMLNS,
            status: "ok",
            version: SUBSONIC_VERSION,
            music_folders: None,
            error: None,
        }
    }

    /// Generic failure container
    pub fn error_generic() -> Self {
        Self {
            status: "failed",
            error: Some(SubsonicError {
                code: ERROR_GENERIC,
                message: "A generic error occurred.".to_string(),
            }),
            ..Self::ok()
        }
    }
}

/// `<musicFolders>` list element
#[derive(Debug, Serialize)]
pub struct MusicFoldersContainer {
    #[serde(rename = "musicFolder")]
    pub music_folders: Vec<MusicFolder>,
}

/// A single emulated music folder
#[derive(Debug, Serialize)]
pub struct MusicFolder {
    #[serde(rename = "@id")]
    pub id: i64,

    #[serde(rename = "@name")]
    pub name: String,
}

/// `<error>` element carried inside a failed container
#[derive(Debug, Serialize)]
pub struct SubsonicError {
    #[serde(rename = "@code")]
    pub code: u32,

    #[serde(rename = "@message")]
    pub message: String,
}

// Last-resort body when even the error container fails to serialize
const GENERIC_ERROR_XML: &str = concat!(
    r#"<subsonic-response xmlns="http://subsonic.org/restapi" status="failed" version="1.8.0">"#,
    r#"<error code="0" message="A generic error occurred."/>"#,
    r#"</subsonic-response>"#,
);

/// Render a container as an XML response, always at HTTP 200
pub fn render(container: &Container) -> Response {
    let body = match quick_xml::se::to_string(container) {
        Ok(xml) => format!(r#"<?xml version="1.0" encoding="UTF-8"?>{xml}"#),
        Err(err) => {
            tracing::error!("failed to serialize subsonic response: {err}");
            GENERIC_ERROR_XML.to_string()
        }
    };

    (
        [(header::CONTENT_TYPE, "text/xml; charset=utf-8")],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_container_serializes_with_namespace() {
        let xml = quick_xml::se::to_string(&Container::ok()).unwrap();
        assert!(xml.contains(r#"xmlns="http://subsonic.org/restapi""#));
        assert!(xml.contains(r#"status="ok""#));
        assert!(!xml.contains("error"));
    }

    #[test]
    fn error_container_carries_generic_code() {
        let xml = quick_xml::se::to_string(&Container::error_generic()).unwrap();
        assert!(xml.contains(r#"status="failed""#));
        assert!(xml.contains(r#"code="0""#));
    }

    #[test]
    fn music_folders_render_as_attributes() {
        let container = Container {
            music_folders: Some(MusicFoldersContainer {
                music_folders: vec![MusicFolder {
                    id: 0,
                    name: "Music".to_string(),
                }],
            }),
            ..Container::ok()
        };

        let xml = quick_xml::se::to_string(&container).unwrap();
        assert!(xml.contains(r#"<musicFolder id="0" name="Music"/>"#));
    }
}
