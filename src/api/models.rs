//! Records returned by the Helix endpoints.
//!
//! Missing fields fall back to their defaults so that Twitch adding or
//! dropping optional fields never breaks parsing.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Read `null` as the type's default. Helix sends `null` for some empty lists.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Live stream from GET /helix/streams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stream {
    pub id: String,
    pub user_id: String,
    pub user_login: String,
    pub user_name: String,
    pub game_id: String,
    pub game_name: String,
    /// "live", or empty on error
    #[serde(rename = "type")]
    pub stream_type: String,
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub viewer_count: u64,
    /// RFC3339
    pub started_at: String,
    pub language: String,
    /// Contains `{width}x{height}` placeholders
    pub thumbnail_url: String,
    /// Deprecated by Twitch, always empty
    #[serde(deserialize_with = "null_as_default")]
    pub tag_ids: Vec<String>,
    pub is_mature: bool,
}

/// User from GET /helix/users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub login: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub user_type: String,
    /// "", "affiliate" or "partner"
    pub broadcaster_type: String,
    pub description: String,
    pub profile_image_url: String,
    pub offline_image_url: String,
    /// Deprecated by Twitch
    pub view_count: u64,
    pub created_at: String,
}

/// Theme ("dark"/"light") → format ("animated"/"static") → scale ("1", "1.5", …) → URL
pub type CheermoteImages = BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>;

/// Cheermote from GET /helix/bits/cheermotes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cheermote {
    pub prefix: String,
    pub tiers: Vec<CheermoteTier>,
    /// "global_first_party", "global_third_party", "channel_custom", "display_only" or "sponsored"
    #[serde(rename = "type")]
    pub cheermote_type: String,
    pub order: u32,
    pub last_updated: String,
    pub is_charitable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheermoteTier {
    pub min_bits: u64,
    pub id: String,
    pub color: String,
    pub images: CheermoteImages,
    pub can_cheer: bool,
    pub show_in_bits_card: bool,
}

/// Emote from GET /helix/chat/emotes and /helix/chat/emotes/global.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Emote {
    pub id: String,
    pub name: String,
    pub images: EmoteImages,
    /// Subscriber tier, only for subscription emotes
    pub tier: Option<String>,
    /// "bitstier", "follower" or "subscriptions"
    pub emote_type: Option<String>,
    pub emote_set_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub format: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub scale: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub theme_mode: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmoteImages {
    pub url_1x: String,
    pub url_2x: String,
    pub url_4x: String,
}

/// Chat badge set from GET /helix/chat/badges and /helix/chat/badges/global.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeSet {
    pub set_id: String,
    pub versions: Vec<BadgeVersion>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeVersion {
    pub id: String,
    pub image_url_1x: String,
    pub image_url_2x: String,
    pub image_url_4x: String,
    pub title: String,
    pub description: String,
    pub click_action: Option<String>,
    pub click_url: Option<String>,
}

/// Chat settings from GET /helix/chat/settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    pub broadcaster_id: String,
    pub emote_mode: bool,
    pub follower_mode: bool,
    /// Minutes; null unless follower mode is on
    pub follower_mode_duration: Option<u64>,
    pub slow_mode: bool,
    /// Seconds; null unless slow mode is on
    pub slow_mode_wait_time: Option<u64>,
    pub subscriber_mode: bool,
    pub unique_chat_mode: bool,
}

/// Name color from GET /helix/chat/color.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatColor {
    pub user_id: String,
    pub user_login: String,
    pub user_name: String,
    /// Hex code, empty if the user never picked one
    pub color: String,
}

/// Clip from GET /helix/clips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Clip {
    pub id: String,
    pub url: String,
    pub embed_url: String,
    pub broadcaster_id: String,
    pub broadcaster_name: String,
    pub creator_id: String,
    pub creator_name: String,
    pub video_id: String,
    pub game_id: String,
    pub language: String,
    pub title: String,
    pub view_count: u64,
    pub created_at: String,
    pub thumbnail_url: String,
    /// Seconds, 0.1 precision
    pub duration: f64,
    pub vod_offset: Option<u64>,
    pub is_featured: bool,
}

/// Category or game from GET /helix/games and /helix/games/top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    pub id: String,
    pub name: String,
    /// Contains a `{width}x{height}` placeholder
    pub box_art_url: String,
    pub igdb_id: String,
}

/// Video from GET /helix/videos.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub id: String,
    /// Set for archives only
    pub stream_id: Option<String>,
    pub user_id: String,
    pub user_login: String,
    pub user_name: String,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub published_at: String,
    pub url: String,
    /// Contains `%{width}` and `%{height}` placeholders
    pub thumbnail_url: String,
    pub viewable: String,
    pub view_count: u64,
    pub language: String,
    /// "archive", "highlight" or "upload"
    #[serde(rename = "type")]
    pub video_type: String,
    /// e.g. "3h8m33s"
    pub duration: String,
    pub muted_segments: Option<Vec<MutedSegment>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutedSegment {
    pub duration: u64,
    pub offset: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::HelixResponse;

    #[test]
    fn stream_deserializes_helix_payload() {
        let body = r#"{
          "data": [{
            "id": "40952121085",
            "user_id": "101051819",
            "user_login": "afro",
            "user_name": "Afro",
            "game_id": "32982",
            "game_name": "Grand Theft Auto V",
            "type": "live",
            "title": "Jacob: Digital Den Laptops & Routers",
            "tags": ["English"],
            "viewer_count": 1490,
            "started_at": "2021-03-10T03:18:11Z",
            "language": "en",
            "thumbnail_url": "https://static-cdn.jtvnw.net/previews-ttv/live_user_afro-{width}x{height}.jpg",
            "tag_ids": [],
            "is_mature": false
          }],
          "pagination": {"cursor": "eyJiIjp7IkN1cnNvciI6ImV5SnpJam8zTURBMk"}
        }"#;

        let parsed: HelixResponse<Vec<Stream>> = serde_json::from_str(body).unwrap();
        let stream = &parsed.data[0];
        assert_eq!(stream.user_login, "afro");
        assert_eq!(stream.stream_type, "live");
        assert_eq!(stream.viewer_count, 1490);
        assert!(parsed.cursor().is_some());
    }

    #[test]
    fn stream_null_tags_read_as_empty() {
        let body = r#"{"data": [
            {"id": "1", "tags": null, "tag_ids": null},
            {"id": "2"}
        ]}"#;

        let parsed: HelixResponse<Vec<Stream>> = serde_json::from_str(body).unwrap();
        assert!(parsed.data[0].tags.is_empty());
        assert!(parsed.data[0].tag_ids.is_empty());
        assert!(parsed.data[1].tags.is_empty());
    }

    #[test]
    fn chat_settings_allow_null_durations() {
        let body = r#"{"data": [{
            "broadcaster_id": "713936733",
            "slow_mode": false,
            "slow_mode_wait_time": null,
            "follower_mode": true,
            "follower_mode_duration": 0,
            "subscriber_mode": false,
            "emote_mode": false,
            "unique_chat_mode": false
        }]}"#;

        let parsed: HelixResponse<Vec<ChatSettings>> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data[0].slow_mode_wait_time, None);
        assert_eq!(parsed.data[0].follower_mode_duration, Some(0));
    }

    #[test]
    fn cheermote_images_are_nested_by_theme_format_scale() {
        let body = r##"{"data": [{
            "prefix": "Cheer",
            "tiers": [{
                "min_bits": 1,
                "id": "1",
                "color": "#979797",
                "images": {
                    "dark": {
                        "animated": {"1": "https://d3aqoihi2n8ty8.cloudfront.net/actions/cheer/dark/animated/1/1.gif"},
                        "static": {"1": "https://d3aqoihi2n8ty8.cloudfront.net/actions/cheer/dark/static/1/1.png"}
                    }
                },
                "can_cheer": true,
                "show_in_bits_card": true
            }],
            "type": "global_first_party",
            "order": 1,
            "last_updated": "2018-05-22T00:06:04Z",
            "is_charitable": false
        }]}"##;

        let parsed: HelixResponse<Vec<Cheermote>> = serde_json::from_str(body).unwrap();
        let tier = &parsed.data[0].tiers[0];
        assert!(tier.images["dark"]["static"]["1"].ends_with("1.png"));
        assert_eq!(parsed.data[0].cheermote_type, "global_first_party");
    }

    #[test]
    fn emote_without_images_deserializes() {
        let body = r#"{"data": [{
            "id": "301590448",
            "name": "HeyGuys",
            "format": ["static"],
            "scale": ["1.0", "2.0", "3.0"],
            "theme_mode": ["light", "dark"]
        }], "template": "https://static-cdn.jtvnw.net/emoticons/v2/{{id}}/{{format}}/{{theme_mode}}/{{scale}}"}"#;

        let parsed: HelixResponse<Vec<Emote>> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data[0].name, "HeyGuys");
        assert!(parsed.data[0].images.url_1x.is_empty());
        assert_eq!(parsed.data[0].emote_type, None);
    }

    #[test]
    fn video_muted_segments_may_be_null() {
        let body = r#"{"data": [
            {"id": "1", "type": "archive", "stream_id": "123", "muted_segments": null},
            {"id": "2", "type": "upload", "muted_segments": [{"duration": 30, "offset": 120}]}
        ]}"#;

        let parsed: HelixResponse<Vec<Video>> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data[0].muted_segments, None);
        assert_eq!(parsed.data[1].muted_segments.as_ref().map(Vec::len), Some(1));
        assert_eq!(parsed.data[1].video_type, "upload");
    }
}
