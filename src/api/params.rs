//! Filters accepted by the resource methods.
//!
//! Every field is optional; unset fields never reach the query string.

use crate::rest::Query;
use chrono::{DateTime, SecondsFormat, Utc};

/// Cursor pagination shared by the list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams {
    /// Page size, 1 to 100 (Twitch defaults to 20)
    pub first: Option<u32>,
    /// Cursor of the previous page
    pub before: Option<String>,
    /// Cursor of the next page
    pub after: Option<String>,
}

impl PageParams {
    pub fn first(n: u32) -> Self {
        PageParams {
            first: Some(n),
            ..Default::default()
        }
    }

    pub fn after(cursor: impl Into<String>) -> Self {
        PageParams {
            after: Some(cursor.into()),
            ..Default::default()
        }
    }

    pub fn before(cursor: impl Into<String>) -> Self {
        PageParams {
            before: Some(cursor.into()),
            ..Default::default()
        }
    }

    pub(crate) fn apply(&self, query: &mut Query) {
        query
            .push_opt("after", self.after.as_deref())
            .push_opt("before", self.before.as_deref())
            .push_opt("first", self.first);
    }
}

/// Stream type filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamType {
    All,
    Live,
}

impl StreamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamType::All => "all",
            StreamType::Live => "live",
        }
    }
}

/// Filters for [`TwitchClient::get_streams`](crate::TwitchClient::get_streams).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamsParams {
    /// Broadcaster logins, resolved to user ids (max 100)
    pub user_logins: Vec<String>,
    /// Category or game names, resolved to game ids (max 100)
    pub game_names: Vec<String>,
    pub stream_type: Option<StreamType>,
    /// ISO 639-1 codes (max 100)
    pub languages: Vec<String>,
    pub page: PageParams,
}

impl StreamsParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_logins<I, S>(mut self, logins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.user_logins = logins.into_iter().map(Into::into).collect();
        self
    }

    pub fn game_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.game_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn stream_type(mut self, stream_type: StreamType) -> Self {
        self.stream_type = Some(stream_type);
        self
    }

    pub fn page(mut self, page: PageParams) -> Self {
        self.page = page;
        self
    }
}

/// Filters for [`TwitchClient::get_clips`](crate::TwitchClient::get_clips).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipsParams {
    /// Start of the window; Twitch defaults the end to one week later
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub page: PageParams,
}

impl ClipsParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn between(started_at: DateTime<Utc>, ended_at: DateTime<Utc>) -> Self {
        ClipsParams {
            started_at: Some(started_at),
            ended_at: Some(ended_at),
            ..Default::default()
        }
    }

    pub fn page(mut self, page: PageParams) -> Self {
        self.page = page;
        self
    }

    pub(crate) fn apply(&self, query: &mut Query) {
        query
            .push_opt("started_at", self.started_at.map(rfc3339))
            .push_opt("ended_at", self.ended_at.map(rfc3339));
        self.page.apply(query);
    }
}

fn rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Publication window filter for videos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoPeriod {
    All,
    Day,
    Week,
    Month,
}

impl VideoPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoPeriod::All => "all",
            VideoPeriod::Day => "day",
            VideoPeriod::Week => "week",
            VideoPeriod::Month => "month",
        }
    }
}

/// Sort order for videos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoSort {
    Time,
    Trending,
    Views,
}

impl VideoSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoSort::Time => "time",
            VideoSort::Trending => "trending",
            VideoSort::Views => "views",
        }
    }
}

/// Video type filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoType {
    All,
    Archive,
    Highlight,
    Upload,
}

impl VideoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoType::All => "all",
            VideoType::Archive => "archive",
            VideoType::Highlight => "highlight",
            VideoType::Upload => "upload",
        }
    }
}

/// Filters for [`TwitchClient::get_videos`](crate::TwitchClient::get_videos).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideosParams {
    /// Category or game name, resolved to a game id
    pub game_name: Option<String>,
    pub language: Option<String>,
    pub period: Option<VideoPeriod>,
    pub sort: Option<VideoSort>,
    pub video_type: Option<VideoType>,
    pub page: PageParams,
}

impl VideosParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game_name(mut self, name: impl Into<String>) -> Self {
        self.game_name = Some(name.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn period(mut self, period: VideoPeriod) -> Self {
        self.period = Some(period);
        self
    }

    pub fn sort(mut self, sort: VideoSort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn video_type(mut self, video_type: VideoType) -> Self {
        self.video_type = Some(video_type);
        self
    }

    pub fn page(mut self, page: PageParams) -> Self {
        self.page = page;
        self
    }
}
