use super::empty_page;
use super::models::{ChatColor, User};
use crate::error::Result;
use crate::response::{HelixResponse, Response};
use crate::rest::{Query, TwitchClient};

impl TwitchClient {
    /// Get users by login name.
    ///
    /// Only the first 100 logins are sent. An empty list returns an empty
    /// result without calling Twitch.
    pub async fn get_users<S: AsRef<str>>(&self, logins: &[S]) -> Response<Vec<User>> {
        Response::from_page(self.users(logins).await)
    }

    /// Get the chat name color of users by login name.
    ///
    /// Logins are resolved to user ids first; unknown logins are skipped.
    pub async fn get_users_chat_color<S: AsRef<str>>(
        &self,
        logins: &[S],
    ) -> Response<Vec<ChatColor>> {
        Response::from_page(self.users_chat_color(logins).await)
    }

    pub(crate) async fn users<S: AsRef<str>>(
        &self,
        logins: &[S],
    ) -> Result<HelixResponse<Vec<User>>> {
        if logins.is_empty() {
            return Ok(empty_page());
        }

        let mut query = Query::new();
        query.push_all("login", logins.iter().map(AsRef::<str>::as_ref));
        self.get("users", &query).await
    }

    async fn users_chat_color<S: AsRef<str>>(
        &self,
        logins: &[S],
    ) -> Result<HelixResponse<Vec<ChatColor>>> {
        let users = self.users(logins).await?;
        if users.data.is_empty() {
            return Ok(empty_page());
        }

        let mut query = Query::new();
        query.push_all("user_id", users.data.iter().map(|u| u.id.as_str()));
        self.get("chat/color", &query).await
    }
}
