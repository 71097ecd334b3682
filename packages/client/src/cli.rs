//! Command-line interface.
//!
//! Each subcommand is a thin use case: load the session, call the API,
//! print the result.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use daily_memo_server::infrastructure::dto::http::{
    CategorySearchQuery, CreateCommentRequest, MemoListQuery, MemoRequest, PlaceSearchQuery,
    SignInRequest, SignUpRequest, UpdateProfileRequest,
};
use daily_memo_shared::time::now_millis;

use crate::{
    api::ApiClient,
    display,
    error::ClientError,
    session::{Session, SessionStore},
};

#[derive(Debug, Parser)]
#[command(name = "daily-memo-client", version, about = "Daily Memo command-line client")]
pub struct Cli {
    /// Server base URL
    #[arg(long, env = "DAILY_MEMO_SERVER", default_value = "http://localhost:7001")]
    pub server: String,

    /// Session file (defaults to <config dir>/daily-memo/session.json)
    #[arg(long, env = "DAILY_MEMO_SESSION")]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an account and log in
    Signup {
        account_id: String,
        nickname: String,
        #[arg(long, env = "DAILY_MEMO_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long, env = "DAILY_MEMO_AUTH_CODE", hide_env_values = true)]
        auth_code: String,
    },
    /// Log in and store the session
    Login {
        account_id: String,
        #[arg(long, env = "DAILY_MEMO_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Remove the stored session
    Logout,
    /// Show whether a session is stored
    Status,
    /// Exchange the refresh token for a new token pair
    Refresh,
    #[command(subcommand)]
    Profile(ProfileCommand),
    #[command(subcommand)]
    Memo(MemoCommand),
    #[command(subcommand)]
    Comment(CommentCommand),
    #[command(subcommand)]
    Room(RoomCommand),
    #[command(subcommand)]
    Place(PlaceCommand),
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    Show,
    Update {
        #[arg(long, env = "DAILY_MEMO_PASSWORD", hide_env_values = true)]
        current_password: String,
        #[arg(long)]
        nickname: Option<String>,
        #[arg(long)]
        new_password: Option<String>,
        #[arg(long)]
        profile_image_url: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct MemoFilterArgs {
    /// List every memo of this room instead of only your own
    #[arg(long)]
    pub room: Option<u64>,
    #[arg(long)]
    pub wishlist: Option<bool>,
}

impl From<MemoFilterArgs> for MemoListQuery {
    fn from(args: MemoFilterArgs) -> Self {
        MemoListQuery {
            room_id: args.room,
            is_wishlist: args.wishlist,
        }
    }
}

#[derive(Debug, Args)]
pub struct MemoArgs {
    pub title: String,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long)]
    pub image_url: Option<String>,
    #[arg(long)]
    pub rating: Option<u8>,
    #[arg(long)]
    pub pinned: bool,
    #[arg(long)]
    pub wishlist: bool,
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<f64>,
    #[arg(long)]
    pub location_name: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub business_name: Option<String>,
    #[arg(long)]
    pub business_phone: Option<String>,
    #[arg(long)]
    pub business_address: Option<String>,
    #[arg(long)]
    pub naver_place_url: Option<String>,
}

impl MemoArgs {
    fn into_request(self, room_id: Option<u64>) -> MemoRequest {
        MemoRequest {
            room_id,
            title: self.title,
            content: self.content,
            image_url: self.image_url,
            rating: self.rating,
            is_pinned: self.pinned,
            latitude: self.latitude,
            longitude: self.longitude,
            location_name: self.location_name,
            category: self.category,
            is_wishlist: self.wishlist,
            business_name: self.business_name,
            business_phone: self.business_phone,
            business_address: self.business_address,
            naver_place_url: self.naver_place_url,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum MemoCommand {
    List(MemoFilterArgs),
    Map(MemoFilterArgs),
    Show {
        id: u64,
    },
    Create {
        /// Defaults to your current room
        #[arg(long)]
        room: Option<u64>,
        #[command(flatten)]
        memo: MemoArgs,
    },
    /// Replace every field of a memo
    Update {
        id: u64,
        #[command(flatten)]
        memo: MemoArgs,
    },
    Delete {
        id: u64,
    },
}

#[derive(Debug, Subcommand)]
pub enum CommentCommand {
    List {
        memo_id: u64,
    },
    Add {
        memo_id: u64,
        content: String,
        #[arg(long)]
        rating: Option<u8>,
    },
    Delete {
        comment_id: u64,
    },
}

#[derive(Debug, Subcommand)]
pub enum RoomCommand {
    Current,
    Show { room_id: u64 },
    Join { room_code: String },
    Leave,
    Kick { room_id: u64, user_id: u64 },
}

#[derive(Debug, Subcommand)]
pub enum PlaceCommand {
    Search {
        query: String,
        #[arg(short, allow_hyphen_values = true)]
        x: Option<f64>,
        #[arg(short, allow_hyphen_values = true)]
        y: Option<f64>,
        #[arg(long)]
        radius: Option<u32>,
    },
    Category {
        category: String,
        #[arg(short, allow_hyphen_values = true)]
        x: f64,
        #[arg(short, allow_hyphen_values = true)]
        y: f64,
        #[arg(long)]
        radius: Option<u32>,
    },
}

/// Session-aware entry point for every command
pub struct App {
    server: String,
    store: SessionStore,
}

impl App {
    pub fn new(server: String, store: SessionStore) -> Self {
        Self { server, store }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self, ClientError> {
        let path = match &cli.session_file {
            Some(path) => path.clone(),
            None => SessionStore::default_path()?,
        };
        Ok(Self::new(cli.server.clone(), SessionStore::new(path)))
    }

    fn anonymous(&self) -> Result<ApiClient, ClientError> {
        ApiClient::new(&self.server)
    }

    /// An API client carrying a valid access token, refreshing it first when expired.
    async fn authorized(&self) -> Result<ApiClient, ClientError> {
        let mut session = self.store.require()?;
        if session.is_access_token_expired(now_millis()) {
            session = self.refresh_session(&session).await?;
        }
        Ok(self.anonymous()?.with_access_token(session.access_token))
    }

    async fn refresh_session(&self, session: &Session) -> Result<Session, ClientError> {
        let response = self.anonymous()?.refresh(&session.refresh_token).await;
        match response {
            Ok(response) => {
                let refreshed = Session::from(response);
                self.store.save(&refreshed)?;
                tracing::debug!("Access token refreshed");
                Ok(refreshed)
            }
            Err(e) if e.is_unauthorized() => {
                self.store.clear()?;
                Err(ClientError::NotLoggedIn)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn sign_up(&self, request: SignUpRequest) -> Result<Session, ClientError> {
        let session = Session::from(self.anonymous()?.sign_up(&request).await?);
        self.store.save(&session)?;
        Ok(session)
    }

    pub async fn login(&self, request: SignInRequest) -> Result<Session, ClientError> {
        let session = Session::from(self.anonymous()?.sign_in(&request).await?);
        self.store.save(&session)?;
        Ok(session)
    }

    pub fn logout(&self) -> Result<(), ClientError> {
        self.store.clear()
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.is_logged_in()
    }

    pub async fn run(&self, command: Command) -> Result<String, ClientError> {
        match command {
            Command::Signup {
                account_id,
                nickname,
                password,
                auth_code,
            } => {
                let session = self
                    .sign_up(SignUpRequest {
                        account_id,
                        password,
                        auth_code,
                        nickname,
                    })
                    .await?;
                Ok(format!("Signed up as {} ({})", session.nickname, session.account_id))
            }
            Command::Login {
                account_id,
                password,
            } => {
                let session = self
                    .login(SignInRequest {
                        account_id,
                        password,
                    })
                    .await?;
                Ok(format!("Logged in as {} ({})", session.nickname, session.account_id))
            }
            Command::Logout => {
                self.logout()?;
                Ok("Logged out".to_string())
            }
            Command::Status => Ok(match self.store.load()? {
                Some(session) => format!("Logged in as {} ({})", session.nickname, session.account_id),
                None => "Not logged in".to_string(),
            }),
            Command::Refresh => {
                let session = self.store.require()?;
                self.refresh_session(&session).await?;
                Ok("Tokens refreshed".to_string())
            }
            Command::Profile(command) => self.run_profile(command).await,
            Command::Memo(command) => self.run_memo(command).await,
            Command::Comment(command) => self.run_comment(command).await,
            Command::Room(command) => self.run_room(command).await,
            Command::Place(command) => self.run_place(command).await,
        }
    }

    async fn run_profile(&self, command: ProfileCommand) -> Result<String, ClientError> {
        let api = self.authorized().await?;
        let profile = match command {
            ProfileCommand::Show => api.get_profile().await?,
            ProfileCommand::Update {
                current_password,
                nickname,
                new_password,
                profile_image_url,
            } => {
                api.update_profile(&UpdateProfileRequest {
                    current_password,
                    nickname,
                    new_password,
                    profile_image_url,
                })
                .await?
            }
        };
        Ok(display::profile(&profile))
    }

    async fn run_memo(&self, command: MemoCommand) -> Result<String, ClientError> {
        let api = self.authorized().await?;
        match command {
            MemoCommand::List(filter) => {
                let list = api.list_memos(&filter.into()).await?;
                let mut lines: Vec<String> = list.memos.iter().map(display::memo_line).collect();
                lines.push(format!("{} memo(s)", list.total));
                Ok(lines.join("\n"))
            }
            MemoCommand::Map(filter) => {
                let list = api.map_markers(&filter.into()).await?;
                let mut lines: Vec<String> =
                    list.markers.iter().map(display::marker_line).collect();
                lines.push(format!("{} marker(s)", list.total));
                Ok(lines.join("\n"))
            }
            MemoCommand::Show { id } => Ok(display::memo_detail(&api.get_memo(id).await?)),
            MemoCommand::Create { room, memo } => {
                let memo = api.create_memo(&memo.into_request(room)).await?;
                Ok(format!("Created\n{}", display::memo_detail(&memo)))
            }
            MemoCommand::Update { id, memo } => {
                let memo = api.update_memo(id, &memo.into_request(None)).await?;
                Ok(format!("Updated\n{}", display::memo_detail(&memo)))
            }
            MemoCommand::Delete { id } => {
                api.delete_memo(id).await?;
                Ok(format!("Deleted memo #{id}"))
            }
        }
    }

    async fn run_comment(&self, command: CommentCommand) -> Result<String, ClientError> {
        let api = self.authorized().await?;
        match command {
            CommentCommand::List { memo_id } => {
                let list = api.list_comments(memo_id).await?;
                let mut lines: Vec<String> =
                    list.comments.iter().map(display::comment_line).collect();
                lines.push(format!("{} comment(s)", list.total));
                Ok(lines.join("\n"))
            }
            CommentCommand::Add {
                memo_id,
                content,
                rating,
            } => {
                let comment = api
                    .create_comment(memo_id, &CreateCommentRequest { content, rating })
                    .await?;
                Ok(display::comment_line(&comment))
            }
            CommentCommand::Delete { comment_id } => {
                api.delete_comment(comment_id).await?;
                Ok(format!("Deleted comment #{comment_id}"))
            }
        }
    }

    async fn run_room(&self, command: RoomCommand) -> Result<String, ClientError> {
        let api = self.authorized().await?;
        let room = match command {
            RoomCommand::Current => api.current_room().await?,
            RoomCommand::Show { room_id } => api.room_detail(room_id).await?,
            RoomCommand::Join { room_code } => api.join_room(&room_code).await?,
            RoomCommand::Leave => api.leave_room().await?,
            RoomCommand::Kick { room_id, user_id } => api.kick_participant(room_id, user_id).await?,
        };
        Ok(display::room(&room))
    }

    async fn run_place(&self, command: PlaceCommand) -> Result<String, ClientError> {
        let api = self.authorized().await?;
        let list = match command {
            PlaceCommand::Search {
                query,
                x,
                y,
                radius,
            } => {
                api.search_places(&PlaceSearchQuery {
                    query,
                    x,
                    y,
                    radius,
                })
                .await?
            }
            PlaceCommand::Category {
                category,
                x,
                y,
                radius,
            } => {
                api.search_places_by_category(&CategorySearchQuery {
                    category,
                    x: Some(x),
                    y: Some(y),
                    radius,
                })
                .await?
            }
        };
        let mut lines: Vec<String> = list.places.iter().map(display::place_line).collect();
        lines.push(format!("{} place(s)", list.total));
        Ok(lines.join("\n"))
    }
}
