use crate::errors::HostctlError;

/// Error talking to the hosted API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(
        "Not authenticated: set HOSTCTL_TOKEN or add a token to the [api] section of ~/.hostctl/config.toml"
    )]
    NotAuthenticated,

    #[error("The hosted API rejected the access token (HTTP {status})")]
    Unauthorized { status: u16 },

    #[error("Request to the hosted API failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    #[error("The hosted API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response from the hosted API: {message}")]
    Decode { message: String },
}

impl HostctlError for ClientError {
    fn error_code(&self) -> &'static str {
        match self {
            ClientError::NotAuthenticated => "CLIENT_NOT_AUTHENTICATED",
            ClientError::Unauthorized { .. } => "CLIENT_UNAUTHORIZED",
            ClientError::Transport { .. } => "CLIENT_TRANSPORT_ERROR",
            ClientError::Api { .. } => "CLIENT_API_ERROR",
            ClientError::Decode { .. } => "CLIENT_DECODE_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ClientError::NotAuthenticated | ClientError::Unauthorized { .. }
        )
    }
}
