use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to fetch IMDS token for resource {resource}: {cause}")]
    TokenFetchFailed {
        resource: String,
        #[source]
        cause: TokenFetchCause,
    },

    #[error("failed to list clusters: {cause}")]
    ClusterListFailed {
        #[source]
        cause: reqwest::Error,
    },

    #[error("environment variable {variable} is not set")]
    MissingConfiguration { variable: &'static str },
}

/// What went wrong while talking to the metadata endpoint.
#[derive(Debug, Error)]
pub enum TokenFetchCause {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("token response has no access_token field")]
    MissingAccessToken,
}
