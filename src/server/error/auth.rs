use thiserror::Error;

use crate::model::api::ResultCode;

/// Failures while resolving the acting member or logging in.
///
/// The login failures reuse the wire codes `401-1` and `401-2` of the
/// credential failures; clients tell them apart by endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header, or a blank one.
    #[error("Authorization header is missing")]
    MissingCredential,

    /// `Authorization` header without the `Bearer ` prefix, with a non-ASCII
    /// value, or with nothing after the prefix.
    #[error("Authorization header is not a Bearer credential")]
    MalformedCredential,

    /// Well-formed bearer credential that matches no member.
    #[error("API key does not match any member")]
    InvalidCredential,

    /// Login attempted with a username nobody registered.
    #[error("Login attempted for unknown username '{0}'")]
    UnknownUsername(String),

    /// Login attempted with the wrong password for an existing member.
    #[error("Password mismatch on login for member {0}")]
    PasswordMismatch(i32),
}

impl AuthError {
    pub fn code(&self) -> ResultCode {
        match self {
            Self::MissingCredential => ResultCode::new(401, 1),
            Self::MalformedCredential => ResultCode::new(401, 2),
            Self::InvalidCredential => ResultCode::new(401, 3),
            Self::UnknownUsername(_) => ResultCode::new(401, 1),
            Self::PasswordMismatch(_) => ResultCode::new(401, 2),
        }
    }

    pub fn client_message(&self) -> &'static str {
        match self {
            Self::MissingCredential => "Authorization 헤더가 존재하지 않습니다.",
            Self::MalformedCredential => "Authorization 헤더가 Bearer 형식이 아닙니다.",
            Self::InvalidCredential => "API 키가 유효하지 않습니다.",
            Self::UnknownUsername(_) => "존재하지 않는 아이디입니다.",
            Self::PasswordMismatch(_) => "비밀번호가 일치하지 않습니다.",
        }
    }
}
