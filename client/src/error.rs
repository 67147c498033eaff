//! Client error type and its user-facing Korean messages.
//!
//! Every fallible client operation returns `Result<T, ClientError>`. Views
//! never show the `Display` text; they show [`ClientError::user_message`],
//! which maps each case to a fixed localized sentence. Unexpected failures
//! are logged with full detail by the caller.

use mock_betting::ContractError;
use thiserror::Error;

pub const MSG_LOGIN_REQUIRED: &str = "로그인이 필요합니다.";
pub const MSG_SEND_FAILED: &str = "메시지 전송에 실패했습니다. 잠시 후 다시 시도해주세요.";
pub const MSG_DELETE_MESSAGE_FAILED: &str = "메시지 삭제에 실패했습니다.";
pub const MSG_LOAD_MESSAGES_FAILED: &str = "메시지를 불러오는데 실패했습니다.";
pub const MSG_GENERIC: &str = "요청 처리 중 오류가 발생했습니다.";

/// Input rejected on the client before any backend write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("amount is empty")]
    EmptyAmount,

    #[error("amount is not a number: {0:?}")]
    NotANumber(String),

    #[error("amount must be positive")]
    NonPositive,

    #[error("no horse selected")]
    NoSelection,

    #[error("at most {max} horses can be selected")]
    TooManyHorses { max: u32 },

    #[error("message is blank")]
    EmptyMessage,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    /// The contract returned one of its error codes.
    #[error("contract rejected the call: {0:?}")]
    Contract(ContractError),

    /// The host failed the invocation or a value could not be converted.
    #[error("backend failure: {0}")]
    Backend(String),

    #[error("not signed in")]
    NotSignedIn,

    #[error("unknown account: {0}")]
    UnknownAccount(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<ContractError> for ClientError {
    fn from(err: ContractError) -> Self {
        ClientError::Contract(err)
    }
}

impl ClientError {
    /// Failures caused by what the user did, as opposed to faults in the
    /// backend or the client itself.
    pub fn is_expected(&self) -> bool {
        match self {
            ClientError::Input(_) | ClientError::NotSignedIn | ClientError::UnknownAccount(_) => true,
            ClientError::Contract(e) => !matches!(
                e,
                ContractError::Overflow
                    | ContractError::AdminNotSet
                    | ContractError::AlreadyInitialized
                    | ContractError::InvalidConfig
            ),
            ClientError::Backend(_) | ClientError::Config(_) => false,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ClientError::Input(e) => match e {
                InputError::EmptyAmount | InputError::NoSelection => "모든 정보를 입력해주세요.".into(),
                InputError::NotANumber(_) | InputError::NonPositive => "유효한 금액을 입력해주세요.".into(),
                InputError::TooManyHorses { max } => format!("최대 {max}마리까지만 선택 가능합니다."),
                InputError::EmptyMessage => "메시지를 입력해주세요.".into(),
            },
            ClientError::Contract(e) => contract_message(*e).into(),
            ClientError::NotSignedIn => MSG_LOGIN_REQUIRED.into(),
            ClientError::UnknownAccount(_) => "계정 정보를 찾을 수 없습니다.".into(),
            ClientError::Backend(_) => "서버와 통신 중 오류가 발생했습니다.".into(),
            ClientError::Config(_) => MSG_GENERIC.into(),
        }
    }
}

fn contract_message(err: ContractError) -> &'static str {
    match err {
        ContractError::InvalidBetAmount => "유효한 금액을 입력해주세요.",
        ContractError::InsufficientPoints => "보유 포인트가 부족합니다.",
        ContractError::UnknownRace | ContractError::UnknownMatch => "선택한 경기를 찾을 수 없습니다.",
        ContractError::UnknownHorse => "선택한 마 정보를 찾을 수 없습니다.",
        ContractError::InvalidSelection => "선택한 말의 수가 베팅 방식과 맞지 않습니다.",
        ContractError::NotRegistered => "회원 정보를 찾을 수 없습니다.",
        ContractError::AlreadyRegistered => "이미 가입된 계정입니다.",
        ContractError::InvalidNickname => "닉네임을 확인해주세요.",
        ContractError::EmptyMessage => "메시지를 입력해주세요.",
        ContractError::MessageTooLong => "메시지가 너무 깁니다.",
        ContractError::NotAuthor | ContractError::NotOwner => "본인만 삭제할 수 있습니다.",
        ContractError::StillPending => "진행 중인 베팅은 삭제할 수 없습니다.",
        ContractError::SettlementNotDue => "결과는 잠시 후 확인할 수 있습니다.",
        ContractError::AlreadySettled => "이미 결과가 확정되었습니다.",
        ContractError::NotFound => "요청한 기록을 찾을 수 없습니다.",
        _ => MSG_GENERIC,
    }
}
