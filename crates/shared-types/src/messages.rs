//! User-facing strings. Views map every failure to one of these instead of
//! showing raw errors.

pub const EQUIPMENT_LOAD_FAILED: &str = "Não foi possível carregar os equipamentos.";
pub const EQUIPMENT_EMPTY: &str = "Nenhum equipamento atribuído.";

pub const INSPECTION_SUCCEEDED: &str = "Inspeção registrada com sucesso!";
pub const INSPECTION_FAILED: &str = "Não foi possível registrar a inspeção.";

pub const ISSUE_SUCCEEDED: &str = "Problema reportado com sucesso!";
pub const ISSUE_FAILED: &str = "Não foi possível registrar o problema.";

pub const USERS_LOAD_FAILED: &str = "Não foi possível carregar os usuários.";

pub const SIGN_IN_FAILED: &str = "E-mail ou senha inválidos.";
pub const SIGN_IN_RATE_LIMITED: &str =
    "Muitas tentativas. Aguarde alguns minutos e tente novamente.";
pub const SIGN_IN_UNAVAILABLE: &str =
    "Não foi possível entrar agora. Tente novamente mais tarde.";
pub const NO_DASHBOARD: &str = "Seu perfil não possui um painel disponível.";

pub const SUPERVISOR_PLACEHOLDER_TITLE: &str = "Em desenvolvimento";
pub const SUPERVISOR_PLACEHOLDER_BODY: &str = "O painel do supervisor será implementado em breve.";

pub const SUBMITTING: &str = "Enviando...";

/// Message for a failed sign-in, chosen by the kind of the embedded `AppError`.
pub fn sign_in_failure(kind: Option<crate::AppErrorKind>) -> &'static str {
    use crate::AppErrorKind;
    match kind {
        Some(AppErrorKind::Unauthorized) | Some(AppErrorKind::ValidationError) => SIGN_IN_FAILED,
        Some(AppErrorKind::RateLimited) => SIGN_IN_RATE_LIMITED,
        _ => SIGN_IN_UNAVAILABLE,
    }
}
