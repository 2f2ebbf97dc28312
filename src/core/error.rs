use thiserror::Error;

/// Why an attack command was refused before reaching the resolver.
///
/// Display text is what the player sees.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackRejection {
    #[error("Territorio invalido!")]
    OutOfRange,

    #[error("Um territorio nao pode atacar ele mesmo!")]
    SelfAttack,

    #[error("Nao pode atacar territorio da mesma cor!")]
    SameFaction,

    #[error("Territorio atacante nao possui tropas suficientes!")]
    InsufficientTroops,
}

#[derive(Error, Debug)]
pub enum ConquestError {
    #[error("Erro ao alocar memoria para {count} territorios!")]
    Allocation { count: usize },

    #[error("O jogo precisa de pelo menos {min} territorios! (recebido: {count})")]
    TooFewTerritories { count: i64, min: usize },

    #[error("O territorio precisa ter pelo menos 1 tropa! (recebido: {0})")]
    InvalidTroops(i64),

    #[error("O campo '{field}' nao pode ficar vazio!")]
    EmptyLabel { field: &'static str },

    #[error("{0}")]
    Attack(#[from] AttackRejection),

    #[error("Input closed before the game finished")]
    InputClosed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ConquestError>;
