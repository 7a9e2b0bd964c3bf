//! Core error types for Hookline

use thiserror::Error;

/// Result type alias for hook operations
pub type HookResult<T> = Result<T, HookError>;

/// Main error type for the hook engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HookError {
    /// Hook name was never declared in the level's ancestor chain
    #[error("Unknown hook: {name}")]
    UnknownHook {
        name: String,
        level: Option<String>,
    },

    /// A named callback does not exist on the scope at execution time
    #[error("Callback resolution error: `{callback}` is not defined on {scope} (hook {hook})")]
    CallbackResolution {
        hook: String,
        callback: String,
        scope: String,
    },

    /// Raised by a callback itself
    #[error("Callback invocation error: {message}")]
    CallbackInvocation {
        message: String,
        hook: Option<String>,
    },

    /// Level handle does not belong to the hierarchy
    #[error("Unknown hook level: #{id}")]
    UnknownLevel { id: usize },

    /// Hook configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },
}

impl HookError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownHook { .. } => "HOOK_UNKNOWN",
            Self::CallbackResolution { .. } => "HOOK_CALLBACK_RESOLUTION",
            Self::CallbackInvocation { .. } => "HOOK_CALLBACK_INVOCATION",
            Self::UnknownLevel { .. } => "HOOK_UNKNOWN_LEVEL",
            Self::Config { .. } => "HOOK_CONFIG",
        }
    }

    /// Get optional context about the error
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::UnknownHook { level, .. } => level.as_deref(),
            Self::CallbackInvocation { hook, .. } => hook.as_deref(),
            Self::Config { context, .. } => context.as_deref(),
            Self::CallbackResolution { .. } | Self::UnknownLevel { .. } => None,
        }
    }
}
