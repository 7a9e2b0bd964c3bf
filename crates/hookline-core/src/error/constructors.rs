//! Constructor methods for HookError

use super::types::HookError;

impl HookError {
    /// Create an unknown hook error naming the level it was looked up from
    pub fn unknown_hook_at(name: impl Into<String>, level: impl Into<String>) -> Self {
        Self::UnknownHook {
            name: name.into(),
            level: Some(level.into()),
        }
    }

    /// Create a callback resolution error
    pub fn callback_resolution(
        hook: impl Into<String>,
        callback: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self::CallbackResolution {
            hook: hook.into(),
            callback: callback.into(),
            scope: scope.into(),
        }
    }

    /// Create a callback invocation error.
    ///
    /// Callbacks return this to fail the whole run.
    pub fn invocation(message: impl Into<String>) -> Self {
        Self::CallbackInvocation {
            message: message.into(),
            hook: None,
        }
    }

    /// Create a callback invocation error tagged with the hook name
    pub fn invocation_in(hook: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CallbackInvocation {
            message: message.into(),
            hook: Some(hook.into()),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }
}
