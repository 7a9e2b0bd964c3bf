//! Hookline core library
//!
//! Named, ordered callback chains ("hooks") attached to a type hierarchy
//! and to individual instances.
//!
//! - [`HookHierarchy`] holds one level per class and per instance. Levels
//!   inherit their ancestors' callbacks and copy them on first write.
//! - [`HookExecutor`] runs a callback list against a scope, collecting
//!   return values and optionally halting on the first falsy one.
//! - [`Hookable`] lets a type embed its hooks and run them on itself.
//!
//! # Examples
//!
//! ```rust
//! use hookline_core::{
//!     CallbackEntry, HookArgs, HookHierarchy, HookOptions, HookResult, HookScope, HookValue,
//! };
//! use serde_json::json;
//!
//! struct Person;
//!
//! impl HookScope for Person {
//!     fn dispatch(&mut self, method: &str, _args: &HookArgs) -> Option<HookResult<HookValue>> {
//!         match method {
//!             "wash_hands" => Some(Ok(json!("washed_hands"))),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! # fn main() -> HookResult<()> {
//! let mut hooks = HookHierarchy::new();
//! let person = hooks.add_root("Person");
//! let before_eating = hooks.declare_hook(person, "before_eating", HookOptions::halting())?;
//!
//! before_eating.on(&mut hooks, "wash_hands")?;
//! before_eating.on(&mut hooks, CallbackEntry::inline(|_: &mut Person, _: &HookArgs| Ok(json!(false))))?;
//! before_eating.on(&mut hooks, CallbackEntry::inline(|_: &mut Person, _: &HookArgs| Ok(json!("sat_down"))))?;
//!
//! let results = hooks.run_hook(person, "before_eating", &mut Person, ())?;
//! assert_eq!(results.chain(), &[json!("washed_hands")]);
//! assert!(results.halted());
//! # Ok(())
//! # }
//! ```

pub mod callback;
pub mod config;
pub mod error;
pub mod executor;
pub mod handle;
pub mod hierarchy;
pub mod hookable;
pub mod name;
pub mod options;
pub mod registry;
pub mod results;
pub mod scope;
pub mod value;

// Re-export main types
pub use callback::{CallbackEntry, CallbackList, InlineCallback};
pub use config::{HookDeclaration, HooksConfig, load_from_file};
pub use error::{HookError, HookResult};
pub use executor::HookExecutor;
pub use handle::HookHandle;
pub use hierarchy::{HookHierarchy, HookPlan, LevelId, LevelKind};
pub use hookable::{Hookable, SharedHooks, shared_hooks};
pub use name::HookName;
pub use options::{HookOptions, ScopeResolution};
pub use registry::HookRegistry;
pub use results::HookResults;
pub use scope::{HookScope, SharedScope, shared_scope};
pub use value::{HookArgs, HookValue, is_falsey};
