//! Person hooks demo
//!
//! Declares a `before_eating` hook on a `Person` class, specializes it in a
//! subclass and on a single instance, then runs it at each level.
//!
//! Run: `RUST_LOG=debug cargo run --example person_hooks`

use hookline::{
    CallbackEntry, HookArgs, HookHierarchy, HookOptions, HookResult, HookScope, HookValue,
    LoggingConfig, init_logging,
};
use serde_json::json;
use tracing::info;

#[derive(Debug, Default)]
struct Person {
    name: String,
    hungry: bool,
}

impl HookScope for Person {
    fn dispatch(&mut self, method: &str, args: &HookArgs) -> Option<HookResult<HookValue>> {
        let result = match method {
            "wash_hands" => Ok(json!("washed_hands")),
            "locate_food" => Ok(json!(self.hungry)),
            "sit_down" => Ok(json!("sat_down")),
            "say_grace" => args
                .arg(0)
                .map(|words| json!(format!("{} says {}", self.name, words))),
            _ => return None,
        };
        Some(result)
    }

    fn scope_name(&self) -> String {
        format!("Person({})", self.name)
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(&LoggingConfig::default())?;

    let mut hooks = HookHierarchy::new();
    let person = hooks.add_root("Person");
    let before_eating = hooks.declare_hook(person, "before_eating", HookOptions::halting())?;
    before_eating.on(&mut hooks, "wash_hands")?;
    before_eating.on(&mut hooks, "locate_food")?;
    before_eating.on(&mut hooks, "sit_down")?;

    let pious = hooks.add_subclass(person, "PiousPerson")?;
    before_eating.at(pious).on(&mut hooks, "say_grace")?;

    let alice = hooks.add_instance(pious, "alice")?;
    before_eating.at(alice).on(
        &mut hooks,
        CallbackEntry::inline(|person: &mut Person, _: &HookArgs| {
            Ok(json!(format!("{} unfolds a napkin", person.name)))
        }),
    )?;

    let mut bob = Person {
        name: "bob".to_string(),
        hungry: false,
    };
    let results = hooks.run_hook(person, "before_eating", &mut bob, ())?;
    info!("Person: {:?} (halted: {})", results.chain(), results.halted());

    let mut alice_scope = Person {
        name: "alice".to_string(),
        hungry: true,
    };
    let results = hooks.run_hook(alice, "before_eating", &mut alice_scope, [json!("thanks")])?;
    info!("alice: {:?} (halted: {})", results.chain(), results.halted());

    let results = hooks.run_hook(pious, "before_eating", &mut alice_scope, [json!("amen")])?;
    info!("PiousPerson: {:?} (halted: {})", results.chain(), results.halted());

    Ok(())
}
