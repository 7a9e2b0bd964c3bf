//! Hook inheritance across classes, subclasses and instances

use std::fs;
use std::sync::Arc;

use hookline::{
    CallbackEntry, HookArgs, HookError, HookHierarchy, HookOptions, HookResult, HookScope, HookValue,
    Hookable, LevelId, LoggingConfig, SharedHooks, load_from_file, shared_hooks, shared_scope,
};
use serde_json::json;
use tempfile::TempDir;

struct Guest {
    hooks: SharedHooks<Guest>,
    level: LevelId,
    name: String,
    log: Vec<String>,
}

impl Guest {
    fn new(hooks: &SharedHooks<Guest>, class: LevelId, name: &str) -> Self {
        let level = hooks.write().add_instance(class, name).unwrap();
        Self {
            hooks: Arc::clone(hooks),
            level,
            name: name.to_string(),
            log: Vec::new(),
        }
    }
}

impl HookScope for Guest {
    fn dispatch(&mut self, method: &str, _args: &HookArgs) -> Option<HookResult<HookValue>> {
        match method {
            "take_shower" | "have_dinner" | "dance" | "sleep" => {
                self.log.push(format!("{}:{}", self.name, method));
                Some(Ok(json!(method)))
            }
            "check_wallet" => Some(Ok(json!(false))),
            _ => None,
        }
    }
}

impl Hookable for Guest {
    fn hooks(&self) -> &SharedHooks<Self> {
        &self.hooks
    }

    fn hook_level(&self) -> LevelId {
        self.level
    }
}

fn party() -> (SharedHooks<Guest>, LevelId, LevelId) {
    let hooks = shared_hooks(HookHierarchy::new());
    let (guest, vip) = {
        let mut hooks = hooks.write();
        let guest = hooks.add_root("Guest");
        hooks
            .declare_hook(guest, "after_eight", HookOptions::new())
            .unwrap()
            .on(&mut *hooks, "take_shower")
            .unwrap();
        let vip = hooks.add_subclass(guest, "Vip").unwrap();
        hooks.add_callback(vip, "after_eight", "have_dinner").unwrap();
        (guest, vip)
    };
    (hooks, guest, vip)
}

#[test]
fn test_instances_extend_their_class_privately() {
    let (hooks, guest, vip) = party();
    let mut carol = Guest::new(&hooks, vip, "carol");
    let mut dave = Guest::new(&hooks, vip, "dave");

    carol.on("after_eight", "dance").unwrap();

    carol.run_hook("after_eight", ()).unwrap();
    dave.run_hook("after_eight", ()).unwrap();

    assert_eq!(
        carol.log,
        vec!["carol:take_shower", "carol:have_dinner", "carol:dance"]
    );
    assert_eq!(dave.log, vec!["dave:take_shower", "dave:have_dinner"]);
    assert_eq!(
        hooks.read().callbacks_for(guest, "after_eight").unwrap().names(),
        vec!["take_shower"]
    );
}

#[test]
fn test_class_callbacks_reach_unmaterialized_instances() {
    let (hooks, _guest, vip) = party();
    let mut erin = Guest::new(&hooks, vip, "erin");
    assert!(!hooks.read().is_materialized(erin.hook_level()).unwrap());

    hooks.write().add_callback(vip, "after_eight", "sleep").unwrap();

    erin.run_hook("after_eight", ()).unwrap();
    assert_eq!(
        erin.log,
        vec!["erin:take_shower", "erin:have_dinner", "erin:sleep"]
    );
}

#[test]
fn test_instance_only_hook_is_unknown_to_class() {
    let (hooks, guest, _vip) = party();
    let mut frank = Guest::new(&hooks, guest, "frank");

    frank.define_hook("before_midnight", HookOptions::halting()).unwrap();
    frank.on("before_midnight", "check_wallet").unwrap();
    frank.on("before_midnight", "dance").unwrap();

    let results = frank.run_hook("before_midnight", ()).unwrap();
    assert!(results.is_empty());
    assert!(results.halted());
    assert!(frank.log.is_empty());

    assert!(hooks.read().callbacks_for(guest, "before_midnight").is_err());
}

#[test]
fn test_fixed_scope_runs_on_other_value() {
    let (hooks, guest, _vip) = party();
    let host = shared_scope(Guest::new(&hooks, guest, "host"));
    let mut grace = Guest::new(&hooks, guest, "grace");

    grace
        .define_hook(
            "welcome",
            HookOptions::new().with_fixed_scope(Arc::clone(&host)),
        )
        .unwrap();
    grace.on("welcome", "dance").unwrap();
    grace
        .on(
            "welcome",
            CallbackEntry::inline(|guest: &mut Guest, _: &HookArgs| Ok(json!(guest.name.clone()))),
        )
        .unwrap();

    let results = grace.run_hook("welcome", ()).unwrap();

    assert_eq!(results.chain(), &[json!("dance"), json!("host")]);
    assert!(grace.log.is_empty());
    assert_eq!(host.lock().log, vec!["host:dance"]);
}

#[test]
fn test_nested_run_on_busy_fixed_scope_fails() {
    let (hooks, guest, _vip) = party();
    let host = shared_scope(Guest::new(&hooks, guest, "host"));
    let mut ivan = Guest::new(&hooks, guest, "ivan");

    {
        let mut hooks = hooks.write();
        for name in ["outer", "inner"] {
            hooks
                .declare_hook(guest, name, HookOptions::new().with_fixed_scope(Arc::clone(&host)))
                .unwrap();
        }
        hooks.add_callback(guest, "inner", "dance").unwrap();
        hooks
            .add_callback(
                guest,
                "outer",
                CallbackEntry::inline(|guest: &mut Guest, _: &HookArgs| {
                    let inner = guest.run_hook("inner", ())?;
                    Ok(json!(inner.len()))
                }),
            )
            .unwrap();
    }

    let err = ivan.run_hook("outer", ()).unwrap_err();

    assert!(matches!(
        err,
        HookError::CallbackInvocation { hook: Some(ref hook), .. } if hook == "inner"
    ));
    assert!(host.lock().log.is_empty());
}

#[test]
fn test_hooks_declared_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hooks.toml");
    fs::write(
        &path,
        r#"
[[hooks]]
name = "after_eight"
callbacks = ["take_shower", "dance"]

[[hooks]]
name = "before_midnight"
halts_on_falsey = true
callbacks = ["check_wallet", "sleep"]
"#,
    )
    .unwrap();

    let config = load_from_file(&path).unwrap();
    let hooks = shared_hooks(HookHierarchy::new());
    let guest = hooks.write().add_root("Guest");
    hooks.write().apply_config(guest, &config).unwrap();

    let mut heidi = Guest::new(&hooks, guest, "heidi");
    heidi.run_hook("after_eight", ()).unwrap();
    let results = heidi.run_hook("before_midnight", ()).unwrap();

    assert_eq!(heidi.log, vec!["heidi:take_shower", "heidi:dance"]);
    assert!(results.halted());
}

#[test]
fn test_logging_config_from_json() {
    let mut config = LoggingConfig::default();
    config.merge(serde_json::from_str(r#"{"level": "debug", "format": "json"}"#).unwrap());

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, "json");
}
